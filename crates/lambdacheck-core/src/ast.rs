//! Syntax tree supplied by the front end.
//!
//! The tree mirrors Go's statement and expression forms closely enough to be
//! walked completely, but carries no type syntax: types arrive already
//! resolved, attached to each [`Expr`] as a [`TypeId`].

use serde::{Deserialize, Serialize};

use crate::program::ObjectId;
use crate::types::TypeId;

/// Byte range into a file's source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Display path, e.g. `a/main.go`.
    pub path: String,
    /// Declared package name.
    pub package: String,
    #[serde(default)]
    pub imports: Vec<Import>,
    #[serde(default)]
    pub decls: Vec<Decl>,
    /// Source text, when available for rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub path: String,
    /// Explicit import name (`lambda2 "github.com/..."`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Ident>,
    pub span: Span,
}

/// A declared name, not used as an expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj: Option<ObjectId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decl {
    Func(FuncDecl),
    Var(ValueSpec),
    Const(ValueSpec),
    Type(TypeSpec),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: Ident,
    /// Receiver name for methods; the receiver type lives on the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recv: Option<Ident>,
    /// Absent for functions implemented outside Go.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Block>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    #[serde(default)]
    pub values: Vec<Expr>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: Ident,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    Expr {
        expr: Expr,
    },
    /// Assignment or short variable declaration (`op` is `=`, `:=`, `+=`, ...).
    Assign {
        lhs: Vec<Expr>,
        op: String,
        rhs: Vec<Expr>,
    },
    Decl {
        decl: Decl,
    },
    Block(Block),
    If {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        init: Option<Box<Stmt>>,
        cond: Expr,
        then: Block,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        els: Option<Box<Stmt>>,
    },
    For {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        init: Option<Box<Stmt>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cond: Option<Expr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        post: Option<Box<Stmt>>,
        body: Block,
    },
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<Expr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<Expr>,
        x: Expr,
        body: Block,
    },
    /// Expression and type switches.
    Switch {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        init: Option<Box<Stmt>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tag: Option<Expr>,
        #[serde(default)]
        clauses: Vec<CaseClause>,
    },
    Select {
        #[serde(default)]
        clauses: Vec<CommClause>,
    },
    Return {
        #[serde(default)]
        results: Vec<Expr>,
    },
    Go {
        call: Expr,
    },
    Defer {
        call: Expr,
    },
    Send {
        chan: Expr,
        value: Expr,
    },
    IncDec {
        x: Expr,
        op: String,
    },
    Labeled {
        label: Ident,
        stmt: Box<Stmt>,
    },
    /// `break`, `continue`, `goto`, `fallthrough`.
    Branch {
        keyword: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseClause {
    /// Empty for `default:`.
    #[serde(default)]
    pub exprs: Vec<Expr>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// A `case` of a `select` statement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommClause {
    /// Send or receive statement; `None` for `default:`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comm: Option<Box<Stmt>>,
    #[serde(default)]
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// An expression together with its resolved type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    pub span: Span,
    /// Type the front end resolved for this expression, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeId>,
    pub kind: ExprKind,
}

impl Expr {
    pub fn new(span: Span, kind: ExprKind) -> Self {
        Self {
            span,
            ty: None,
            kind,
        }
    }

    pub fn with_type(mut self, ty: TypeId) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Name of a bare identifier expression.
    ///
    /// Parenthesized identifiers are not bare.
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Ident { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Strips any number of enclosing parentheses.
    pub fn unparen(&self) -> &Expr {
        let mut expr = self;
        while let ExprKind::Paren { x } = &expr.kind {
            expr = x;
        }
        expr
    }

    pub fn as_call(&self) -> Option<&CallExpr> {
        match &self.kind {
            ExprKind::Call(call) => Some(call),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExprKind {
    Ident {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        obj: Option<ObjectId>,
    },
    BasicLit {
        lit: LitKind,
        value: String,
    },
    /// Function literal; its signature is the expression's type.
    FuncLit {
        body: Block,
    },
    Call(CallExpr),
    /// `x.sel`, covering qualified identifiers, fields and methods.
    Selector {
        x: Box<Expr>,
        sel: Ident,
    },
    Paren {
        x: Box<Expr>,
    },
    Unary {
        op: String,
        x: Box<Expr>,
    },
    Binary {
        op: String,
        x: Box<Expr>,
        y: Box<Expr>,
    },
    CompositeLit {
        #[serde(default)]
        elts: Vec<Expr>,
    },
    KeyValue {
        key: Box<Expr>,
        value: Box<Expr>,
    },
    Index {
        x: Box<Expr>,
        indices: Vec<Expr>,
    },
    Slice {
        x: Box<Expr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        low: Option<Box<Expr>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        high: Option<Box<Expr>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<Box<Expr>>,
    },
    Star {
        x: Box<Expr>,
    },
    TypeAssert {
        x: Box<Expr>,
    },
    /// Type expression in value position (conversions, `make`, `new`).
    TypeExpr,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    #[serde(default)]
    pub args: Vec<Expr>,
    /// Offset of the opening `(`.
    pub lparen: u32,
    /// Offset of the closing `)`.
    pub rparen: u32,
    /// Offset of a trailing `...`, if the last argument is spread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ellipsis: Option<u32>,
}
