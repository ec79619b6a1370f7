//! Go-like fixtures with consistent source text and syntax tree.
//!
//! Each call appended to a [`Fixture`] is written as one line of `main()` and
//! recorded with the offsets it has in that text, so diagnostics can be
//! rendered against the generated source.

use lambdacheck_core::ast::{
    Block, CallExpr, Decl, ExprKind, FuncDecl, Ident, Import, LitKind, Stmt,
};
use lambdacheck_core::types::Field;
use lambdacheck_core::{
    BasicKind, Expr, File, ObjectId, Program, ProgramBuilder, Span, Type, TypeId,
};

use crate::analyze::LAMBDA_PACKAGE;
use crate::{CheckConfig, Diagnostics};

pub const MAIN: &str = "example.com/app";

/// An argument expression together with how it is spelled.
#[derive(Clone, Debug)]
pub struct Arg {
    text: String,
    ty: TypeId,
    kind: ArgKind,
}

#[derive(Clone, Debug)]
enum ArgKind {
    Ident(ObjectId),
    FuncLit,
    StringLit,
    CompositeLit,
    Paren(Box<Arg>),
}

impl Arg {
    pub fn paren(self) -> Arg {
        Arg {
            text: format!("({})", self.text),
            ty: self.ty,
            kind: ArgKind::Paren(Box::new(self)),
        }
    }

    fn expr(&self, offset: u32) -> Expr {
        let end = offset + self.text.len() as u32;
        let span = Span::new(offset, end);
        let kind = match &self.kind {
            ArgKind::Ident(obj) => ExprKind::Ident {
                name: self.text.clone(),
                obj: Some(*obj),
            },
            ArgKind::FuncLit => ExprKind::FuncLit {
                body: Block {
                    stmts: vec![],
                    span: Span::new(end - 2, end),
                },
            },
            ArgKind::StringLit => ExprKind::BasicLit {
                lit: LitKind::String,
                value: self.text.clone(),
            },
            ArgKind::CompositeLit => ExprKind::CompositeLit { elts: vec![] },
            ArgKind::Paren(inner) => ExprKind::Paren {
                x: Box::new(inner.expr(offset + 1)),
            },
        };
        Expr::new(span, kind).with_type(self.ty)
    }
}

pub struct Fixture {
    pub b: ProgramBuilder,
    source: String,
    import_span: Span,
    stmts: Vec<Stmt>,
    lambda: ObjectId,
    start: ObjectId,
    start_with_context: ObjectId,
    ctx: ObjectId,
    pub event: TypeId,
    pub response: TypeId,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_lambda_package(LAMBDA_PACKAGE)
    }

    /// Declares the entry points in `package`, e.g. a vendored copy.
    pub fn with_lambda_package(package: &str) -> Self {
        let mut b = ProgramBuilder::new();
        let context = b.context_type();
        let any = b.any_type();

        let lambda = b.package_name("lambda", package);
        let start_sig = b.signature(&[any], &[]);
        let start = b.func(package, "Start", start_sig);
        let start_with_context_sig = b.signature(&[context, any], &[]);
        let start_with_context = b.func(package, "StartWithContext", start_with_context_sig);
        let ctx = b.var(MAIN, "ctx", context);

        let string = b.basic(BasicKind::String);
        let int = b.basic(BasicKind::Int);
        let event = b.named(Some(MAIN), "MyEvent");
        let event_struct = b.struct_type(vec![field("Name", string), field("Age", int)]);
        b.set_underlying(event, event_struct);
        let response = b.named(Some(MAIN), "MyResponse");
        let response_struct = b.struct_type(vec![field("Message", string)]);
        b.set_underlying(response, response_struct);

        let mut source = String::from("package main\n\nimport ");
        let import_start = source.len() as u32;
        source.push_str(&format!("{package:?}"));
        let import_span = Span::new(import_start, source.len() as u32);
        source.push_str("\n\nfunc main() {\n");

        Self {
            b,
            source,
            import_span,
            stmts: vec![],
            lambda,
            start,
            start_with_context,
            ctx,
            event,
            response,
        }
    }

    pub fn context(&mut self) -> TypeId {
        self.b.context_type()
    }

    pub fn error(&self) -> TypeId {
        self.b.error_type()
    }

    pub fn any(&self) -> TypeId {
        self.b.any_type()
    }

    pub fn sig(&mut self, params: &[TypeId], results: &[TypeId]) -> TypeId {
        self.b.signature(params, results)
    }

    /// `func(...) {}` of the given signature type.
    pub fn func_lit(&self, sig: TypeId) -> Arg {
        Arg {
            text: format!("{} {{}}", self.type_text(sig)),
            ty: sig,
            kind: ArgKind::FuncLit,
        }
    }

    /// Declares a package-level function and refers to it by name.
    pub fn func(&mut self, name: &str, sig: TypeId) -> Arg {
        let obj = self.b.func(MAIN, name, sig);
        self.ident(name, obj, sig)
    }

    pub fn ident(&self, name: &str, obj: ObjectId, ty: TypeId) -> Arg {
        Arg {
            text: name.to_owned(),
            ty,
            kind: ArgKind::Ident(obj),
        }
    }

    pub fn string_lit(&mut self, value: &str) -> Arg {
        Arg {
            text: format!("{value:?}"),
            ty: self.b.basic(BasicKind::String),
            kind: ArgKind::StringLit,
        }
    }

    /// `T{}` for a named type.
    pub fn composite(&self, ty: TypeId) -> Arg {
        Arg {
            text: format!("{}{{}}", self.type_text(ty)),
            ty,
            kind: ArgKind::CompositeLit,
        }
    }

    /// The `ctx` variable of type `context.Context`.
    pub fn ctx(&mut self) -> Arg {
        let context = self.context();
        self.ident("ctx", self.ctx, context)
    }

    /// `lambda.Start(handler)`; returns the offset of `(`.
    pub fn start(&mut self, handler: Arg) -> u32 {
        let sig = self.object_type(self.start);
        self.call_selector(("lambda", self.lambda), ("Start", self.start, sig), vec![handler])
    }

    /// `lambda.StartWithContext(ctx, handler)`; returns the offset of `(`.
    pub fn start_with_context(&mut self, handler: Arg) -> u32 {
        let ctx = self.ctx();
        self.start_with_context_args(vec![ctx, handler])
    }

    pub fn start_with_context_args(&mut self, args: Vec<Arg>) -> u32 {
        let sig = self.object_type(self.start_with_context);
        self.call_selector(
            ("lambda", self.lambda),
            ("StartWithContext", self.start_with_context, sig),
            args,
        )
    }

    /// `x.sel(args...)`.
    pub fn call_selector(
        &mut self,
        (x, x_obj): (&str, ObjectId),
        (sel, sel_obj, sel_ty): (&str, ObjectId, TypeId),
        args: Vec<Arg>,
    ) -> u32 {
        let text = format!("{x}.{sel}");
        self.push_call(&text, args, |start| {
            let x_span = Span::new(start, start + x.len() as u32);
            let sel_start = x_span.end + 1;
            let x = Expr::new(
                x_span,
                ExprKind::Ident {
                    name: x.to_owned(),
                    obj: Some(x_obj),
                },
            );
            let sel = Ident {
                name: sel.to_owned(),
                span: Span::new(sel_start, sel_start + sel.len() as u32),
                obj: Some(sel_obj),
            };
            Expr::new(
                Span::new(start, sel.span.end),
                ExprKind::Selector {
                    x: Box::new(x),
                    sel,
                },
            )
            .with_type(sel_ty)
        })
    }

    /// `name(args...)` calling a package-level function.
    pub fn call_ident(&mut self, callee: &Arg, args: Vec<Arg>) -> u32 {
        let callee = callee.clone();
        let text = callee.text.clone();
        self.push_call(&text, args, |start| callee.expr(start))
    }

    fn push_call(
        &mut self,
        fun_text: &str,
        args: Vec<Arg>,
        fun: impl FnOnce(u32) -> Expr,
    ) -> u32 {
        self.source.push_str("    ");
        let start = self.offset();
        self.source.push_str(fun_text);
        let fun = fun(start);

        let lparen = self.offset();
        self.source.push('(');
        let mut exprs = Vec::with_capacity(args.len());
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.source.push_str(", ");
            }
            exprs.push(arg.expr(self.offset()));
            self.source.push_str(&arg.text);
        }
        let rparen = self.offset();
        self.source.push(')');
        let end = self.offset();
        self.source.push('\n');

        let call = Expr::new(
            Span::new(start, end),
            ExprKind::Call(CallExpr {
                fun: Box::new(fun),
                args: exprs,
                lparen,
                rparen,
                ellipsis: None,
            }),
        );
        self.stmts.push(Stmt::Expr { expr: call });
        lparen
    }

    pub fn finish(mut self) -> Program {
        let body_end = self.offset();
        self.source.push_str("}\n");
        let end = self.offset();

        let main = FuncDecl {
            name: Ident {
                name: "main".to_owned(),
                span: Span::new(0, 0),
                obj: None,
            },
            recv: None,
            body: Some(Block {
                stmts: self.stmts,
                span: Span::new(body_end.saturating_sub(1), end),
            }),
            span: Span::new(0, end),
        };
        self.b.add_file(File {
            path: "main.go".to_owned(),
            package: "main".to_owned(),
            imports: vec![Import {
                path: LAMBDA_PACKAGE.to_owned(),
                name: None,
                span: self.import_span,
            }],
            decls: vec![Decl::Func(main)],
            source: Some(self.source),
        });
        self.b.finish()
    }

    pub fn check(self) -> Diagnostics {
        self.check_with(&CheckConfig::default())
    }

    pub fn check_with(self, config: &CheckConfig) -> Diagnostics {
        let program = self.finish();
        crate::check(&program, config)
    }

    fn offset(&self) -> u32 {
        self.source.len() as u32
    }

    fn object_type(&self, obj: ObjectId) -> TypeId {
        self.b
            .program()
            .object(obj)
            .and_then(|o| o.ty)
            .expect("fixture objects are typed")
    }

    /// Go spelling of a type, enough for readable fixture source.
    pub fn type_text(&self, ty: TypeId) -> String {
        let list = |ids: &[TypeId]| {
            ids.iter()
                .map(|&id| self.type_text(id))
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self.b.program().ty(ty) {
            Some(Type::Basic(kind)) => kind.name().to_owned(),
            Some(Type::Named(named)) => match named.package.as_deref() {
                Some("context") => format!("context.{}", named.name),
                _ => named.name.clone(),
            },
            Some(Type::Pointer { elem }) => format!("*{}", self.type_text(*elem)),
            Some(Type::Slice { elem }) => format!("[]{}", self.type_text(*elem)),
            Some(Type::Interface(iface)) if iface.methods.is_empty() && iface.embeds.is_empty() => {
                "interface{}".to_owned()
            }
            Some(Type::Signature(sig)) => {
                let results = match sig.results.as_slice() {
                    [] => String::new(),
                    [one] => format!(" {}", self.type_text(*one)),
                    many => format!(" ({})", list(many)),
                };
                format!("func({}){}", list(&sig.params), results)
            }
            _ => "T".to_owned(),
        }
    }
}

fn field(name: &str, ty: TypeId) -> Field {
    Field {
        name: name.to_owned(),
        ty,
        embedded: false,
    }
}
