//! Syntax tree visitor.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct. Override `visit_*` methods to add logic.
//! Call `walk_*` within your override to continue recursion (or omit it to stop).
//!
//! ```ignore
//! impl Visitor for MyPass {
//!     fn visit_call(&mut self, expr: &Expr, call: &CallExpr) {
//!         // Pre-order logic
//!         walk_call(self, call);
//!         // Post-order logic
//!     }
//! }
//! ```

use crate::ast::{
    Block, CallExpr, CaseClause, CommClause, Decl, Expr, ExprKind, File, FuncDecl, Ident, Stmt,
};

pub trait Visitor: Sized {
    fn visit_file(&mut self, file: &File) {
        walk_file(self, file);
    }

    fn visit_decl(&mut self, decl: &Decl) {
        walk_decl(self, decl);
    }

    fn visit_func_decl(&mut self, func: &FuncDecl) {
        walk_func_decl(self, func);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    /// `expr` is the call expression itself, `call` its payload.
    fn visit_call(&mut self, _expr: &Expr, call: &CallExpr) {
        walk_call(self, call);
    }

    fn visit_ident(&mut self, _ident: &Ident) {
        // Leaf node
    }
}

pub fn walk_file<V: Visitor>(visitor: &mut V, file: &File) {
    for import in &file.imports {
        if let Some(name) = &import.name {
            visitor.visit_ident(name);
        }
    }
    for decl in &file.decls {
        visitor.visit_decl(decl);
    }
}

pub fn walk_decl<V: Visitor>(visitor: &mut V, decl: &Decl) {
    match decl {
        Decl::Func(func) => visitor.visit_func_decl(func),
        Decl::Var(spec) | Decl::Const(spec) => {
            for name in &spec.names {
                visitor.visit_ident(name);
            }
            for value in &spec.values {
                visitor.visit_expr(value);
            }
        }
        Decl::Type(spec) => visitor.visit_ident(&spec.name),
    }
}

pub fn walk_func_decl<V: Visitor>(visitor: &mut V, func: &FuncDecl) {
    if let Some(recv) = &func.recv {
        visitor.visit_ident(recv);
    }
    visitor.visit_ident(&func.name);
    if let Some(body) = &func.body {
        visitor.visit_block(body);
    }
}

pub fn walk_block<V: Visitor>(visitor: &mut V, block: &Block) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
}

fn walk_exprs<V: Visitor>(visitor: &mut V, exprs: &[Expr]) {
    for expr in exprs {
        visitor.visit_expr(expr);
    }
}

fn walk_opt_stmt<V: Visitor>(visitor: &mut V, stmt: Option<&Stmt>) {
    if let Some(stmt) = stmt {
        visitor.visit_stmt(stmt);
    }
}

fn walk_opt_expr<V: Visitor>(visitor: &mut V, expr: Option<&Expr>) {
    if let Some(expr) = expr {
        visitor.visit_expr(expr);
    }
}

pub fn walk_stmt<V: Visitor>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Expr { expr } => visitor.visit_expr(expr),
        Stmt::Assign { lhs, rhs, .. } => {
            walk_exprs(visitor, lhs);
            walk_exprs(visitor, rhs);
        }
        Stmt::Decl { decl } => visitor.visit_decl(decl),
        Stmt::Block(block) => visitor.visit_block(block),
        Stmt::If {
            init,
            cond,
            then,
            els,
        } => {
            walk_opt_stmt(visitor, init.as_deref());
            visitor.visit_expr(cond);
            visitor.visit_block(then);
            walk_opt_stmt(visitor, els.as_deref());
        }
        Stmt::For {
            init,
            cond,
            post,
            body,
        } => {
            walk_opt_stmt(visitor, init.as_deref());
            walk_opt_expr(visitor, cond.as_ref());
            walk_opt_stmt(visitor, post.as_deref());
            visitor.visit_block(body);
        }
        Stmt::Range {
            key,
            value,
            x,
            body,
        } => {
            walk_opt_expr(visitor, key.as_ref());
            walk_opt_expr(visitor, value.as_ref());
            visitor.visit_expr(x);
            visitor.visit_block(body);
        }
        Stmt::Switch { init, tag, clauses } => {
            walk_opt_stmt(visitor, init.as_deref());
            walk_opt_expr(visitor, tag.as_ref());
            for clause in clauses {
                walk_case_clause(visitor, clause);
            }
        }
        Stmt::Select { clauses } => {
            for clause in clauses {
                walk_comm_clause(visitor, clause);
            }
        }
        Stmt::Return { results } => walk_exprs(visitor, results),
        Stmt::Go { call } | Stmt::Defer { call } => visitor.visit_expr(call),
        Stmt::Send { chan, value } => {
            visitor.visit_expr(chan);
            visitor.visit_expr(value);
        }
        Stmt::IncDec { x, .. } => visitor.visit_expr(x),
        Stmt::Labeled { label, stmt } => {
            visitor.visit_ident(label);
            visitor.visit_stmt(stmt);
        }
        Stmt::Branch { .. } => {}
    }
}

fn walk_case_clause<V: Visitor>(visitor: &mut V, clause: &CaseClause) {
    walk_exprs(visitor, &clause.exprs);
    for stmt in &clause.body {
        visitor.visit_stmt(stmt);
    }
}

fn walk_comm_clause<V: Visitor>(visitor: &mut V, clause: &CommClause) {
    walk_opt_stmt(visitor, clause.comm.as_deref());
    for stmt in &clause.body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_expr<V: Visitor>(visitor: &mut V, expr: &Expr) {
    match &expr.kind {
        ExprKind::Ident { .. } | ExprKind::BasicLit { .. } | ExprKind::TypeExpr => {}
        ExprKind::FuncLit { body } => visitor.visit_block(body),
        ExprKind::Call(call) => visitor.visit_call(expr, call),
        ExprKind::Selector { x, sel } => {
            visitor.visit_expr(x);
            visitor.visit_ident(sel);
        }
        ExprKind::Paren { x }
        | ExprKind::Unary { x, .. }
        | ExprKind::Star { x }
        | ExprKind::TypeAssert { x } => visitor.visit_expr(x),
        ExprKind::Binary { x, y, .. } => {
            visitor.visit_expr(x);
            visitor.visit_expr(y);
        }
        ExprKind::CompositeLit { elts } => walk_exprs(visitor, elts),
        ExprKind::KeyValue { key, value } => {
            visitor.visit_expr(key);
            visitor.visit_expr(value);
        }
        ExprKind::Index { x, indices } => {
            visitor.visit_expr(x);
            walk_exprs(visitor, indices);
        }
        ExprKind::Slice { x, low, high, max } => {
            visitor.visit_expr(x);
            walk_opt_expr(visitor, low.as_deref());
            walk_opt_expr(visitor, high.as_deref());
            walk_opt_expr(visitor, max.as_deref());
        }
    }
}

pub fn walk_call<V: Visitor>(visitor: &mut V, call: &CallExpr) {
    visitor.visit_expr(&call.fun);
    walk_exprs(visitor, &call.args);
}
