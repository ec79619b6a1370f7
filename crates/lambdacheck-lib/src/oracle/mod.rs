//! Type queries the analysis passes rely on.
//!
//! [`TypeOracle`] is the seam between passes and whatever holds resolved type
//! information. Only table lookups are required; the Go typing rules
//! (underlying types, identity, method sets, interface satisfaction) are
//! provided on top of them.

mod identity;
mod method_set;

#[cfg(test)]
mod method_set_tests;

use lambdacheck_core::ast::{CallExpr, ExprKind};
use lambdacheck_core::{
    ERROR_TYPE, Expr, Object, ObjectId, ObjectKind, Program, Signature, Type, TypeId,
};

pub use method_set::MethodSet;

pub trait TypeOracle {
    fn ty(&self, id: TypeId) -> Option<&Type>;

    fn object(&self, id: ObjectId) -> Option<&Object>;

    /// Finds a declared type by package path and name; `None` is the universe.
    fn lookup_type(&self, package: Option<&str>, name: &str) -> Option<TypeId>;

    fn type_of(&self, expr: &Expr) -> Option<TypeId> {
        expr.ty
    }

    /// Follows named types to the type they are defined over.
    fn underlying(&self, ty: TypeId) -> TypeId {
        identity::underlying(self, ty)
    }

    /// Function signature of `ty`, looking through named types.
    fn signature(&self, ty: TypeId) -> Option<&Signature> {
        let underlying = self.underlying(ty);
        self.ty(underlying)?.as_signature()
    }

    /// The function object a call statically dispatches to.
    ///
    /// Parentheses and generic instantiation are looked through. Calls of
    /// function values, closures, conversions and interface methods have no
    /// static callee. Concrete methods do resolve; their signature carries a
    /// receiver.
    fn static_callee(&self, call: &CallExpr) -> Option<&Object> {
        let mut fun = call.fun.unparen();
        if let ExprKind::Index { x, .. } = &fun.kind {
            fun = x.unparen();
        }

        let (id, qualifier) = match &fun.kind {
            ExprKind::Ident { obj, .. } => ((*obj)?, None),
            ExprKind::Selector { x, sel } => (sel.obj?, Some(x.unparen())),
            _ => return None,
        };

        let object = self.object(id)?;
        if object.kind != ObjectKind::Func {
            return None;
        }
        if let Some(x) = qualifier
            && !self.is_package_qualifier(x)
            && self.is_interface_method(x, object)
        {
            return None;
        }
        Some(object)
    }

    /// Whether `x` names an imported package, as in `pkg.Name`.
    fn is_package_qualifier(&self, x: &Expr) -> bool {
        let ExprKind::Ident { obj: Some(id), .. } = &x.kind else {
            return false;
        };
        self.object(*id)
            .is_some_and(|object| object.kind == ObjectKind::PackageName)
    }

    /// Whether selecting `method` on `x` dispatches through an interface.
    ///
    /// Interface methods carry no receiver in their signature; an operand of
    /// interface type (or pointer to one) always dispatches dynamically.
    fn is_interface_method(&self, x: &Expr, method: &Object) -> bool {
        let operand_is_interface = self.type_of(x).is_some_and(|ty| {
            let ty = match self.ty(self.underlying(ty)) {
                Some(Type::Pointer { elem }) => *elem,
                _ => ty,
            };
            matches!(self.ty(self.underlying(ty)), Some(Type::Interface(_)))
        });
        let has_receiver = method
            .ty
            .and_then(|ty| self.signature(ty))
            .is_some_and(Signature::is_method);
        operand_is_interface || !has_receiver
    }

    fn identical(&self, a: TypeId, b: TypeId) -> bool {
        identity::identical(self, a, b)
    }

    /// Method set of `ty`, keyed by method name.
    fn method_set(&self, ty: TypeId) -> MethodSet {
        method_set::method_set(self, ty)
    }

    /// Whether `ty` satisfies the interface `iface`.
    ///
    /// False when `iface` is not an interface type.
    fn implements(&self, ty: TypeId, iface: TypeId) -> bool {
        let iface = self.underlying(iface);
        if !matches!(self.ty(iface), Some(Type::Interface(_))) {
            return false;
        }

        let provided = self.method_set(ty);
        method_set::interface_methods(self, iface)
            .iter()
            .all(|(name, required)| {
                provided
                    .get(name)
                    .is_some_and(|&sig| self.identical(sig, *required))
            })
    }

    fn error_type(&self) -> Option<TypeId> {
        self.lookup_type(None, ERROR_TYPE)
    }
}

impl TypeOracle for Program {
    fn ty(&self, id: TypeId) -> Option<&Type> {
        Program::ty(self, id)
    }

    fn object(&self, id: ObjectId) -> Option<&Object> {
        Program::object(self, id)
    }

    fn lookup_type(&self, package: Option<&str>, name: &str) -> Option<TypeId> {
        Program::lookup_type(self, package, name)
    }
}
