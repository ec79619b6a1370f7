use lambdacheck_core::types::{Signature, Type, TypeId};

use super::TypeOracle;
use super::method_set::interface_methods;

/// Bound on named-type chains and structural recursion.
///
/// Validated programs can still contain cycles (`type A B; type B A`), which
/// Go rejects but a front end might pass through.
pub(crate) const MAX_DEPTH: usize = 64;

pub(super) fn underlying<O: TypeOracle + ?Sized>(oracle: &O, mut ty: TypeId) -> TypeId {
    for _ in 0..MAX_DEPTH {
        match oracle.ty(ty) {
            Some(Type::Named(named)) => ty = named.underlying,
            _ => return ty,
        }
    }
    ty
}

pub(super) fn identical<O: TypeOracle + ?Sized>(oracle: &O, a: TypeId, b: TypeId) -> bool {
    identical_at(oracle, a, b, 0)
}

fn identical_at<O: TypeOracle + ?Sized>(oracle: &O, a: TypeId, b: TypeId, depth: usize) -> bool {
    if a == b {
        return true;
    }
    if depth > MAX_DEPTH {
        return false;
    }
    let (Some(ta), Some(tb)) = (oracle.ty(a), oracle.ty(b)) else {
        return false;
    };

    let same = |x: TypeId, y: TypeId| identical_at(oracle, x, y, depth + 1);

    match (ta, tb) {
        (Type::Basic(x), Type::Basic(y)) => x == y,
        // One entry per declaration; same-named local types stay distinct.
        (Type::Named(_), Type::Named(_)) => false,
        (Type::Pointer { elem: x }, Type::Pointer { elem: y })
        | (Type::Slice { elem: x }, Type::Slice { elem: y }) => same(*x, *y),
        (Type::Array { len: lx, elem: x }, Type::Array { len: ly, elem: y }) => {
            lx == ly && same(*x, *y)
        }
        (Type::Map { key: kx, value: vx }, Type::Map { key: ky, value: vy }) => {
            same(*kx, *ky) && same(*vx, *vy)
        }
        (Type::Chan { dir: dx, elem: x }, Type::Chan { dir: dy, elem: y }) => {
            dx == dy && same(*x, *y)
        }
        (Type::Struct(x), Type::Struct(y)) => {
            x.fields.len() == y.fields.len()
                && x.fields.iter().zip(&y.fields).all(|(fx, fy)| {
                    fx.name == fy.name && fx.embedded == fy.embedded && same(fx.ty, fy.ty)
                })
        }
        (Type::Interface(_), Type::Interface(_)) => {
            let mx = interface_methods(oracle, a);
            let my = interface_methods(oracle, b);
            mx.len() == my.len()
                && mx
                    .iter()
                    .all(|(name, &sx)| my.get(name).is_some_and(|&sy| same(sx, sy)))
        }
        (Type::Signature(x), Type::Signature(y)) => signatures_identical(x, y, same),
        _ => false,
    }
}

/// Receivers are not part of a signature's identity.
fn signatures_identical(x: &Signature, y: &Signature, same: impl Fn(TypeId, TypeId) -> bool) -> bool {
    x.variadic == y.variadic
        && x.params.len() == y.params.len()
        && x.results.len() == y.results.len()
        && x.params.iter().zip(&y.params).all(|(&a, &b)| same(a, b))
        && x.results.iter().zip(&y.results).all(|(&a, &b)| same(a, b))
}
