//! Method sets and promotion through embedded fields.

use indexmap::{IndexMap, IndexSet};
use lambdacheck_core::types::{Type, TypeId};

use super::TypeOracle;
use super::identity::MAX_DEPTH;

/// Method name to signature type.
pub type MethodSet = IndexMap<String, TypeId>;

/// A type reached while searching embedded fields.
#[derive(Clone, Copy)]
struct Embedded {
    ty: TypeId,
    /// Reached through a pointer, so pointer-receiver methods apply.
    indirect: bool,
    /// Reached along more than one path at the same depth.
    multiples: bool,
}

/// A name found at the current depth.
struct Candidate {
    hits: usize,
    signature: Option<TypeId>,
}

pub(super) fn method_set<O: TypeOracle + ?Sized>(oracle: &O, ty: TypeId) -> MethodSet {
    let start = match oracle.ty(ty) {
        Some(Type::Pointer { elem }) => {
            let base = oracle.underlying(*elem);
            if matches!(
                oracle.ty(base),
                Some(Type::Interface(_) | Type::Pointer { .. })
            ) {
                // Pointers to interfaces and pointers to pointers have no methods.
                return MethodSet::new();
            }
            Embedded {
                ty: *elem,
                indirect: true,
                multiples: false,
            }
        }
        _ => Embedded {
            ty,
            indirect: false,
            multiples: false,
        },
    };

    let mut methods = MethodSet::new();
    // Names occupied at a shallower depth, by a method or a field.
    let mut shadowed: IndexSet<String> = IndexSet::new();
    let mut seen: IndexSet<TypeId> = IndexSet::new();
    let mut current = vec![start];

    for _ in 0..MAX_DEPTH {
        if current.is_empty() {
            break;
        }

        let mut found: IndexMap<String, Candidate> = IndexMap::new();
        let mut next: IndexMap<TypeId, Embedded> = IndexMap::new();

        for entry in current {
            if !seen.insert(entry.ty) {
                continue;
            }
            let weight = if entry.multiples { 2 } else { 1 };
            let mut record = |name: &str, signature: Option<TypeId>| {
                let candidate = found.entry(name.to_owned()).or_insert(Candidate {
                    hits: 0,
                    signature,
                });
                candidate.hits += weight;
            };

            if let Some(Type::Named(named)) = oracle.ty(entry.ty) {
                for method in &named.methods {
                    if method.pointer_receiver && !entry.indirect {
                        continue;
                    }
                    record(&method.name, Some(method.signature));
                }
            }

            let underlying = oracle.underlying(entry.ty);
            match oracle.ty(underlying) {
                Some(Type::Interface(_)) => {
                    for (name, signature) in interface_methods(oracle, underlying) {
                        record(&name, Some(signature));
                    }
                }
                Some(Type::Struct(st)) => {
                    for field in &st.fields {
                        record(&field.name, None);
                        if !field.embedded {
                            continue;
                        }
                        let embedded = match oracle.ty(field.ty) {
                            Some(Type::Pointer { elem }) => Embedded {
                                ty: *elem,
                                indirect: true,
                                multiples: false,
                            },
                            _ => Embedded {
                                ty: field.ty,
                                indirect: entry.indirect,
                                multiples: false,
                            },
                        };
                        next.entry(embedded.ty)
                            .and_modify(|e| {
                                e.multiples = true;
                                e.indirect |= embedded.indirect;
                            })
                            .or_insert(embedded);
                    }
                }
                _ => {}
            }
        }

        for (name, candidate) in found {
            if !shadowed.insert(name.clone()) {
                continue;
            }
            // Ambiguous selectors are not in the method set.
            if candidate.hits > 1 {
                continue;
            }
            if let Some(signature) = candidate.signature {
                methods.insert(name, signature);
            }
        }

        current = next.into_values().collect();
    }

    methods
}

/// All methods of an interface, including those of embedded interfaces.
pub(super) fn interface_methods<O: TypeOracle + ?Sized>(oracle: &O, iface: TypeId) -> MethodSet {
    let mut methods = MethodSet::new();
    let mut seen: IndexSet<TypeId> = IndexSet::new();
    let mut stack = vec![iface];

    while let Some(ty) = stack.pop() {
        let ty = oracle.underlying(ty);
        if !seen.insert(ty) {
            continue;
        }
        let Some(Type::Interface(iface)) = oracle.ty(ty) else {
            continue;
        };
        for method in &iface.methods {
            methods.entry(method.name.clone()).or_insert(method.signature);
        }
        stack.extend(iface.embeds.iter().rev());
    }

    methods
}
