//! Accepted handler shapes.
//!
//! A handler takes at most two parameters, the first of which must behave
//! like `context.Context` when there are two. It returns at most two
//! results, the last of which must be exactly `error`.

use std::fmt;

use lambdacheck_core::{CONTEXT_PACKAGE, CONTEXT_TYPE, Type, TypeId};

use crate::oracle::TypeOracle;

/// Handler signatures the Lambda runtime accepts.
///
/// `TIn` and `TOut` are types compatible with `encoding/json`.
pub const ACCEPTED_SIGNATURES: [&str; 9] = [
    "func ()",
    "func () error",
    "func (TIn) error",
    "func () (TOut, error)",
    "func (TIn) (TOut, error)",
    "func (context.Context) error",
    "func (context.Context, TIn) error",
    "func (context.Context) (TOut, error)",
    "func (context.Context, TIn) (TOut, error)",
];

/// Canonical types resolved once per pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Canonicals {
    /// `context.Context`, when declared and an interface.
    pub context: Option<TypeId>,
    /// The universe `error`.
    pub error: Option<TypeId>,
}

impl Canonicals {
    pub fn resolve<O: TypeOracle + ?Sized>(oracle: &O) -> Self {
        let context = oracle
            .lookup_type(Some(CONTEXT_PACKAGE), CONTEXT_TYPE)
            .filter(|&ty| matches!(oracle.ty(oracle.underlying(ty)), Some(Type::Interface(_))));
        Self {
            context,
            error: oracle.error_type(),
        }
    }
}

/// The first shape rule a handler breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeViolation {
    NotAFunction,
    /// Two parameters, the first not implementing `context.Context`.
    ContextExpected,
    TooManyParams(usize),
    /// The result at `position` is not `error`.
    ErrorExpected { position: usize },
    TooManyResults(usize),
}

impl fmt::Display for ShapeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAFunction => write!(f, "handler is not a function"),
            Self::ContextExpected => {
                write!(f, "first of two parameters does not implement context.Context")
            }
            Self::TooManyParams(n) => write!(f, "handler takes {n} parameters, at most 2 allowed"),
            Self::ErrorExpected { position } => write!(f, "result {position} is not error"),
            Self::TooManyResults(n) => write!(f, "handler returns {n} results, at most 2 allowed"),
        }
    }
}

/// Checks the type of a handler argument against the accepted shapes.
pub fn check_shape<O: TypeOracle + ?Sized>(
    oracle: &O,
    canon: &Canonicals,
    handler: Option<TypeId>,
) -> Result<(), ShapeViolation> {
    let signature = handler
        .and_then(|ty| oracle.signature(ty))
        .ok_or(ShapeViolation::NotAFunction)?;

    match signature.params.as_slice() {
        [] | [_] => {}
        [first, _] => {
            // Without a declared context interface nothing can implement it.
            let implements = canon
                .context
                .is_some_and(|ctx| oracle.implements(*first, ctx));
            if !implements {
                return Err(ShapeViolation::ContextExpected);
            }
        }
        params => return Err(ShapeViolation::TooManyParams(params.len())),
    }

    let is_error = |ty: TypeId| canon.error.is_some_and(|err| oracle.identical(ty, err));
    match signature.results.as_slice() {
        [] => Ok(()),
        [only] if is_error(*only) => Ok(()),
        [_] => Err(ShapeViolation::ErrorExpected { position: 0 }),
        [_, last] if is_error(*last) => Ok(()),
        [_, _] => Err(ShapeViolation::ErrorExpected { position: 1 }),
        results => Err(ShapeViolation::TooManyResults(results.len())),
    }
}
