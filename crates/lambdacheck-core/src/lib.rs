#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Program model for lambdacheck.
//!
//! An external front end parses and type-checks Go sources, then hands the
//! result over as a [`Program`]:
//! - **Syntax layer** (`ast`): files, declarations, statements and expressions
//!   with byte spans, each expression annotated with its resolved type
//! - **Type layer** (`types`): an id-indexed table of resolved types
//! - **Object layer** (`program`): declared entities that identifiers resolve to
//!
//! Programs are usually exchanged as JSON (see [`Program::from_json`]) and
//! must pass [`Program::validate`] before analysis.

pub mod ast;
mod builder;
mod program;
pub mod types;
pub mod visitor;


pub use ast::{Expr, ExprKind, File, Span};
pub use builder::ProgramBuilder;
pub use program::{Object, ObjectId, ObjectKind, Program};
pub use types::{BasicKind, Signature, Type, TypeId};

/// Package path of the canonical cancellation context.
pub const CONTEXT_PACKAGE: &str = "context";

/// Name of the canonical cancellation context interface.
pub const CONTEXT_TYPE: &str = "Context";

/// Name of the universe error type.
pub const ERROR_TYPE: &str = "error";

/// Errors raised while ingesting a program description.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed program description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read program description: {0}")]
    Io(#[from] std::io::Error),

    /// A type id that does not index into the type table.
    #[error("{context} refers to unknown type #{id}")]
    DanglingType { id: u32, context: String },

    /// An object id that does not index into the object table.
    #[error("{context} refers to unknown object #{id}")]
    DanglingObject { id: u32, context: String },
}

pub type Result<T> = std::result::Result<T, Error>;
