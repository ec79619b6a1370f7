//! Analysis passes over a resolved program.
//!
//! - Entry point classification (entry_point)
//! - Handler shape rules (shape)
//! - The validation pass itself (handler)

pub mod entry_point;
mod handler;
pub mod shape;


pub use entry_point::{ENTRY_POINTS, EntryPoint, LAMBDA_PACKAGE, classify, remove_vendor};
pub use handler::check_handlers;
pub use shape::{ACCEPTED_SIGNATURES, Canonicals, ShapeViolation, check_shape};
