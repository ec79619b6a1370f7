//! lambdacheck: validates handlers passed to AWS Lambda entry points.
//!
//! # Example
//!
//! ```
//! use lambdacheck_lib::{CheckConfig, check};
//! use lambdacheck_lib::model::Program;
//!
//! let program = Program::from_json("{}").expect("valid program");
//! let diagnostics = check(&program, &CheckConfig::default());
//! assert!(diagnostics.is_empty());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

/// Documentation link included in every diagnostic.
macro_rules! doc_url {
    () => {
        "https://pkg.go.dev/github.com/aws/aws-lambda-go/lambda#Start"
    };
}

pub mod analyze;
mod config;
pub mod diagnostics;
pub mod oracle;

#[cfg(test)]
mod test_utils;

pub use lambdacheck_core as model;
pub use lambdacheck_core::{Error, Result};

pub use analyze::{ACCEPTED_SIGNATURES, EntryPoint, check_handlers};
pub use config::CheckConfig;
pub use diagnostics::{
    DiagnosticKind, DiagnosticMessage, Diagnostics, DiagnosticsPrinter, Severity, SourceId,
};
pub use oracle::TypeOracle;

/// Documentation for the accepted handler signatures.
pub const DOC_URL: &str = doc_url!();

/// Runs the handler check over every file of a validated program.
pub fn check(program: &lambdacheck_core::Program, config: &CheckConfig) -> Diagnostics {
    check_handlers(program, &program.files, config)
}
