//! Diagnostics produced by analysis passes.

mod collection;
mod message;
mod printer;


pub use collection::{DiagnosticBuilder, Diagnostics};
pub use message::{DiagnosticKind, DiagnosticMessage, DiagnosticRecord, Severity};
pub use printer::DiagnosticsPrinter;

/// Index of a file within the analyzed program.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct SourceId(pub u32);

impl SourceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
