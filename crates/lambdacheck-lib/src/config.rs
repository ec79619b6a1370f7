use crate::diagnostics::Severity;

/// Options for a check run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Severity assigned to invalid handler findings.
    pub severity: Severity,
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}
