//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use lambdacheck_core::File;
use rowan::TextRange;

use super::collection::Diagnostics;
use super::message::{DiagnosticMessage, DiagnosticRecord, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    files: &'s [File],
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            files: &[],
            colored: false,
        }
    }

    /// Files the diagnostics' source ids index into.
    pub fn files(mut self, files: &'s [File]) -> Self {
        self.files = files;
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let file = self.files.get(diag.source.index());
            match file.and_then(|f| f.source.as_deref().map(|src| (f, src))) {
                Some((file, source)) => {
                    let range = adjust_range(diag.range, source.len());
                    let snippet = Snippet::source(source)
                        .line_start(1)
                        .path(file.path.as_str())
                        .annotation(AnnotationKind::Primary.span(range));

                    let level = severity_to_level(diag.severity);
                    let report: Vec<Group> = vec![level.primary_title(&diag.message).element(snippet)];
                    write!(w, "{}", renderer.render(&report))?;
                }
                None => self.format_plain(w, diag, file)?,
            }
        }

        Ok(())
    }

    fn format_plain(
        &self,
        w: &mut impl Write,
        diag: &DiagnosticMessage,
        file: Option<&File>,
    ) -> std::fmt::Result {
        match file {
            Some(file) => write!(w, "{}: {}", file.path, diag),
            None => write!(w, "{}", diag),
        }
    }

    /// Flat records for serialization, one per diagnostic.
    pub fn records(&self) -> Vec<DiagnosticRecord<'_>> {
        self.diagnostics
            .iter()
            .map(|diag| {
                let path = self
                    .files
                    .get(diag.source.index())
                    .map_or("", |f| f.path.as_str());
                diag.to_record(path)
            })
            .collect()
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();
    let start = start.min(limit);
    let end = end.min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    /// Plain rendering without source snippets.
    pub fn render(&self) -> String {
        self.printer().render()
    }
}
