//! Validation of handlers passed to Lambda entry points.
//!
//! Every call in every file is classified in pre-order. Calls to an entry
//! point have their handler argument checked against the accepted shapes;
//! each failing call yields one diagnostic at its opening parenthesis.

use lambdacheck_core::ast::{CallExpr, Expr, File};
use lambdacheck_core::visitor::{Visitor, walk_call};
use rowan::TextRange;
use tracing::{debug, debug_span, trace};

use super::entry_point::classify;
use super::shape::{Canonicals, check_shape};
use crate::CheckConfig;
use crate::diagnostics::{DiagnosticKind, Diagnostics, SourceId};
use crate::oracle::TypeOracle;

/// Checks every entry point call in `files`.
///
/// `files` are indexed by [`SourceId`] in the returned diagnostics.
pub fn check_handlers<O: TypeOracle + ?Sized>(
    oracle: &O,
    files: &[File],
    config: &CheckConfig,
) -> Diagnostics {
    let _span = debug_span!("check_handlers", files = files.len()).entered();

    let canon = Canonicals::resolve(oracle);
    if canon.context.is_none() {
        debug!("context.Context is not declared, two-parameter handlers will be rejected");
    }

    let mut diag = Diagnostics::new();
    for (i, file) in files.iter().enumerate() {
        let mut validator = HandlerValidator {
            oracle,
            canon: &canon,
            config,
            source_id: SourceId(i as u32),
            path: &file.path,
            diag: &mut diag,
        };
        validator.visit_file(file);
    }
    diag
}

struct HandlerValidator<'a, O: ?Sized> {
    oracle: &'a O,
    canon: &'a Canonicals,
    config: &'a CheckConfig,
    source_id: SourceId,
    path: &'a str,
    diag: &'a mut Diagnostics,
}

impl<O: TypeOracle + ?Sized> Visitor for HandlerValidator<'_, O> {
    fn visit_call(&mut self, _expr: &Expr, call: &CallExpr) {
        self.check_call(call);
        walk_call(self, call);
    }
}

impl<O: TypeOracle + ?Sized> HandlerValidator<'_, O> {
    fn check_call(&mut self, call: &CallExpr) {
        let Some(entry) = classify(self.oracle, call) else {
            return;
        };
        trace!(path = self.path, offset = call.lparen, entry = entry.name, "entry point call");

        let Some(handler) = call.args.get(entry.handler_index) else {
            debug!(
                path = self.path,
                offset = call.lparen,
                args = call.args.len(),
                "entry point call without handler argument, skipped"
            );
            return;
        };

        let Err(violation) = check_shape(self.oracle, self.canon, self.oracle.type_of(handler))
        else {
            return;
        };
        debug!(path = self.path, offset = call.lparen, %violation, "invalid handler");

        // Saturates for an ingested `(` at the very end of the offset space.
        let range = TextRange::new(call.lparen.into(), call.lparen.saturating_add(1).into());
        let report = self.diag.report(
            self.source_id,
            DiagnosticKind::InvalidHandlerSignature,
            range,
        );
        let report = match handler.as_ident() {
            Some(name) => report.message(name),
            None => report,
        };
        report.severity(self.config.severity).emit();
    }
}
