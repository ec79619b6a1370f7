use std::path::PathBuf;

use lambdacheck_core::Program;
use lambdacheck_lib::{CheckConfig, DiagnosticsPrinter, Severity};
use serde::Serialize;
use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct CheckArgs {
    pub program_path: PathBuf,
    pub color: bool,
    pub format: OutputFormat,
    pub warn: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{path}: {source}")]
    Load {
        path: String,
        source: lambdacheck_core::Error,
    },

    #[error("cannot encode diagnostics: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Rendered result of a check run.
#[derive(Debug)]
pub struct Outcome {
    /// Empty when there is nothing to print.
    pub output: String,
    pub failed: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    errors: usize,
    warnings: usize,
    diagnostics: Vec<lambdacheck_lib::diagnostics::DiagnosticRecord<'a>>,
}

pub fn run(args: CheckArgs) {
    let outcome = match check(&args) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if !outcome.output.is_empty() {
        match args.format {
            OutputFormat::Text => eprintln!("{}", outcome.output),
            OutputFormat::Json => println!("{}", outcome.output),
        }
    }

    if outcome.failed {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}

pub fn check(args: &CheckArgs) -> Result<Outcome, CheckError> {
    let program = Program::from_path(&args.program_path).map_err(|source| CheckError::Load {
        path: args.program_path.display().to_string(),
        source,
    })?;

    let severity = if args.warn {
        Severity::Warning
    } else {
        Severity::Error
    };
    let diagnostics = lambdacheck_lib::check(&program, &CheckConfig::new().with_severity(severity));
    info!(
        files = program.files.len(),
        findings = diagnostics.len(),
        "checked program"
    );

    let printer = DiagnosticsPrinter::new(&diagnostics)
        .files(&program.files)
        .colored(args.color);
    let output = match args.format {
        OutputFormat::Text => printer.render(),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonReport {
            errors: diagnostics.error_count(),
            warnings: diagnostics.warning_count(),
            diagnostics: printer.records(),
        })?,
    };

    Ok(Outcome {
        output,
        failed: diagnostics.has_errors(),
    })
}
