//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("lambdacheck")
        .about("Validate handlers passed to AWS Lambda entry points")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(signatures_command())
}

/// Check every lambda.Start call of a program.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Check handler signatures of a program")
        .override_usage("  lambdacheck check <PROGRAM> [--format <FORMAT>] [--warn]")
        .after_help(
            r#"EXAMPLES:
  lambdacheck check program.json                # diagnostics on stderr
  lambdacheck check program.json --format json  # diagnostics as JSON on stdout
  lambdacheck check program.json --warn         # report without failing

LOGGING:
  Set LAMBDACHECK_LOG (e.g. LAMBDACHECK_LOG=debug) to trace the check."#,
        )
        .arg(program_path_arg())
        .arg(color_arg())
        .arg(format_arg())
        .arg(warn_arg())
}

/// List the accepted handler signatures.
pub fn signatures_command() -> Command {
    Command::new("signatures").about("List accepted handler signatures")
}
