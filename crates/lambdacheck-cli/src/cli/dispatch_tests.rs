//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, signatures_command};
use crate::commands::check::{CheckArgs, OutputFormat};

#[test]
fn check_defaults() {
    let m = check_command()
        .try_get_matches_from(["check", "program.json"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.program_path, PathBuf::from("program.json"));
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.format, OutputFormat::Text);
    assert!(!params.warn);
}

#[test]
fn check_extracts_flags() {
    let m = check_command()
        .try_get_matches_from([
            "check",
            "program.json",
            "--color",
            "never",
            "--format",
            "json",
            "--warn",
        ])
        .unwrap();
    let args: CheckArgs = CheckParams::from_matches(&m).into();

    assert!(!args.color);
    assert_eq!(args.format, OutputFormat::Json);
    assert!(args.warn);
}

#[test]
fn check_color_always_colorizes() {
    let m = check_command()
        .try_get_matches_from(["check", "program.json", "--color", "always"])
        .unwrap();
    let args: CheckArgs = CheckParams::from_matches(&m).into();
    assert!(args.color);
}

#[test]
fn check_requires_program() {
    let result = check_command().try_get_matches_from(["check"]);
    assert!(result.is_err());
}

#[test]
fn check_rejects_unknown_format() {
    let result = check_command().try_get_matches_from(["check", "p.json", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn signatures_takes_no_arguments() {
    assert!(signatures_command().try_get_matches_from(["signatures"]).is_ok());
    assert!(
        signatures_command()
            .try_get_matches_from(["signatures", "extra"])
            .is_err()
    );
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["lambdacheck"]);
    assert!(result.is_err());

    let m = build_cli()
        .try_get_matches_from(["lambdacheck", "check", "p.json"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("check"));
}
