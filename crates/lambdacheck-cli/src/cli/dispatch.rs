//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::{CheckArgs, OutputFormat};

pub struct CheckParams {
    pub program_path: PathBuf,
    pub color: ColorChoice,
    pub format: OutputFormat,
    pub warn: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: m
                .get_one::<PathBuf>("program_path")
                .cloned()
                .unwrap_or_default(),
            color: parse_color(m),
            format: parse_format(m),
            warn: m.get_flag("warn"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            program_path: p.program_path,
            color: p.color.should_colorize(),
            format: p.format,
            warn: p.warn,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}
