mod cli;
mod commands;

use std::io::IsTerminal;

use cli::{CheckParams, build_cli};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `lambdacheck_lib=debug`.
const LOG_ENV: &str = "LAMBDACHECK_LOG";

fn main() {
    setup_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("signatures", _)) => commands::signatures::run(),
        _ => unreachable!("clap should have caught this"),
    }
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .init();
}
