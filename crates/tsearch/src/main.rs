//! Command-line interface for `tsearch`, a transcript and subtitle search tool.

mod cli;

use std::{io, process::ExitCode};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{
    args::{Commands, parse_cli},
    commands,
    context::CommandContext,
};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "TSEARCH_LOG";

/// Installs the stderr log subscriber, filtered by `TSEARCH_LOG` (default `warn`).
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging();

    // `init` must work even when an existing config file is broken.
    let ctx = if matches!(cli.command, Commands::Init(_)) {
        CommandContext::load_cwd_only()
    } else {
        CommandContext::load()
    };

    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
