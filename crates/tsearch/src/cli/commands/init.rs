//! Implementation of `tsearch init`.

use std::process::ExitCode;

use tsearch_config::{
    ConfigError, global_config_path, global_template, init_path, local_template,
    write_config_file,
};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Initializes a `.tsearch.toml` configuration file.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let cwd = &ctx.cwd;

    let is_home_dir = global_config_path()
        .and_then(|p| p.parent().map(|h| h == cwd))
        .unwrap_or(false);

    let use_global = cmd.global || is_home_dir;

    let config_path = match init_path(cwd, use_global) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let template = if use_global {
        global_template()
    } else {
        local_template()
    };

    match write_config_file(&config_path, &template, cmd.force) {
        Ok(()) => {}
        Err(e @ ConfigError::AlreadyExists { .. }) => {
            eprintln!("error: {e}");
            eprintln!("use --force to overwrite");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    println!("Created {}", config_path.display());
    println!();
    println!("Configuration written:");
    for line in template.lines() {
        println!("   {line}");
    }

    ExitCode::SUCCESS
}
