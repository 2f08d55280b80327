//! Dirnode CLI Binary
//!
//! Command-line interface for building and inspecting content-addressed directory trees.

use clap::Parser;
use dirnode::cli::{map_error, Cli, RunContext};
use dirnode::logging::{init_logging, LogOverrides};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Load config first: logging settings live in it
    let context = match RunContext::new(cli.command.path().to_path_buf(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    let overrides = log_overrides(&cli);
    if let Err(e) = init_logging(Some(&context.config().logging), &overrides) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(root = %context.root().display(), "Dirnode CLI starting");

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Collect the logging flags given on the command line.
/// `--log-level` wins over `--verbose`.
fn log_overrides(cli: &Cli) -> LogOverrides {
    let level = cli
        .log_level
        .clone()
        .or_else(|| cli.verbose.then(|| "debug".to_string()));

    LogOverrides {
        level,
        format: cli.log_format.clone(),
        output: cli.log_output.clone(),
        file: cli.log_file.clone(),
    }
}
