//! Command-line entry point for `academic-helper`.
//!
//! # Responsibility
//! - Parse arguments, start optional file logging and run one flow.
//! - Each invocation reloads the durable state, so every flow starts from
//!   the latest saved data.

mod args;
mod commands;
mod render;

use academic_core::{default_log_level, init_logging};
use args::Cli;
use clap::Parser;
use log::error;

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .map_or_else(default_log_level, args::LogLevelArg::as_str);
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("✗ Failed to initialize logging: {err}");
        }
    }

    if let Err(err) = commands::run(cli.command, &cli.data_file) {
        error!("event=command module=cli status=error error={}", err);
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}
