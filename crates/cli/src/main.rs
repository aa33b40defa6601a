//! layered-config - inspect layered configuration from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve values through `layered_config::SettingsStore`.
//! - Print results on stdout and map failures to exit codes.
//!
//! Invariants:
//! - Logs go to stderr (filtered by `RUST_LOG`) so stdout only carries results.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run_command(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}
