//! Command dispatch logic for the CLI.
//!
//! Responsibilities:
//! - Build the settings store from global options.
//! - Route a parsed command to its implementation.
//!
//! Non-responsibilities:
//! - Does not parse CLI arguments (see `args` module).
//! - Does not print output or choose exit codes (see `main`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Run the parsed command, returning the text to print on stdout.
pub fn run_command(cli: &Cli) -> Result<String> {
    let store = commands::open_store(cli.file.as_deref(), &cli.sections);
    tracing::debug!(
        file = ?cli.file,
        prefix = store.prefix(),
        has_file = store.has_file(),
        "Opened settings store"
    );

    match &cli.command {
        Commands::Get { key, kind, default } => {
            commands::get::run(&store, key, *kind, default.as_deref())
        }
        Commands::Object { key, pretty } => commands::object::run(&store, key, *pretty),
        Commands::EnvKey { key } => Ok(commands::env_key::run(&store, key)),
    }
}
