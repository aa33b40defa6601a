//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "layered-config")]
#[command(about = "Inspect values resolved from a config file and the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  layered-config --file config.yaml get port --kind int --default 8080\n  layered-config --file config.json --section database object replica\n  layered-config --section database env-key host\n"
)]
pub struct Cli {
    /// Configuration file (.json, .yaml or .yml). Omit for environment-only lookups.
    #[arg(short, long, global = true, env = "LAYERED_CONFIG_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Section to descend into before the lookup. Repeat for nested sections.
    #[arg(short, long = "section", global = true, value_name = "NAME")]
    pub sections: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a key as a typed value, printing the default when it is unresolved
    Get {
        /// Key to resolve
        key: String,

        /// Type to coerce the value to
        #[arg(short, long, value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,

        /// Value printed when the key is unresolved or cannot be coerced
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Decode a key into a JSON document (prints null when unset)
    Object {
        /// Key to decode
        key: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the environment variable name a key is looked up under
    EnvKey {
        /// Key to compose
        key: String,
    },
}

/// Primitive types the `get` command can coerce to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    String,
    Int,
    Int64,
    Bool,
}
