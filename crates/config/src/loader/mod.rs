//! Configuration sources: files and environment variables.
//!
//! Responsibilities:
//! - Detect file formats and parse configuration files into string-keyed mappings.
//! - Compose and read environment variable names for a section prefix.
//!
//! Does NOT handle:
//! - Precedence between sources or caching (see `store`).
//!
//! Invariants / Assumptions:
//! - Loading never fails from the caller's point of view; unusable files are
//!   logged and treated as absent.

mod env;
mod file;
mod format;

pub use env::compose_env_key;
pub use format::FileFormat;

pub(crate) use env::lookup_env;
pub(crate) use file::{ConfigFile, load_config_file};
