//! CLI command implementations.
//!
//! Each command returns the text to print so it can be tested without a process.

pub mod env_key;
pub mod get;
pub mod object;

use layered_config::SettingsStore;
use std::path::Path;

/// Open the store named on the command line and descend into its sections.
pub fn open_store(file: Option<&Path>, sections: &[String]) -> SettingsStore {
    let root = match file {
        Some(path) => SettingsStore::open(path),
        None => SettingsStore::env_only(),
    };

    sections
        .iter()
        .fold(root, |store, section| store.section(section))
}
