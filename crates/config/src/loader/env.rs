//! Environment variable lookups.
//!
//! Responsibilities:
//! - Compose environment variable names from a section prefix and a key.
//! - Read a variable, distinguishing "unset" from "set to an empty string".
//!
//! Does NOT handle:
//! - Caching resolved values (see `store`).
//!
//! Invariants:
//! - Names are `prefix_key`, or the bare key when the prefix is empty. No case
//!   transformation is applied.
//! - An empty value counts as set. A value that is not valid UTF-8 counts as unset.

use std::env::VarError;

use crate::constants::ENV_KEY_SEPARATOR;

/// Join a section prefix and a key into an environment variable name.
pub fn compose_env_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{ENV_KEY_SEPARATOR}{key}")
    }
}

/// Read an environment variable, returning None if it is unset or not UTF-8.
pub(crate) fn lookup_env(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            tracing::debug!(var = name, "Ignoring environment variable with non UTF-8 value");
            None
        }
    }
}
