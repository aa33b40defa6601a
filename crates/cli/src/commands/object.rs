//! `object` command: decode a key into a generic JSON document.

use anyhow::{Context, Result};
use layered_config::SettingsStore;
use serde_json::Value;

/// Decode `key` and render it as JSON; `null` when no tier has the key.
///
/// # Errors
/// Returns an error if the value cannot be decoded.
pub fn run(store: &SettingsStore, key: &str, pretty: bool) -> Result<String> {
    let mut value = Value::Null;
    store
        .get_object(key, &mut value)
        .with_context(|| format!("Failed to decode `{key}`"))?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(rendered)
}
