//! `get` command: resolve a key as a typed value.

use anyhow::{Context, Result};
use layered_config::SettingsStore;
use std::str::FromStr;

use crate::args::ValueKind;

/// Resolve `key` as `kind`, returning the printed form of the value.
///
/// # Errors
/// Returns an error if `default` is not a valid value of `kind`.
pub fn run(store: &SettingsStore, key: &str, kind: ValueKind, default: Option<&str>) -> Result<String> {
    let output = match kind {
        ValueKind::String => store.get_string(key, default.unwrap_or_default()),
        ValueKind::Int => store.get_int(key, parse_default(default, "int")?).to_string(),
        ValueKind::Int64 => store.get_int64(key, parse_default(default, "int64")?).to_string(),
        ValueKind::Bool => store.get_bool(key, parse_default(default, "bool")?).to_string(),
    };
    Ok(output)
}

fn parse_default<T>(default: Option<&str>, kind: &str) -> Result<T>
where
    T: FromStr + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match default {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("--default {raw:?} is not a valid {kind}")),
        None => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_config::FileFormat;

    fn store() -> SettingsStore {
        SettingsStore::from_content(
            r#"{"port": 8080, "name": "api", "debug": true, "big": 5000000000}"#,
            FileFormat::Json,
        )
    }

    #[test]
    fn test_get_each_kind() {
        let store = store();
        assert_eq!(run(&store, "name", ValueKind::String, None).unwrap(), "api");
        assert_eq!(run(&store, "port", ValueKind::Int, None).unwrap(), "8080");
        assert_eq!(run(&store, "big", ValueKind::Int64, None).unwrap(), "5000000000");
        assert_eq!(run(&store, "debug", ValueKind::Bool, None).unwrap(), "true");
    }

    #[test]
    fn test_get_uses_typed_default() {
        let store = store();
        assert_eq!(run(&store, "big", ValueKind::Int, Some("7")).unwrap(), "7");
        assert_eq!(run(&store, "port", ValueKind::Bool, None).unwrap(), "false");
        assert_eq!(run(&store, "port", ValueKind::String, Some("none")).unwrap(), "none");
    }

    #[test]
    fn test_invalid_default_is_an_error() {
        let err = run(&store(), "port", ValueKind::Int, Some("eighty")).unwrap_err();
        assert!(err.to_string().contains("not a valid int"));
    }
}
