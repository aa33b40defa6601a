//! Decoding keys into caller-defined types.
//!
//! Responsibilities:
//! - Decode a file-backed value by re-serializing it in the file's own format.
//! - Decode an environment value as JSON, falling back to YAML.
//!
//! Does NOT handle:
//! - The override cache. Object lookups neither read nor populate it.
//!
//! Invariants:
//! - A key present in the file is never looked up in the environment, even when
//!   decoding it fails.
//! - An unset environment variable is not an error; the target is left untouched.
//! - On error the target is left untouched.

use serde::de::DeserializeOwned;

use super::SettingsStore;
use crate::error::SettingsError;
use crate::loader::{FileFormat, lookup_env};
use crate::value::RawValue;

impl SettingsStore {
    /// Decode `key` into `target`.
    ///
    /// When no tier has the key, returns `Ok(())` and leaves `target` as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file value cannot be re-serialized or does not match `T`
    ///   (`SettingsError::Encode` / `SettingsError::Decode`).
    /// - The environment value is neither JSON nor YAML matching `T`
    ///   (`SettingsError::EnvDecode`).
    pub fn get_object<T: DeserializeOwned>(
        &self,
        key: &str,
        target: &mut T,
    ) -> Result<(), SettingsError> {
        if let Some(value) = self.try_get_object(key)? {
            *target = value;
        }
        Ok(())
    }

    /// Decode `key` into a new `T`, or `None` when no tier has the key.
    ///
    /// # Errors
    ///
    /// Same as [`SettingsStore::get_object`].
    pub fn try_get_object<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, SettingsError> {
        if let Some(file) = &self.file {
            if let Some(value) = file.entries.get(key) {
                return decode_file_value(key, value, file.format).map(Some);
            }
        }

        let var = self.env_key(key);
        match lookup_env(&var) {
            Some(content) => decode_env_value(key, var, &content).map(Some),
            None => {
                tracing::trace!(key, var = %var, "Object not configured, leaving target untouched");
                Ok(None)
            }
        }
    }
}

fn decode_file_value<T: DeserializeOwned>(
    key: &str,
    value: &RawValue,
    format: FileFormat,
) -> Result<T, SettingsError> {
    let body = format
        .serialize(value)
        .map_err(|source| SettingsError::Encode {
            key: key.to_string(),
            format,
            source,
        })?;

    format.decode(&body).map_err(|source| SettingsError::Decode {
        key: key.to_string(),
        format,
        source,
    })
}

fn decode_env_value<T: DeserializeOwned>(
    key: &str,
    var: String,
    content: &str,
) -> Result<T, SettingsError> {
    let json = match serde_json::from_str(content) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    serde_yaml::from_str(content).map_err(|yaml| SettingsError::EnvDecode {
        key: key.to_string(),
        var,
        json,
        yaml,
    })
}
