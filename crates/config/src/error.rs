//! Error types for object decoding.
//!
//! Responsibilities:
//! - Define the errors `SettingsStore::get_object` can surface.
//! - Wrap the JSON and YAML codec errors behind one `FormatError`.
//!
//! Does NOT handle:
//! - Load-time failures (missing, unreadable or malformed files). Those are
//!   absorbed by the store and only logged.
//! - Primitive coercion failures, which resolve to the caller's fallback.
//!
//! Invariants:
//! - Every variant names the key that failed so callers can report it.

use thiserror::Error;

use crate::loader::FileFormat;

/// A JSON or YAML codec failure.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors surfaced when decoding a key into a caller-provided type.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file-backed value could not be re-serialized in the file's format.
    #[error("Unable to encode `{key}` as {format}: {source}")]
    Encode {
        key: String,
        format: FileFormat,
        #[source]
        source: FormatError,
    },

    /// The file-backed value did not match the target type.
    #[error("Unable to decode `{key}` from {format}: {source}")]
    Decode {
        key: String,
        format: FileFormat,
        #[source]
        source: FormatError,
    },

    /// The environment variable held neither valid JSON nor valid YAML for the target.
    #[error("Unable to decode `{key}` from ${var}, as json: {json}, or yaml: {yaml}")]
    EnvDecode {
        key: String,
        var: String,
        json: serde_json::Error,
        yaml: serde_yaml::Error,
    },
}

impl SettingsError {
    /// The key whose value failed to decode.
    pub fn key(&self) -> &str {
        match self {
            SettingsError::Encode { key, .. }
            | SettingsError::Decode { key, .. }
            | SettingsError::EnvDecode { key, .. } => key,
        }
    }
}
