//! Configuration file formats.
//!
//! Responsibilities:
//! - Detect the format of a configuration file from its name.
//! - Parse, re-serialize and decode content in that format.
//!
//! Invariants:
//! - Detection is by suffix only: `.json`, `.yaml` or `.yml`. Anything else has no format.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::FormatError;
use crate::value::RawValue;

/// Format a configuration file was loaded in.
///
/// Section views inherit the format of the root file so that objects are
/// re-serialized the same way the file was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Detect the format from a path's suffix.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".json") {
            Some(FileFormat::Json)
        } else if name.ends_with(".yaml") || name.ends_with(".yml") {
            Some(FileFormat::Yaml)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
        }
    }

    /// Parse a whole document into a raw value tree.
    pub(crate) fn parse(self, content: &[u8]) -> Result<RawValue, FormatError> {
        Ok(match self {
            FileFormat::Json => serde_json::from_slice::<serde_json::Value>(content)?.into(),
            FileFormat::Yaml => serde_yaml::from_slice::<serde_yaml::Value>(content)?.into(),
        })
    }

    pub(crate) fn serialize(self, value: &RawValue) -> Result<String, FormatError> {
        Ok(match self {
            FileFormat::Json => serde_json::to_string(value)?,
            FileFormat::Yaml => serde_yaml::to_string(value)?,
        })
    }

    pub(crate) fn decode<T: DeserializeOwned>(self, content: &str) -> Result<T, FormatError> {
        Ok(match self {
            FileFormat::Json => serde_json::from_str(content)?,
            FileFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
