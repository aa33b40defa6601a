//! Configuration file loading.
//!
//! Responsibilities:
//! - Read a configuration file once and parse it into a string-keyed mapping.
//! - Derive the sub-mapping a section view reads from.
//!
//! Does NOT handle:
//! - Environment variables (see env.rs).
//! - Reporting failures to callers. `load_config_file` logs and degrades to
//!   "no file" instead.
//!
//! Invariants:
//! - Only the top level of a document is normalized to string keys at load time.
//!   Nested mappings are normalized when a section is taken from them.
//! - A document whose root is `null` (e.g. an empty YAML file) is an empty mapping.

use std::path::{Path, PathBuf};

use super::format::FileFormat;
use crate::error::FormatError;
use crate::value::{KeyedValues, RawValue, string_keyed};

/// A parsed configuration file, or the part of one a section sees.
#[derive(Debug, Clone)]
pub(crate) struct ConfigFile {
    pub(crate) entries: KeyedValues,
    pub(crate) format: FileFormat,
}

/// Errors that can occur when reading the config file.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigFileError {
    #[error("Unsupported config file suffix: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ParseError,
    },
}

/// Errors that can occur when parsing a configuration document.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ParseError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("document root is a {0}, expected a mapping")]
    NotAMapping(&'static str),
}

impl ConfigFile {
    /// Parse in-memory content as a configuration document.
    pub(crate) fn parse(content: &[u8], format: FileFormat) -> Result<Self, ParseError> {
        let entries = match format.parse(content)? {
            RawValue::Mapping(entries) => string_keyed(&entries),
            RawValue::Null => KeyedValues::new(),
            other => return Err(ParseError::NotAMapping(other.kind())),
        };
        Ok(Self { entries, format })
    }

    /// The sub-mapping stored under `key`, if that value is a mapping.
    pub(crate) fn section(&self, key: &str) -> Option<ConfigFile> {
        match self.entries.get(key) {
            Some(RawValue::Mapping(entries)) => Some(ConfigFile {
                entries: string_keyed(entries),
                format: self.format,
            }),
            _ => None,
        }
    }
}

/// Reads and parses the config file at `path`.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let format = FileFormat::from_path(path).ok_or_else(|| ConfigFileError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = std::fs::read(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    ConfigFile::parse(&content, format).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the config file at `path`, or `None` when there is nothing usable.
///
/// An empty path means "environment only" and is not logged as a failure.
pub(crate) fn load_config_file(path: &Path) -> Option<ConfigFile> {
    if path.as_os_str().is_empty() {
        tracing::debug!("No config file configured, using environment only");
        return None;
    }

    match read_config_file(path) {
        Ok(file) => {
            tracing::debug!(
                path = %path.display(),
                format = %file.format,
                keys = file.entries.len(),
                "Config file loaded"
            );
            Some(file)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to load config file, using environment only"
            );
            None
        }
    }
}
