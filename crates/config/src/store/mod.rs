//! Layered settings store.
//!
//! Responsibilities:
//! - Resolve keys through the override cache, the file mapping and the environment.
//! - Coerce resolved values into primitive types with caller-supplied fallbacks.
//! - Derive section views scoped to a nested mapping and an environment prefix.
//!
//! Does NOT handle:
//! - Decoding into caller-defined types (see object.rs).
//! - Writing values back to files or the environment.
//!
//! Invariants:
//! - A key is cached the first time it resolves from the file or the environment,
//!   and every later lookup of that key on the same store returns the cached value.
//! - Fallbacks are never cached.
//! - Section views copy their sub-mapping and own an independent cache.
//!
//! Thread safety: the cache uses a `RefCell`, so a store is `Send` but not `Sync`.
//! Use one store per thread, or guard an owned store with a lock.

mod object;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use crate::loader::{ConfigFile, FileFormat, compose_env_key, load_config_file, lookup_env};
use crate::value::{FromRawValue, RawValue};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy)]
enum Source {
    File,
    Env,
}

/// Layered configuration accessor over a file, the environment and a cache.
#[derive(Debug, Default)]
pub struct SettingsStore {
    prefix: String,
    file: Option<ConfigFile>,
    cache: RefCell<HashMap<String, RawValue>>,
}

impl SettingsStore {
    /// Open a store backed by the file at `path`.
    ///
    /// An empty path, an unreadable or malformed file, or an unsupported suffix
    /// all produce an environment-only store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            file: load_config_file(path.as_ref()),
            ..Self::default()
        }
    }

    /// A store that only reads environment variables.
    pub fn env_only() -> Self {
        Self::default()
    }

    /// Build a store from in-memory content in the given format.
    ///
    /// Content that does not parse into a mapping produces an environment-only store.
    pub fn from_content(content: impl AsRef<[u8]>, format: FileFormat) -> Self {
        let file = match ConfigFile::parse(content.as_ref(), format) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(
                    format = %format,
                    error = %e,
                    "Failed to parse config content, using environment only"
                );
                None
            }
        };
        Self {
            file,
            ..Self::default()
        }
    }

    /// The environment prefix of this store; empty for a root store.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Format of the backing file mapping, if there is one.
    pub fn format(&self) -> Option<FileFormat> {
        self.file.as_ref().map(|file| file.format)
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Environment variable name `key` is looked up under in this store.
    pub fn env_key(&self, key: &str) -> String {
        compose_env_key(&self.prefix, key)
    }

    /// Derive a view scoped to the section `key`.
    ///
    /// The view reads the mapping stored under `key` in this store's file (if it
    /// is a mapping) and prefixes environment lookups with `key`. It never fails:
    /// a missing or non-mapping section yields an environment-only view.
    pub fn section(&self, key: &str) -> SettingsStore {
        let prefix = self.env_key(key);
        let file = self.file.as_ref().and_then(|file| file.section(key));

        if self.file.is_some() && file.is_none() {
            tracing::debug!(
                section = %prefix,
                "Section is not a mapping in the config file, using environment only"
            );
        }

        SettingsStore {
            prefix,
            file,
            cache: RefCell::default(),
        }
    }

    /// Resolve `key` and coerce it to `T`, or return `fallback`.
    pub fn get_as<T: FromRawValue>(&self, key: &str, fallback: T) -> T {
        self.lookup_as(key).unwrap_or(fallback)
    }

    pub fn get_string(&self, key: &str, fallback: &str) -> String {
        self.lookup_as(key).unwrap_or_else(|| fallback.to_string())
    }

    pub fn get_int(&self, key: &str, fallback: i32) -> i32 {
        self.get_as(key, fallback)
    }

    pub fn get_int64(&self, key: &str, fallback: i64) -> i64 {
        self.get_as(key, fallback)
    }

    pub fn get_bool(&self, key: &str, fallback: bool) -> bool {
        self.get_as(key, fallback)
    }

    fn lookup_as<T: FromRawValue>(&self, key: &str) -> Option<T> {
        match self.resolve_with(key, T::from_raw)? {
            Some(value) => Some(value),
            None => {
                tracing::trace!(
                    key,
                    section = %self.prefix,
                    target_type = std::any::type_name::<T>(),
                    "Value cannot be coerced, using fallback"
                );
                None
            }
        }
    }

    /// Resolve `key` through the cache, file and environment, then apply `f`.
    ///
    /// Returns `None` when no tier has the key.
    fn resolve_with<R>(&self, key: &str, f: impl FnOnce(&RawValue) -> R) -> Option<R> {
        if let Some(value) = self.cache.borrow().get(key) {
            return Some(f(value));
        }

        let Some((value, source)) = self.lookup_uncached(key) else {
            tracing::trace!(key, section = %self.prefix, "Key not found, using fallback");
            return None;
        };
        tracing::trace!(
            key,
            section = %self.prefix,
            source = ?source,
            kind = value.kind(),
            "Resolved key"
        );

        let mut cache = self.cache.borrow_mut();
        let value = cache.entry(key.to_string()).or_insert(value);
        Some(f(value))
    }

    fn lookup_uncached(&self, key: &str) -> Option<(RawValue, Source)> {
        if let Some(value) = self.file.as_ref().and_then(|file| file.entries.get(key)) {
            return Some((value.clone(), Source::File));
        }
        lookup_env(&self.env_key(key)).map(|value| (RawValue::String(value), Source::Env))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const JSON: &str = r#"{"a": 1, "name": "root", "ratio": 2.9, "flag": true, "sub": {"b": "x", "deeper": {"c": 3}}}"#;

    #[test]
    #[serial]
    fn test_env_only_store_returns_fallbacks() {
        let store = SettingsStore::env_only();
        temp_env::with_var_unset("_LAYERED_UNIT_MISSING", || {
            assert_eq!(store.get_string("_LAYERED_UNIT_MISSING", "fb"), "fb");
            assert_eq!(store.get_int("_LAYERED_UNIT_MISSING", 42), 42);
            assert_eq!(store.get_int64("_LAYERED_UNIT_MISSING", 43), 43);
            assert!(store.get_bool("_LAYERED_UNIT_MISSING", true));
        });
        assert!(store.cache.borrow().is_empty(), "fallbacks are never cached");
    }

    #[test]
    fn test_file_values_are_coerced() {
        let store = SettingsStore::from_content(JSON, FileFormat::Json);
        assert_eq!(store.format(), Some(FileFormat::Json));
        assert_eq!(store.get_int("a", 0), 1);
        assert_eq!(store.get_int64("a", 0), 1);
        assert_eq!(store.get_int("ratio", 0), 2);
        assert_eq!(store.get_string("name", ""), "root");
        assert!(store.get_bool("flag", false));
    }

    #[test]
    fn test_type_mismatch_returns_fallback_and_keeps_cached_value() {
        let store = SettingsStore::from_content(JSON, FileFormat::Json);
        assert_eq!(store.get_string("a", "fb"), "fb");
        assert!(!store.get_bool("a", false));
        // The failed coercions did not change the cached raw value.
        assert_eq!(store.cache.borrow().get("a"), Some(&RawValue::Integer(1)));
        assert_eq!(store.get_int("a", 0), 1);
    }

    #[test]
    fn test_file_values_are_cached_on_first_read() {
        let store = SettingsStore::from_content(JSON, FileFormat::Json);
        assert!(store.cache.borrow().is_empty());
        store.get_int("a", 0);
        assert_eq!(store.cache.borrow().len(), 1);
    }

    #[test]
    #[serial]
    fn test_section_composes_prefix_and_scopes_file() {
        let store = SettingsStore::from_content(JSON, FileFormat::Json);
        let sub = store.section("sub");
        assert_eq!(sub.prefix(), "sub");
        assert_eq!(sub.get_string("b", ""), "x");

        let deeper = sub.section("deeper");
        assert_eq!(deeper.prefix(), "sub_deeper");
        assert_eq!(deeper.format(), Some(FileFormat::Json));
        assert_eq!(deeper.get_int("c", 0), 3);

        // Root keys are not visible from a section.
        temp_env::with_var_unset("sub_a", || {
            assert_eq!(sub.get_int("a", -1), -1);
        });
    }

    #[test]
    fn test_section_of_scalar_has_no_file() {
        let store = SettingsStore::from_content(JSON, FileFormat::Json);
        let section = store.section("a");
        assert!(!section.has_file());
        assert_eq!(section.prefix(), "a");
    }

    #[test]
    fn test_sections_have_independent_caches() {
        let store = SettingsStore::from_content(JSON, FileFormat::Json);
        let first = store.section("sub");
        let second = store.section("sub");

        first.get_string("b", "");
        assert_eq!(first.cache.borrow().len(), 1);
        assert!(second.cache.borrow().is_empty());
        assert!(store.cache.borrow().is_empty());
    }

    #[test]
    fn test_unparseable_content_is_env_only() {
        let store = SettingsStore::from_content("{ broken", FileFormat::Json);
        assert!(!store.has_file());
        assert_eq!(store.format(), None);
    }
}
