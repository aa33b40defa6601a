//! Layered configuration lookups.
//!
//! A [`SettingsStore`] resolves keys through three tiers, in order:
//! an in-process cache of already-resolved values, a JSON or YAML file, and
//! environment variables. Typed getters coerce the resolved value and fall back
//! to a caller-supplied default; [`SettingsStore::get_object`] decodes a key into
//! any `serde` type.
//!
//! ```rust,no_run
//! use layered_config::SettingsStore;
//!
//! let settings = SettingsStore::open("config.yaml");
//! let port = settings.get_int("port", 8080);
//!
//! // Reads `database.host` from the file, or `database_host` from the environment.
//! let database = settings.section("database");
//! let host = database.get_string("host", "localhost");
//! # let _ = (port, host);
//! ```

pub mod constants;
mod error;
mod loader;
mod store;
mod value;

pub use error::{FormatError, SettingsError};
pub use loader::{FileFormat, compose_env_key};
pub use store::SettingsStore;
pub use value::{FromRawValue, RawValue};
