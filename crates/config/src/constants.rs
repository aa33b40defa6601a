//! Centralized constants for layered configuration lookups.

/// Separator placed between section names and keys in environment variable names.
pub const ENV_KEY_SEPARATOR: &str = "_";

/// String literals accepted as `true` by the boolean getter.
pub(crate) const TRUE_LITERALS: &[&str] = &["1", "t", "T", "TRUE", "true", "True"];

/// String literals accepted as `false` by the boolean getter.
pub(crate) const FALSE_LITERALS: &[&str] = &["0", "f", "F", "FALSE", "false", "False"];
