//! Dynamically-typed configuration values and primitive coercion.
//!
//! Responsibilities:
//! - Define `RawValue`, the tagged union every file or environment value is held as.
//! - Convert parsed JSON/YAML documents into `RawValue` trees.
//! - Coerce raw values into primitive targets via `FromRawValue`.
//! - Normalize mapping keys to strings when a section view is built.
//!
//! Does NOT handle:
//! - Choosing which source a value comes from (see `store`).
//! - Decoding into caller-defined structs (see `store::object`).
//!
//! Invariants:
//! - Coercion is pure: it never mutates the value it inspects.
//! - Mapping keys keep their parsed type until `string_keyed` is applied.

use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};

use crate::constants::{FALSE_LITERALS, TRUE_LITERALS};

/// String-keyed view over a mapping, as used by a store's file layer.
pub(crate) type KeyedValues = BTreeMap<String, RawValue>;

/// A value read from a configuration file or an environment variable.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Boolean(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Float(f64),
    String(String),
    Sequence(Vec<RawValue>),
    /// Entries in parser order (YAML keeps document order, JSON sorts by key).
    /// Keys are not yet normalized to strings.
    Mapping(Vec<(RawValue, RawValue)>),
}

impl RawValue {
    /// Short name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Boolean(_) => "boolean",
            RawValue::Integer(_) | RawValue::Unsigned(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::String(_) => "string",
            RawValue::Sequence(_) => "sequence",
            RawValue::Mapping(_) => "mapping",
        }
    }

    /// Render a scalar as a mapping key.
    ///
    /// Sequences and mappings cannot act as keys and yield `None`.
    pub fn as_key(&self) -> Option<String> {
        match self {
            RawValue::Null => Some("null".to_string()),
            RawValue::Boolean(b) => Some(b.to_string()),
            RawValue::Integer(i) => Some(i.to_string()),
            RawValue::Unsigned(u) => Some(u.to_string()),
            RawValue::Float(f) => Some(f.to_string()),
            RawValue::String(s) => Some(s.clone()),
            RawValue::Sequence(_) | RawValue::Mapping(_) => None,
        }
    }
}

/// Normalize one level of mapping entries to string keys.
///
/// Later entries win when two keys render to the same string.
pub(crate) fn string_keyed(entries: &[(RawValue, RawValue)]) -> KeyedValues {
    let mut keyed = KeyedValues::new();
    for (key, value) in entries {
        match key.as_key() {
            Some(key) => {
                keyed.insert(key, value.clone());
            }
            None => {
                tracing::debug!(key_kind = key.kind(), "Skipping non-scalar mapping key");
            }
        }
    }
    keyed
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Boolean(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => RawValue::Integer(i),
                (None, Some(u)) => RawValue::Unsigned(u),
                _ => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => RawValue::String(s),
            Value::Array(items) => RawValue::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => RawValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (RawValue::String(k), v.into()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_yaml::Value> for RawValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Boolean(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => RawValue::Integer(i),
                (None, Some(u)) => RawValue::Unsigned(u),
                _ => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => RawValue::String(s),
            Value::Sequence(items) => {
                RawValue::Sequence(items.into_iter().map(Into::into).collect())
            }
            Value::Mapping(map) => {
                RawValue::Mapping(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
            }
            // Tags carry no meaning for lookups; keep the tagged value.
            Value::Tagged(tagged) => tagged.value.into(),
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawValue::Null => serializer.serialize_unit(),
            RawValue::Boolean(b) => serializer.serialize_bool(*b),
            RawValue::Integer(i) => serializer.serialize_i64(*i),
            RawValue::Unsigned(u) => serializer.serialize_u64(*u),
            RawValue::Float(f) => serializer.serialize_f64(*f),
            RawValue::String(s) => serializer.serialize_str(s),
            RawValue::Sequence(items) => serializer.collect_seq(items),
            RawValue::Mapping(entries) => serializer.collect_map(entries.iter().map(|(k, v)| (k, v))),
        }
    }
}

/// Conversion from a resolved raw value into a typed getter result.
///
/// Returning `None` makes the getter substitute the caller's fallback.
pub trait FromRawValue: Sized {
    fn from_raw(raw: &RawValue) -> Option<Self>;
}

impl FromRawValue for String {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromRawValue for i64 {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Integer(i) => Some(*i),
            RawValue::Float(f) => truncate_float(*f),
            RawValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromRawValue for i32 {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Integer(i) => i32::try_from(*i).ok(),
            RawValue::Float(f) => truncate_float(*f).and_then(|i| i32::try_from(i).ok()),
            RawValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl FromRawValue for bool {
    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Boolean(b) => Some(*b),
            RawValue::String(s) => parse_bool_literal(s),
            _ => None,
        }
    }
}

/// Truncate toward zero, rejecting NaN, infinities and out-of-range values.
fn truncate_float(f: f64) -> Option<i64> {
    // i64::MAX is not representable; 2^63 is the first value past the range.
    const UPPER: f64 = 9_223_372_036_854_775_808.0;

    let truncated = f.trunc();
    if truncated.is_finite() && truncated >= -UPPER && truncated < UPPER {
        Some(truncated as i64)
    } else {
        None
    }
}

fn parse_bool_literal(s: &str) -> Option<bool> {
    if TRUE_LITERALS.contains(&s) {
        Some(true)
    } else if FALSE_LITERALS.contains(&s) {
        Some(false)
    } else {
        None
    }
}
