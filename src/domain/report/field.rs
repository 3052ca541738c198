//! Field specifications and the per-request value map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Describes one input slot of a framework form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Stable identifier used as the key in [`FieldValues`].
    pub key: &'static str,
    /// Display name used when the field is rendered as a labeled block.
    pub label: &'static str,
    /// Whether an empty value blocks report generation.
    pub required: bool,
}

impl FieldSpec {
    /// Declares a field that must be filled before a report is generated.
    pub const fn required(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: true,
        }
    }

    /// Declares a field that silently drops from the report when empty.
    pub const fn optional(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            required: false,
        }
    }
}

/// Raw text entered by the user, keyed by [`FieldSpec::key`].
///
/// An absent key reads as the empty string. Text is opaque: whitespace-only
/// values count as filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(HashMap<String, String>);

impl FieldValues {
    /// Creates an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the value for a key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value for a key, or `""` when absent.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    /// Returns true if the key holds a non-empty value.
    pub fn is_filled(&self, key: &str) -> bool {
        !self.get(key).is_empty()
    }

    /// Returns the value when non-empty.
    pub fn filled(&self, key: &str) -> Option<&str> {
        Some(self.get(key)).filter(|v| !v.is_empty())
    }

    /// Number of keys present, including those holding empty strings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<HashMap<String, String>> for FieldValues {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}
