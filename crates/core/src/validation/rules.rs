//! Field descriptors and the aggregated error set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a raw form value is cast before rules run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed string. Numbers and booleans are stringified.
    Text,
    /// Integer, accepted as a JSON number or a numeric string.
    Integer,
}

/// Describes one field of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Path as it appears in form data and on the wire (e.g. `nomeCompleto`).
    pub path: &'static str,
    /// Name of the draft struct attribute carrying the value.
    pub attr: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(path: &'static str, attr: &'static str, kind: FieldKind) -> Self {
        Self {
            path,
            attr,
            kind,
            required: true,
        }
    }

    /// True when a validator report key refers to this field.
    pub fn matches_key(&self, key: &str) -> bool {
        self.attr == key || self.path == key
    }
}

/// Mapping from field path to a human-readable message.
///
/// Serialized as a flat JSON object (`{ "nome": "..." }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.insert(path.into(), message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.0.remove(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Field paths with errors, in sorted order.
    pub fn paths(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
