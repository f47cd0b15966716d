//! # Form Submission
//!
//! The payload handed to the submission collaborator: every named field of
//! the form except the honeypot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldId;

/// Mapping from field name to value, honeypot excluded.
///
/// Serializes as a flat JSON object with keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSubmission(BTreeMap<String, String>);

impl FormSubmission {
    /// Build a submission from the enumerated `(name, value)` pairs of a form.
    ///
    /// The honeypot entry is dropped. A name that appears more than once keeps
    /// its last value.
    pub fn from_named_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let honeypot = FieldId::Website.as_str();
        let map = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| k != honeypot)
            .collect();
        Self(map)
    }

    /// Value submitted for a known field, if present.
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.get_named(field.as_str())
    }

    /// Value submitted under an arbitrary name, if present.
    pub fn get_named(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Number of fields carried.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fields are carried.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
