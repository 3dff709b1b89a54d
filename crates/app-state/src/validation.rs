//! Submit-time validation
//!
//! Validation is synchronous and never fails as an operation: a rejected
//! field is a value ([`FailureReason`]), not an error.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::field::FieldSpec;

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Required field left empty
    Missing,
    /// Value longer than the configured maximum
    TooLong,
}

/// Check one value against its spec, returning the first failure
pub fn validate_value(spec: &FieldSpec, value: &str) -> Option<FailureReason> {
    if spec.requires_value && value.is_empty() {
        return Some(FailureReason::Missing);
    }
    if let Some(max) = spec.max_length {
        if value.graphemes(true).count() > max {
            return Some(FailureReason::TooLong);
        }
    }
    None
}

/// Validation outcome for a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidation {
    /// Field name
    pub name: String,
    /// Failure, if the field was rejected
    pub failure: Option<FailureReason>,
}

/// Per-field outcome of one submit, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    fields: Vec<FieldValidation>,
}

impl ValidationResult {
    /// Record the outcome of one field
    pub fn push(&mut self, name: impl Into<String>, failure: Option<FailureReason>) {
        self.fields.push(FieldValidation {
            name: name.into(),
            failure,
        });
    }

    /// True when no field failed
    pub fn is_success(&self) -> bool {
        self.fields.iter().all(|f| f.failure.is_none())
    }

    /// Failure recorded for a field
    pub fn failure_for(&self, name: &str) -> Option<FailureReason> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .and_then(|f| f.failure)
    }

    /// Failed fields with their reasons
    pub fn failures(&self) -> impl Iterator<Item = (&str, FailureReason)> {
        self.fields
            .iter()
            .filter_map(|f| f.failure.map(|reason| (f.name.as_str(), reason)))
    }

    /// All field outcomes
    pub fn fields(&self) -> &[FieldValidation] {
        &self.fields
    }
}

/// Validated values handed to a screen's success action
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitPayload {
    values: Vec<(String, String)>,
}

impl SubmitPayload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.push((name.into(), value.into()));
    }

    /// Value of a field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field values in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the payload has no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SubmitPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
