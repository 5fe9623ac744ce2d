//! Field-level validation results.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Validation messages keyed by field name.
///
/// Several checks may report against the same field; messages are kept in
/// the order they were added. An empty set means "valid".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Fold another set into this one, preserving per-field order.
    pub fn append(&mut self, other: FieldErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_any(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of fields with at least one message.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Total number of messages across all fields.
    pub fn message_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Messages for a field, empty if the field is valid.
    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Build a `FieldErrors` from `field => message` pairs.
#[macro_export]
macro_rules! field_errors {
    () => {
        $crate::FieldErrors::new()
    };
    ($($field:expr => $message:expr),+ $(,)?) => {
        {
            let mut errors = $crate::FieldErrors::new();
            $(
                errors.add($field, $message);
            )+
            errors
        }
    };
}
