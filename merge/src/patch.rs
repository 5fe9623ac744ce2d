//! Tri-state field updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An update to an optional field.
///
/// With `#[serde(default)]` on the payload field, a missing key decodes as
/// `Absent`, an explicit `null` as `Null` and anything else as `Value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value untouched.
    #[default]
    Absent,
    /// Clear the stored value.
    Null,
    /// Replace the stored value.
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Clone> Patch<T> {
    /// The field value after applying this patch onto `old`.
    pub fn apply(&self, old: &Option<T>) -> Option<T> {
        match self {
            Patch::Absent => old.clone(),
            Patch::Null => None,
            Patch::Value(value) => Some(value.clone()),
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Value(value) => serializer.serialize_some(value),
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}
