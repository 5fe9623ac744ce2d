//! Haul Merge
//!
//! Folding partial update payloads onto stored records. Payload fields are
//! `Option`s where `None` means "leave unchanged"; fields that must also be
//! clearable use [`Patch`].

mod patch;

pub use patch::Patch;

/// An update payload that can be applied onto a stored `T`.
///
/// Implementations never mutate `old`; they return the merged copy.
pub trait Merge<T> {
    fn merge(&self, old: &T) -> T;
}

/// `new` if set, otherwise `old`.
pub fn merge_option<V: Clone>(new: &Option<V>, old: &Option<V>) -> Option<V> {
    match new {
        Some(value) => Some(value.clone()),
        None => old.clone(),
    }
}

/// `new` if set, otherwise `old`, for non-optional stored fields.
pub fn merge_value<V: Clone>(new: &Option<V>, old: &V) -> V {
    new.as_ref().unwrap_or(old).clone()
}
