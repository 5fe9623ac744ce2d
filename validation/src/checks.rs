//! Reusable field checks.
//!
//! The free functions append to a `FieldErrors` being built by a rule; the
//! `check_*` constructors return ready-made validators.

use haul_core::{messages, AppResult, FieldErrors, Record, RecordId};

use crate::validator::Validator;

pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |value| value.trim().is_empty())
}

pub fn require_present<V>(errors: &mut FieldErrors, field: &str, value: &Option<V>) {
    if value.is_none() {
        errors.add(field, messages::ERR_REQUIRED);
    }
}

/// Present and strictly positive.
pub fn require_positive(errors: &mut FieldErrors, field: &str, value: Option<i32>) {
    match value {
        None => errors.add(field, messages::ERR_REQUIRED),
        Some(value) if value <= 0 => errors.add(field, messages::ERR_NOT_POSITIVE),
        Some(_) => {}
    }
}

/// Present and not whitespace-only.
pub fn require_non_blank(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    match value {
        None => errors.add(field, messages::ERR_REQUIRED),
        Some(value) if value.trim().is_empty() => errors.add(field, messages::ERR_BLANK),
        Some(_) => {}
    }
}

/// Present and within `[min, max]`.
pub fn require_year_between(
    errors: &mut FieldErrors,
    field: &str,
    year: Option<i32>,
    min: i32,
    max: i32,
) {
    match year {
        None => errors.add(field, messages::ERR_REQUIRED),
        Some(year) if year < min || year > max => errors.add(field, messages::ERR_INVALID_YEAR),
        Some(_) => {}
    }
}

/// Identity rule: nil on create, unchanged on update.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdCheck;

pub fn check_id() -> IdCheck {
    IdCheck
}

impl<T: Record, C> Validator<T, C> for IdCheck {
    fn validate(&self, new: &T, old: Option<&T>, _ctx: &C) -> AppResult<FieldErrors> {
        let mut errors = FieldErrors::new();
        match old {
            None if !new.id().is_nil() => errors.add("id", messages::ERR_ID_SET_ON_CREATE),
            Some(old) if new.id() != old.id() => errors.add("id", messages::ERR_ID_CHANGED),
            _ => {}
        }
        Ok(errors)
    }
}

/// Link rule: the referenced id is required and never changes once set.
pub struct LinkCheck<T> {
    field: &'static str,
    link: fn(&T) -> RecordId,
}

pub fn check_link<T>(field: &'static str, link: fn(&T) -> RecordId) -> LinkCheck<T> {
    LinkCheck { field, link }
}

impl<T, C> Validator<T, C> for LinkCheck<T> {
    fn validate(&self, new: &T, old: Option<&T>, _ctx: &C) -> AppResult<FieldErrors> {
        let mut errors = FieldErrors::new();
        let current = (self.link)(new);
        let original = old.map(self.link).and_then(RecordId::assigned);

        match original {
            Some(original) if current != original => {
                errors.add(self.field, messages::ERR_PARENT_CHANGED)
            }
            Some(_) => {}
            None if current.is_nil() => errors.add(self.field, messages::ERR_REQUIRED),
            None => {}
        }
        Ok(errors)
    }
}
