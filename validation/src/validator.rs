//! The check contract.

use haul_core::{AppResult, FieldErrors};

/// One business-rule check over a candidate `new` and, on update, the
/// stored `old`.
///
/// Rule violations are returned as field errors; an `Err` means the check
/// itself could not run and aborts the whole chain.
pub trait Validator<T, C = ()>: Send + Sync {
    fn validate(&self, new: &T, old: Option<&T>, ctx: &C) -> AppResult<FieldErrors>;
}

/// A [`Validator`] backed by a closure.
pub struct ValidatorFn<F>(F);

impl<T, C, F> Validator<T, C> for ValidatorFn<F>
where
    F: Fn(&T, Option<&T>, &C) -> AppResult<FieldErrors> + Send + Sync,
{
    fn validate(&self, new: &T, old: Option<&T>, ctx: &C) -> AppResult<FieldErrors> {
        (self.0)(new, old, ctx)
    }
}

/// Wrap a closure as a validator.
pub fn validator_fn<T, C, F>(f: F) -> ValidatorFn<F>
where
    F: Fn(&T, Option<&T>, &C) -> AppResult<FieldErrors> + Send + Sync,
{
    ValidatorFn(f)
}
