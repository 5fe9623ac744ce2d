//! Ordered validator chains.

use haul_core::{AppError, AppResult, FieldErrors, Record};
use tracing::debug;

use crate::validator::Validator;

/// An ordered list of validators for one subject.
///
/// Every validator runs, so all violations are reported together. A
/// validator returning `Err` stops the chain and the error propagates
/// unchanged.
pub struct ValidatorChain<T, C = ()> {
    subject: String,
    validators: Vec<Box<dyn Validator<T, C>>>,
}

impl<T: Record, C> ValidatorChain<T, C> {
    /// Create an empty chain. `subject` names the entity in error messages.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            validators: Vec::new(),
        }
    }

    /// Append a validator (builder style).
    pub fn with(mut self, validator: impl Validator<T, C> + 'static) -> Self {
        self.push(validator);
        self
    }

    pub fn push(&mut self, validator: impl Validator<T, C> + 'static) {
        self.validators.push(Box::new(validator));
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run every validator and return the combined field errors.
    pub fn collect(&self, new: &T, old: Option<&T>, ctx: &C) -> AppResult<FieldErrors> {
        let mut errors = FieldErrors::new();
        for validator in &self.validators {
            errors.append(validator.validate(new, old, ctx)?);
        }
        Ok(errors)
    }

    /// Run the chain; any field error becomes `AppError::InvalidInput`.
    pub fn validate(&self, new: &T, old: Option<&T>, ctx: &C) -> AppResult<()> {
        let errors = self.collect(new, old, ctx)?;
        if errors.is_empty() {
            return Ok(());
        }

        debug!(subject = %self.subject, errors = %errors, "validation failed");
        Err(AppError::invalid_input(
            new.id().assigned(),
            errors,
            format!("Invalid input found while validating the {}.", self.subject),
        ))
    }
}
