//! Haul Validation
//!
//! Composable rule checks. A [`Validator`] inspects a candidate (and, on
//! update, the stored original) and reports field errors; a
//! [`ValidatorChain`] runs an ordered set of them and folds the results into
//! one `InvalidInput` error.

mod chain;
pub mod checks;
mod validator;

pub use chain::ValidatorChain;
pub use checks::{check_id, check_link};
pub use validator::{validator_fn, Validator, ValidatorFn};
