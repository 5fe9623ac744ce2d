//! Haul Core Types
//!
//! This crate provides the foundational types shared by every Haul crate:
//! - Identity types (RecordId)
//! - The `Record` contract and its association metadata
//! - Field-level validation results (FieldErrors)
//! - The application error taxonomy (AppError)

mod error;
mod field_errors;
mod id;
pub mod messages;
mod record;

pub use error::*;
pub use field_errors::*;
pub use id::*;
pub use record::*;
