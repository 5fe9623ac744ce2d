//! Application error taxonomy.
//!
//! Transport layers translate these variants into responses; the core never
//! formats transport-specific payloads itself.

use thiserror::Error;

use crate::{FieldErrors, RecordId, RecordKind};

/// Result type for core operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the services and the cascade.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more field-level rule violations.
    #[error("{message}")]
    InvalidInput {
        id: Option<RecordId>,
        errors: FieldErrors,
        message: String,
    },

    /// Missing, soft-deleted, or not visible to the current actor.
    #[error("ID: {id} not found {message}")]
    NotFound { id: RecordId, message: String },

    #[error("{kind} does not support soft deletion")]
    UnsupportedEntity { kind: RecordKind },

    #[error("can only soft delete domain models, got {namespace}::{kind}")]
    InvalidType {
        kind: RecordKind,
        namespace: &'static str,
    },

    #[error("{message}")]
    NotImplemented { message: String },

    /// Unexpected persistence failure.
    #[error("query error: {message}")]
    Query {
        kind: Option<RecordKind>,
        id: Option<RecordId>,
        message: String,
    },

    #[error("error updating {kind} {id}: {message}")]
    Persistence {
        kind: RecordKind,
        id: RecordId,
        message: String,
    },

    #[error("Precondition failed on update to object with ID: '{id}'. The If-Match header value did not match the eTag for this record.")]
    PreconditionFailed { id: RecordId },
}

impl AppError {
    pub fn invalid_input(
        id: Option<RecordId>,
        errors: FieldErrors,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            id,
            errors,
            message: message.into(),
        }
    }

    pub fn not_found(id: RecordId, message: impl Into<String>) -> Self {
        Self::NotFound {
            id,
            message: message.into(),
        }
    }

    /// `NotFound` with the conventional "while looking for <Kind>" message.
    pub fn not_found_kind(id: RecordId, kind: RecordKind) -> Self {
        Self::not_found(id, format!("while looking for {kind}"))
    }

    pub fn unsupported_entity(kind: RecordKind) -> Self {
        Self::UnsupportedEntity { kind }
    }

    pub fn invalid_type(kind: RecordKind) -> Self {
        Self::InvalidType {
            kind,
            namespace: kind.namespace(),
        }
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented {
            message: message.into(),
        }
    }

    pub fn query(kind: RecordKind, id: Option<RecordId>, message: impl Into<String>) -> Self {
        Self::Query {
            kind: Some(kind),
            id,
            message: message.into(),
        }
    }

    pub fn persistence(kind: RecordKind, id: RecordId, message: impl Into<String>) -> Self {
        Self::Persistence {
            kind,
            id,
            message: message.into(),
        }
    }

    pub fn precondition_failed(id: RecordId) -> Self {
        Self::PreconditionFailed { id }
    }

    /// Field errors carried by an `InvalidInput`.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::InvalidInput { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
