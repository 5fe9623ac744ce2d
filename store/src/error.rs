//! Store error types.

use haul_core::{AppError, FieldErrors, RecordError, RecordId, RecordKind};
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record's own checks rejected the write.
    #[error("{kind} failed validation: {errors}")]
    Invalid { kind: RecordKind, errors: FieldErrors },

    #[error("{kind} {id} already exists")]
    Duplicate { kind: RecordKind, id: RecordId },

    #[error("{kind} {id} does not exist")]
    Missing { kind: RecordKind, id: RecordId },

    #[error("record error: {0}")]
    Record(#[from] RecordError),

    #[error("no transaction is active")]
    NoActiveTransaction,

    /// Failure reported by the storage backend itself.
    #[error("backend failure: {message}")]
    Backend { message: String },
}

impl StoreError {
    pub fn invalid(kind: RecordKind, errors: FieldErrors) -> Self {
        Self::Invalid { kind, errors }
    }

    pub fn duplicate(kind: RecordKind, id: RecordId) -> Self {
        Self::Duplicate { kind, id }
    }

    pub fn missing(kind: RecordKind, id: RecordId) -> Self {
        Self::Missing { kind, id }
    }

    pub fn unknown_association(kind: RecordKind, name: impl Into<String>) -> Self {
        Self::Record(RecordError::unknown_association(kind, name))
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// The record kind involved, if the error concerns one.
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            Self::Invalid { kind, .. } | Self::Duplicate { kind, .. } | Self::Missing { kind, .. } => {
                Some(*kind)
            }
            Self::Record(RecordError::NotARow { kind })
            | Self::Record(RecordError::UnknownAssociation { kind, .. }) => Some(*kind),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<RecordId> {
        match self {
            Self::Duplicate { id, .. } | Self::Missing { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Query {
            kind: err.kind(),
            id: err.id(),
            message: err.to_string(),
        }
    }
}
