//! The record contract.
//!
//! Every persisted entity implements [`Record`]. Relationships are declared
//! statically through [`AssociationRef`] tables so that generic code (the
//! cascade walker, the store's association loader) can traverse them without
//! per-type knowledge.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::{FieldErrors, RecordId};

/// Namespace of the domain records handled by the cascade.
pub const MODELS_NAMESPACE: &str = "models";

/// A stored row: the serialized scalar columns of a record.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Identifies a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKind {
    namespace: &'static str,
    name: &'static str,
}

impl RecordKind {
    pub const fn new(namespace: &'static str, name: &'static str) -> Self {
        Self { namespace, name }
    }

    /// A kind in the domain `models` namespace.
    pub const fn model(name: &'static str) -> Self {
        Self::new(MODELS_NAMESPACE, name)
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    pub fn is_model(&self) -> bool {
        self.namespace == MODELS_NAMESPACE
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Relationship cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    HasOne,
    HasMany,
}

/// How an association is joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// Column on the target row holding this record's id.
    Foreign(&'static str),
    /// Column on this record's row holding the target's id.
    Local(&'static str),
}

impl Link {
    pub const fn column(&self) -> &'static str {
        match self {
            Link::Foreign(column) | Link::Local(column) => column,
        }
    }
}

/// Static description of one relationship field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssociationRef {
    pub name: &'static str,
    pub cardinality: Cardinality,
    pub target: RecordKind,
    pub link: Link,
}

impl AssociationRef {
    pub const fn has_one(name: &'static str, target: RecordKind, link: Link) -> Self {
        Self {
            name,
            cardinality: Cardinality::HasOne,
            target,
            link,
        }
    }

    pub const fn has_many(name: &'static str, target: RecordKind, link: Link) -> Self {
        Self {
            name,
            cardinality: Cardinality::HasMany,
            target,
            link,
        }
    }

    /// Look up an association by name in a declaration table.
    pub fn find(table: &'static [AssociationRef], name: &str) -> Option<&'static AssociationRef> {
        table.iter().find(|assoc| assoc.name == name)
    }
}

/// Access to a record's delete-timestamp column.
pub enum SoftDelete<'a> {
    /// The record type has no `deleted_at` column.
    Unsupported,
    /// The column exists but cannot be written through this record.
    ReadOnly,
    /// The writable column.
    Field(&'a mut Option<DateTime<Utc>>),
}

/// Errors raised while converting records to and from rows.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{kind} did not serialize to a row")]
    NotARow { kind: RecordKind },

    #[error("unknown association {name} on {kind}")]
    UnknownAssociation { kind: RecordKind, name: String },
}

impl RecordError {
    pub fn unknown_association(kind: RecordKind, name: impl Into<String>) -> Self {
        Self::UnknownAssociation {
            kind,
            name: name.into(),
        }
    }
}

/// A persisted entity.
///
/// Only `kind`, `id`, `set_id` and `to_row` are mandatory; the remaining
/// methods default to "no soft delete, no timestamps, no associations".
pub trait Record: fmt::Debug + Send {
    fn kind(&self) -> RecordKind;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn soft_delete_field(&mut self) -> SoftDelete<'_> {
        SoftDelete::Unsupported
    }

    /// Record a write. `created` is true on insert.
    fn stamp(&mut self, _now: DateTime<Utc>, _created: bool) {}

    /// Declared relationships, in declaration order.
    fn associations(&self) -> &'static [AssociationRef] {
        &[]
    }

    /// Currently populated association records, in declaration order.
    fn associated_mut(&mut self) -> Vec<&mut dyn Record> {
        Vec::new()
    }

    /// Populate an association field from loaded rows.
    fn attach(&mut self, name: &str, _rows: Vec<Row>) -> Result<(), RecordError> {
        Err(RecordError::unknown_association(self.kind(), name))
    }

    /// Scalar columns of this record.
    fn to_row(&self) -> Result<Row, RecordError>;

    /// Model-level checks run by the store before every write.
    fn validate(&self) -> FieldErrors {
        FieldErrors::new()
    }
}

/// A concrete record type that can be materialized from a row.
pub trait Model: Record + Clone + Serialize + DeserializeOwned + 'static {
    const KIND: RecordKind;
}

/// Serialize a record's scalar columns.
pub fn to_row<T: Serialize>(kind: RecordKind, value: &T) -> Result<Row, RecordError> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(row) => Ok(row),
        _ => Err(RecordError::NotARow { kind }),
    }
}

/// Materialize a record from its row.
pub fn from_row<T: DeserializeOwned>(row: Row) -> Result<T, RecordError> {
    Ok(serde_json::from_value(serde_json::Value::Object(row))?)
}

/// Read an id-valued column from a row.
pub fn row_id(row: &Row, column: &str) -> Option<RecordId> {
    row.get(column)
        .and_then(serde_json::Value::as_str)
        .and_then(|raw| raw.parse().ok())
        .filter(|id: &RecordId| !id.is_nil())
}

/// True if the row's `deleted_at` column is set.
pub fn row_is_deleted(row: &Row) -> bool {
    row.get("deleted_at")
        .is_some_and(|value| !value.is_null())
}
