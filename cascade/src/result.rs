//! Cascade result types.

use haul_core::{RecordId, RecordKind};

/// Records soft-deleted by one cascade, in visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletedRecords {
    records: Vec<(RecordKind, RecordId)>,
}

impl DeletedRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, kind: RecordKind, id: RecordId) {
        self.records.push((kind, id));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, kind: RecordKind, id: RecordId) -> bool {
        self.records.contains(&(kind, id))
    }

    /// Number of deleted records of one kind.
    pub fn count(&self, kind: RecordKind) -> usize {
        self.records.iter().filter(|(k, _)| *k == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(RecordKind, RecordId)> {
        self.records.iter()
    }

    /// The record the cascade started from.
    pub fn root(&self) -> Option<&(RecordKind, RecordId)> {
        self.records.first()
    }
}
