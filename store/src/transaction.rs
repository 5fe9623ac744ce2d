//! Snapshot-based nested transactions.

use crate::error::{StoreError, StoreResult};

/// Transaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// No transaction is active.
    Inactive,
    /// At least one transaction is open; `depth` counts nested scopes.
    Active { depth: usize },
}

/// Stack of pre-transaction snapshots, one per open scope.
///
/// Committing an inner scope discards its snapshot so the enclosing scope's
/// snapshot still covers the inner writes.
#[derive(Debug, Clone)]
pub(crate) struct SnapshotStack<T> {
    snapshots: Vec<T>,
}

impl<T: Clone> SnapshotStack<T> {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    pub fn state(&self) -> TransactionState {
        match self.snapshots.len() {
            0 => TransactionState::Inactive,
            depth => TransactionState::Active { depth },
        }
    }

    pub fn begin(&mut self, current: &T) {
        self.snapshots.push(current.clone());
    }

    pub fn commit(&mut self) -> StoreResult<()> {
        self.snapshots
            .pop()
            .map(|_| ())
            .ok_or(StoreError::NoActiveTransaction)
    }

    /// Pop the innermost snapshot for restoring.
    pub fn rollback(&mut self) -> StoreResult<T> {
        self.snapshots.pop().ok_or(StoreError::NoActiveTransaction)
    }
}
