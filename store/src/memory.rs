//! In-memory store.

use chrono::{DateTime, Duration, Utc};
use haul_core::{row_is_deleted, Record, RecordId, RecordKind, Row};
use std::collections::HashMap;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::index::ForeignKeyIndex;
use crate::store::{Scope, Store};
use crate::transaction::{SnapshotStack, TransactionState};

/// Rows of one record kind, in insertion order.
#[derive(Debug, Clone, Default)]
struct Table {
    rows: HashMap<RecordId, Row>,
    order: Vec<RecordId>,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    tables: HashMap<RecordKind, Table>,
    foreign_keys: ForeignKeyIndex,
}

impl Tables {
    fn row(&self, kind: RecordKind, id: RecordId) -> Option<&Row> {
        self.tables.get(&kind).and_then(|table| table.rows.get(&id))
    }

    fn insert(&mut self, kind: RecordKind, id: RecordId, row: Row) {
        self.foreign_keys.insert_row(kind, id, &row);
        let table = self.tables.entry(kind).or_default();
        table.order.push(id);
        table.rows.insert(id, row);
    }

    fn replace(&mut self, kind: RecordKind, id: RecordId, row: Row) {
        let table = self.tables.entry(kind).or_default();
        if let Some(old) = table.rows.insert(id, row) {
            self.foreign_keys.remove_row(kind, id, &old);
        }
        if let Some(new) = table.rows.get(&id) {
            self.foreign_keys.insert_row(kind, id, new);
        }
    }
}

/// A [`Store`] holding rows in process memory.
///
/// Transactions snapshot the whole data set on `begin`; rolling back
/// restores the snapshot.
#[derive(Debug)]
pub struct MemoryStore {
    data: Tables,
    transactions: SnapshotStack<Tables>,
    last_stamp: Option<DateTime<Utc>>,
    writes: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: Tables::default(),
            transactions: SnapshotStack::new(),
            last_stamp: None,
            writes: 0,
        }
    }

    pub fn transaction_state(&self) -> TransactionState {
        self.transactions.state()
    }

    pub fn in_transaction(&self) -> bool {
        self.transactions.state() != TransactionState::Inactive
    }

    /// Number of rows written since creation, rolled-back writes included.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Number of stored rows of `kind`, soft-deleted ones included.
    pub fn row_count(&self, kind: RecordKind) -> usize {
        self.data
            .tables
            .get(&kind)
            .map(|table| table.rows.len())
            .unwrap_or(0)
    }

    /// Strictly increasing write timestamps.
    fn next_stamp(&mut self) -> DateTime<Utc> {
        let mut now = Utc::now();
        if let Some(last) = self.last_stamp {
            if now <= last {
                now = last + Duration::nanoseconds(1);
            }
        }
        self.last_stamp = Some(now);
        now
    }

    fn check(record: &dyn Record) -> StoreResult<()> {
        let errors = record.validate();
        if errors.has_any() {
            return Err(StoreError::invalid(record.kind(), errors));
        }
        Ok(())
    }

    fn visible(row: &Row, scope: Scope) -> bool {
        scope == Scope::All || !row_is_deleted(row)
    }
}

impl Store for MemoryStore {
    fn validate_and_create(&mut self, record: &mut dyn Record) -> StoreResult<()> {
        let kind = record.kind();
        Self::check(record)?;

        let id = match record.id().assigned() {
            Some(id) => {
                if self.data.row(kind, id).is_some() {
                    return Err(StoreError::duplicate(kind, id));
                }
                id
            }
            None => {
                let id = RecordId::new_v4();
                record.set_id(id);
                id
            }
        };

        let now = self.next_stamp();
        record.stamp(now, true);
        let row = record.to_row()?;
        self.data.insert(kind, id, row);
        self.writes += 1;

        debug!(kind = %kind, id = %id, "created row");
        Ok(())
    }

    fn validate_and_update(&mut self, record: &mut dyn Record) -> StoreResult<()> {
        let kind = record.kind();
        let id = record.id();
        if self.data.row(kind, id).is_none() {
            return Err(StoreError::missing(kind, id));
        }
        Self::check(record)?;

        let now = self.next_stamp();
        record.stamp(now, false);
        let row = record.to_row()?;
        self.data.replace(kind, id, row);
        self.writes += 1;

        debug!(kind = %kind, id = %id, "updated row");
        Ok(())
    }

    fn find_row(&self, kind: RecordKind, id: RecordId, scope: Scope) -> StoreResult<Option<Row>> {
        Ok(self
            .data
            .row(kind, id)
            .filter(|row| Self::visible(row, scope))
            .cloned())
    }

    fn select_rows(
        &self,
        kind: RecordKind,
        column: &str,
        value: RecordId,
        scope: Scope,
    ) -> StoreResult<Vec<Row>> {
        let (Some(ids), Some(table)) = (
            self.data.foreign_keys.get(kind, column, value),
            self.data.tables.get(&kind),
        ) else {
            return Ok(Vec::new());
        };

        Ok(table
            .order
            .iter()
            .filter(|id| ids.contains(id))
            .filter_map(|id| table.rows.get(id))
            .filter(|row| Self::visible(row, scope))
            .cloned()
            .collect())
    }

    fn begin(&mut self) -> StoreResult<()> {
        self.transactions.begin(&self.data);
        debug!(state = ?self.transactions.state(), "begin");
        Ok(())
    }

    fn commit(&mut self) -> StoreResult<()> {
        self.transactions.commit()?;
        debug!(state = ?self.transactions.state(), "commit");
        Ok(())
    }

    fn rollback(&mut self) -> StoreResult<()> {
        self.data = self.transactions.rollback()?;
        debug!(state = ?self.transactions.state(), "rollback");
        Ok(())
    }
}
