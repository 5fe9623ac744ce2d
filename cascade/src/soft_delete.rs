//! Cascading soft delete.

use chrono::{DateTime, Utc};
use haul_core::{AppError, AppResult, Record, RecordId, RecordKind, SoftDelete};
use haul_store::Store;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::result::DeletedRecords;
use crate::walker::discover_associations;

/// Soft-delete `record` and, depth-first, every live record reachable
/// through its declared associations.
///
/// The first failure aborts the cascade and is returned as is. Writes
/// already made are not undone here; wrap the call in
/// [`Store::with_transaction`] for atomicity.
pub fn soft_destroy<S: Store + ?Sized>(
    store: &mut S,
    record: &mut dyn Record,
) -> AppResult<DeletedRecords> {
    let root = (record.kind(), record.id());
    let mut deleter = SoftDeleter::new(store);
    deleter.destroy(record)?;

    info!(
        kind = %root.0,
        id = %root.1,
        deleted = deleter.deleted.len(),
        "soft delete cascade finished"
    );
    Ok(deleter.deleted)
}

struct SoftDeleter<'s, S: ?Sized> {
    store: &'s mut S,
    now: DateTime<Utc>,
    visited: HashSet<(RecordKind, RecordId)>,
    deleted: DeletedRecords,
}

impl<'s, S: Store + ?Sized> SoftDeleter<'s, S> {
    fn new(store: &'s mut S) -> Self {
        Self {
            store,
            now: Utc::now(),
            visited: HashSet::new(),
            deleted: DeletedRecords::new(),
        }
    }

    fn destroy(&mut self, record: &mut dyn Record) -> AppResult<()> {
        let kind = record.kind();
        let id = record.id();

        if !kind.is_model() {
            return Err(AppError::invalid_type(kind));
        }
        if !self.visited.insert((kind, id)) {
            debug!(kind = %kind, id = %id, "already soft deleted in this cascade");
            return Ok(());
        }

        match record.soft_delete_field() {
            SoftDelete::Field(deleted_at) => *deleted_at = Some(self.now),
            SoftDelete::Unsupported | SoftDelete::ReadOnly => {
                return Err(AppError::unsupported_entity(kind));
            }
        }

        self.store
            .validate_and_update(record)
            .map_err(|err| AppError::persistence(kind, id, err.to_string()))?;
        self.deleted.push(kind, id);
        debug!(kind = %kind, id = %id, "soft deleted");

        for associated in discover_associations(&*self.store, record)? {
            self.destroy(associated)?;
        }
        Ok(())
    }
}
