//! The storage contract.

use haul_core::{
    from_row, row_id, AssociationRef, Cardinality, Link, Model, Record, RecordId, RecordKind, Row,
};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Which rows a read may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Rows whose `deleted_at` is unset.
    #[default]
    Live,
    /// Every row, soft-deleted or not.
    All,
}

/// Row persistence with nested transactions.
///
/// Writes go through `validate_and_create`/`validate_and_update`, which run
/// the record's own [`Record::validate`] checks before touching storage.
pub trait Store {
    /// Insert a new row. A nil id is replaced by a fresh one.
    fn validate_and_create(&mut self, record: &mut dyn Record) -> StoreResult<()>;

    /// Overwrite an existing row.
    fn validate_and_update(&mut self, record: &mut dyn Record) -> StoreResult<()>;

    fn find_row(&self, kind: RecordKind, id: RecordId, scope: Scope) -> StoreResult<Option<Row>>;

    /// Rows of `kind` whose `column` holds `value`, in insertion order.
    fn select_rows(
        &self,
        kind: RecordKind,
        column: &str,
        value: RecordId,
        scope: Scope,
    ) -> StoreResult<Vec<Row>>;

    fn begin(&mut self) -> StoreResult<()>;

    fn commit(&mut self) -> StoreResult<()>;

    fn rollback(&mut self) -> StoreResult<()>;

    /// Populate the named association fields of `record`.
    fn load_associations(
        &self,
        record: &mut dyn Record,
        names: &[&str],
        scope: Scope,
    ) -> StoreResult<()> {
        let kind = record.kind();
        let declared = record.associations();
        let own_row = if declared
            .iter()
            .any(|assoc| matches!(assoc.link, Link::Local(_)))
        {
            Some(record.to_row()?)
        } else {
            None
        };

        for name in names {
            let assoc = AssociationRef::find(declared, name)
                .ok_or_else(|| StoreError::unknown_association(kind, *name))?;

            let mut rows = match assoc.link {
                Link::Foreign(column) => match record.id().assigned() {
                    Some(id) => self.select_rows(assoc.target, column, id, scope)?,
                    None => Vec::new(),
                },
                Link::Local(column) => match own_row.as_ref().and_then(|row| row_id(row, column)) {
                    Some(target) => self.find_row(assoc.target, target, scope)?.into_iter().collect(),
                    None => Vec::new(),
                },
            };
            if assoc.cardinality == Cardinality::HasOne {
                rows.truncate(1);
            }

            debug!(kind = %kind, association = assoc.name, rows = rows.len(), "loaded association");
            record.attach(assoc.name, rows)?;
        }
        Ok(())
    }

    /// Run `f` inside a transaction: commit on `Ok`, roll back on `Err`.
    ///
    /// Calls nest; an inner failure only undoes the inner scope.
    fn with_transaction<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        Self: Sized,
        E: From<StoreError>,
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        self.begin()?;
        match f(self) {
            Ok(value) => {
                self.commit()?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.rollback() {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}

/// Typed reads on top of [`Store`].
pub trait StoreExt: Store {
    fn find<T: Model>(&self, id: RecordId, scope: Scope) -> StoreResult<Option<T>> {
        match self.find_row(T::KIND, id, scope)? {
            Some(row) => Ok(Some(from_row(row)?)),
            None => Ok(None),
        }
    }

    fn select<T: Model>(&self, column: &str, value: RecordId, scope: Scope) -> StoreResult<Vec<T>> {
        self.select_rows(T::KIND, column, value, scope)?
            .into_iter()
            .map(|row| from_row(row).map_err(StoreError::from))
            .collect()
    }
}

impl<S: Store + ?Sized> StoreExt for S {}
