//! Association discovery.

use haul_core::Record;
use haul_store::{Scope, Store, StoreResult};

/// Load the declared associations of `record` and return the populated ones.
///
/// Has-one fields contribute their record, has-many fields every element;
/// records with a nil id are skipped. Record types without associations
/// never reach the store.
pub fn discover_associations<'r, S: Store + ?Sized>(
    store: &S,
    record: &'r mut dyn Record,
) -> StoreResult<Vec<&'r mut dyn Record>> {
    let declared = record.associations();
    if declared.is_empty() {
        return Ok(Vec::new());
    }

    let names: Vec<&str> = declared.iter().map(|assoc| assoc.name).collect();
    store.load_associations(&mut *record, &names, Scope::Live)?;

    Ok(record
        .associated_mut()
        .into_iter()
        .filter(|associated| !associated.id().is_nil())
        .collect())
}
