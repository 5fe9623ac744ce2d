//! Parent shipment lookup.

use haul_core::{AppResult, RecordId};
use haul_models::{Shipment, ShipmentType};
use haul_store::{Scope, Store, StoreExt};

/// What the rules need to know about a parent shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentShipment {
    pub id: RecordId,
    pub shipment_type: ShipmentType,
    pub service_member_id: RecordId,
}

impl From<&Shipment> for ParentShipment {
    fn from(shipment: &Shipment) -> Self {
        Self {
            id: shipment.id,
            shipment_type: shipment.shipment_type,
            service_member_id: shipment.service_member_id,
        }
    }
}

/// Resolves a live parent shipment by id.
pub trait ParentResolver: Send + Sync {
    fn resolve(&self, store: &dyn Store, id: RecordId) -> AppResult<Option<ParentShipment>>;
}

/// Reads the parent from the `Shipment` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreParentResolver;

impl ParentResolver for StoreParentResolver {
    fn resolve(&self, store: &dyn Store, id: RecordId) -> AppResult<Option<ParentShipment>> {
        let shipment: Option<Shipment> = store.find(id, Scope::Live)?;
        Ok(shipment.as_ref().map(ParentShipment::from))
    }
}
