//! Haul Integration Test Fixtures
//!
//! A [`World`] owns an in-memory store seeded with one service member's
//! shipments. Factories build valid dependent entities; [`FailingStore`]
//! wraps any store and fails selected writes.
//!
//! # Example
//!
//! ```ignore
//! use haul_tests::prelude::*;
//!
//! let mut world = World::new();
//! let shipment = world.shipment(ShipmentType::MobileHome);
//! let home = world
//!     .mobile_homes()
//!     .create(&mut world.customer_ctx(), mobile_home(shipment.id))
//!     .unwrap();
//! ```

mod fixture;

pub use failing::{FailOn, FailingStore};
pub use fixture::{boat, gun_safe, mobile_home, World};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::failing::{FailOn, FailingStore};
    pub use crate::fixture::{boat, gun_safe, mobile_home, World};

    pub use haul_cascade::DeletedRecords;
    pub use haul_core::{messages, AppError, Record, RecordId};
    pub use haul_merge::Patch;
    pub use haul_models::{
        BoatShipment, BoatType, Document, GunSafeWeightTicket, MobileHome, ReviewStatus, Shipment,
        ShipmentType, UserUpload, BOAT_SHIPMENT, DOCUMENT, GUN_SAFE_WEIGHT_TICKET, MOBILE_HOME,
        SHIPMENT, USER_UPLOAD,
    };
    pub use haul_service::{
        etag, Actor, AppContext, BoatShipmentService, BoatShipmentUpdate, EagerAssociation,
        GunSafeWeightTicketService, GunSafeWeightTicketUpdate, MobileHomeService,
        MobileHomeUpdate, PostloadAssociation, ServiceConfig, Session,
    };
    pub use haul_store::{MemoryStore, Scope, Store, StoreExt};
}
