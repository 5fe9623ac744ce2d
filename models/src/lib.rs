//! Haul Models
//!
//! The persisted domain records: parent shipments, documents with their
//! uploads, and the three shipment-dependent sub-records.

#[macro_use]
mod macros;

mod boat;
mod document;
mod gun_safe;
mod mobile_home;
mod shipment;

pub use boat::{BoatShipment, BoatType};
pub use document::{Document, UserUpload};
pub use gun_safe::{GunSafeWeightTicket, ReviewStatus};
pub use mobile_home::MobileHome;
pub use shipment::{Shipment, ShipmentType};

use haul_core::{AssociationRef, Link, RecordKind};

pub const SHIPMENT: RecordKind = RecordKind::model("Shipment");
pub const DOCUMENT: RecordKind = RecordKind::model("Document");
pub const USER_UPLOAD: RecordKind = RecordKind::model("UserUpload");
pub const BOAT_SHIPMENT: RecordKind = RecordKind::model("BoatShipment");
pub const MOBILE_HOME: RecordKind = RecordKind::model("MobileHome");
pub const GUN_SAFE_WEIGHT_TICKET: RecordKind = RecordKind::model("GunSafeWeightTicket");

/// Association shared by every dependent sub-record.
pub(crate) static DOCUMENT_ASSOCIATION: [AssociationRef; 1] = [AssociationRef::has_one(
    "document",
    DOCUMENT,
    Link::Local("document_id"),
)];
