//! Boat shipments.

use chrono::{DateTime, Utc};
use haul_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::{Document, Shipment, ShipmentType, BOAT_SHIPMENT};

/// How the boat is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoatType {
    HaulAway,
    TowAway,
}

impl BoatType {
    /// The shipment type a boat of this kind must ship under.
    pub fn shipment_type(&self) -> ShipmentType {
        match self {
            BoatType::HaulAway => ShipmentType::BoatHaulAway,
            BoatType::TowAway => ShipmentType::BoatTowAway,
        }
    }
}

/// Boat details for a `BOAT_HAUL_AWAY` or `BOAT_TOW_AWAY` shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoatShipment {
    pub id: RecordId,
    pub shipment_id: RecordId,
    pub document_id: RecordId,
    pub boat_type: Option<BoatType>,
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub length_in_inches: Option<i32>,
    pub width_in_inches: Option<i32>,
    pub height_in_inches: Option<i32>,
    pub has_trailer: Option<bool>,
    pub is_roadworthy: Option<bool>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub shipment: Option<Box<Shipment>>,
    #[serde(skip)]
    pub document: Option<Document>,
}

dependent_record!(BoatShipment, BOAT_SHIPMENT);
