//! Parent shipments.

use chrono::{DateTime, Utc};
use haul_core::{
    from_row, messages, to_row, AssociationRef, FieldErrors, Link, Model, Record, RecordError,
    RecordId, RecordKind, Row, SoftDelete,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{BoatShipment, GunSafeWeightTicket, MobileHome};
use crate::{BOAT_SHIPMENT, GUN_SAFE_WEIGHT_TICKET, MOBILE_HOME, SHIPMENT};

/// Shipment discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentType {
    Hhg,
    HhgIntoNts,
    HhgOutofNts,
    MobileHome,
    BoatHaulAway,
    BoatTowAway,
    Ppm,
    UnaccompaniedBaggage,
}

impl ShipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentType::Hhg => "HHG",
            ShipmentType::HhgIntoNts => "HHG_INTO_NTS",
            ShipmentType::HhgOutofNts => "HHG_OUTOF_NTS",
            ShipmentType::MobileHome => "MOBILE_HOME",
            ShipmentType::BoatHaulAway => "BOAT_HAUL_AWAY",
            ShipmentType::BoatTowAway => "BOAT_TOW_AWAY",
            ShipmentType::Ppm => "PPM",
            ShipmentType::UnaccompaniedBaggage => "UNACCOMPANIED_BAGGAGE",
        }
    }

    pub fn is_boat(&self) -> bool {
        matches!(self, ShipmentType::BoatHaulAway | ShipmentType::BoatTowAway)
    }
}

impl fmt::Display for ShipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static SHIPMENT_ASSOCIATIONS: [AssociationRef; 3] = [
    AssociationRef::has_one("boat_shipment", BOAT_SHIPMENT, Link::Foreign("shipment_id")),
    AssociationRef::has_one("mobile_home", MOBILE_HOME, Link::Foreign("shipment_id")),
    AssociationRef::has_one(
        "gun_safe_weight_ticket",
        GUN_SAFE_WEIGHT_TICKET,
        Link::Foreign("shipment_id"),
    ),
];

/// A move shipment owned by a service member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: RecordId,
    pub shipment_type: ShipmentType,
    pub service_member_id: RecordId,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    pub boat_shipment: Option<Box<BoatShipment>>,
    #[serde(skip)]
    pub mobile_home: Option<Box<MobileHome>>,
    #[serde(skip)]
    pub gun_safe_weight_ticket: Option<Box<GunSafeWeightTicket>>,
}

impl Shipment {
    /// An unsaved shipment of the given type.
    pub fn new(shipment_type: ShipmentType, service_member_id: RecordId) -> Self {
        Self {
            id: RecordId::nil(),
            shipment_type,
            service_member_id,
            created_at: DateTime::default(),
            updated_at: DateTime::default(),
            deleted_at: None,
            boat_shipment: None,
            mobile_home: None,
            gun_safe_weight_ticket: None,
        }
    }
}

fn attach_one<T: Model>(rows: Vec<Row>) -> Result<Option<Box<T>>, RecordError> {
    match rows.into_iter().next() {
        Some(row) => Ok(Some(Box::new(from_row(row)?))),
        None => Ok(None),
    }
}

impl Record for Shipment {
    fn kind(&self) -> RecordKind {
        SHIPMENT
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn soft_delete_field(&mut self) -> SoftDelete<'_> {
        SoftDelete::Field(&mut self.deleted_at)
    }

    fn stamp(&mut self, now: DateTime<Utc>, created: bool) {
        if created {
            self.created_at = now;
        }
        self.updated_at = now;
    }

    fn associations(&self) -> &'static [AssociationRef] {
        &SHIPMENT_ASSOCIATIONS
    }

    fn associated_mut(&mut self) -> Vec<&mut dyn Record> {
        let mut associated: Vec<&mut dyn Record> = Vec::new();
        if let Some(boat) = self.boat_shipment.as_deref_mut() {
            associated.push(boat);
        }
        if let Some(home) = self.mobile_home.as_deref_mut() {
            associated.push(home);
        }
        if let Some(ticket) = self.gun_safe_weight_ticket.as_deref_mut() {
            associated.push(ticket);
        }
        associated
    }

    fn attach(&mut self, name: &str, rows: Vec<Row>) -> Result<(), RecordError> {
        match name {
            "boat_shipment" => self.boat_shipment = attach_one(rows)?,
            "mobile_home" => self.mobile_home = attach_one(rows)?,
            "gun_safe_weight_ticket" => self.gun_safe_weight_ticket = attach_one(rows)?,
            _ => return Err(RecordError::unknown_association(SHIPMENT, name)),
        }
        Ok(())
    }

    fn to_row(&self) -> Result<Row, RecordError> {
        to_row(SHIPMENT, self)
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.service_member_id.is_nil() {
            errors.add("service_member_id", messages::ERR_REQUIRED);
        }
        errors
    }
}

impl Model for Shipment {
    const KIND: RecordKind = SHIPMENT;
}
