//! Seeded stores and entity factories.

use chrono::{Datelike, Utc};
use haul_core::{Record, RecordId};
use haul_models::{
    BoatShipment, BoatType, Document, GunSafeWeightTicket, MobileHome, Shipment, ShipmentType,
    UserUpload,
};
use haul_service::{
    AppContext, BoatShipmentService, GunSafeWeightTicketService, MobileHomeService, ServiceConfig,
    Session,
};
use haul_store::{MemoryStore, Store};

/// A store seeded on demand with records owned by one service member.
pub struct World {
    pub store: MemoryStore,
    pub member: RecordId,
    pub reviewer: RecordId,
    config: ServiceConfig,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            store: MemoryStore::new(),
            member: RecordId::new_v4(),
            reviewer: RecordId::new_v4(),
            config,
        }
    }

    /// Store a shipment owned by the world's service member.
    pub fn shipment(&mut self, shipment_type: ShipmentType) -> Shipment {
        self.shipment_for(shipment_type, self.member)
    }

    pub fn shipment_for(&mut self, shipment_type: ShipmentType, owner: RecordId) -> Shipment {
        let mut shipment = Shipment::new(shipment_type, owner);
        self.insert(&mut shipment);
        shipment
    }

    /// Store a document with one upload per filename.
    pub fn document(&mut self, filenames: &[&str]) -> Document {
        let mut document = Document::new(self.member);
        self.insert(&mut document);
        for filename in filenames {
            let mut upload = UserUpload::new(self.member, *filename);
            upload.document_id = document.id;
            self.insert(&mut upload);
            document.user_uploads.push(upload);
        }
        document
    }

    pub fn insert(&mut self, record: &mut dyn Record) {
        if let Err(err) = self.store.validate_and_create(record) {
            panic!("fixture insert failed: {err}");
        }
    }

    pub fn customer(&self) -> Session {
        Session::customer(self.member)
    }

    pub fn stranger(&self) -> Session {
        Session::customer(RecordId::new_v4())
    }

    pub fn office(&self) -> Session {
        Session::reviewer(self.reviewer)
    }

    pub fn ctx(&mut self, session: Session) -> AppContext<'_, MemoryStore> {
        AppContext::new(&mut self.store, session)
    }

    pub fn customer_ctx(&mut self) -> AppContext<'_, MemoryStore> {
        let session = self.customer();
        self.ctx(session)
    }

    pub fn office_ctx(&mut self) -> AppContext<'_, MemoryStore> {
        let session = self.office();
        self.ctx(session)
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn boats(&self) -> BoatShipmentService {
        BoatShipmentService::new(self.config.clone())
    }

    pub fn mobile_homes(&self) -> MobileHomeService {
        MobileHomeService::new(self.config.clone())
    }

    pub fn gun_safes(&self) -> GunSafeWeightTicketService {
        GunSafeWeightTicketService::new(self.config.clone())
    }
}

fn this_year() -> i32 {
    Utc::now().year()
}

/// A tow-away boat on a trailer, longer than the haul-away threshold.
pub fn boat(shipment_id: RecordId) -> BoatShipment {
    BoatShipment {
        shipment_id,
        boat_type: Some(BoatType::TowAway),
        year: Some(this_year() - 10),
        make: Some("Boston Whaler".to_string()),
        model: Some("Montauk 170".to_string()),
        length_in_inches: Some(204),
        width_in_inches: Some(80),
        height_in_inches: Some(60),
        has_trailer: Some(true),
        is_roadworthy: Some(true),
        ..Default::default()
    }
}

pub fn mobile_home(shipment_id: RecordId) -> MobileHome {
    MobileHome {
        shipment_id,
        year: Some(this_year() - 20),
        make: Some("Clayton".to_string()),
        model: Some("Tempo".to_string()),
        length_in_inches: Some(840),
        width_in_inches: Some(168),
        height_in_inches: Some(150),
        ..Default::default()
    }
}

pub fn gun_safe(shipment_id: RecordId) -> GunSafeWeightTicket {
    GunSafeWeightTicket {
        shipment_id,
        description: Some("Cannon Safe".to_string()),
        weight: Some(520),
        has_weight_tickets: Some(true),
        ..Default::default()
    }
}
