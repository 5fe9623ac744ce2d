//! Haul Service
//!
//! Create, update, fetch and soft-delete for the shipment-dependent
//! sub-records. Each operation resolves the parent shipment, applies the
//! actor's rule chain and persists inside one store transaction.

mod association;
mod boat;
mod config;
mod context;
mod entity;
mod error;
pub mod etag;
mod gun_safe;
mod mobile_home;
mod resolver;
mod rules;
mod service;

pub use association::{parse_eager, parse_postload, EagerAssociation, PostloadAssociation};
pub use boat::{BoatShipmentService, BoatShipmentUpdate};
pub use config::{BoatThresholds, ServiceConfig};
pub use context::{Actor, AppContext, Session};
pub use entity::{DependentEntity, Rules};
pub use error::{ConfigError, ConfigResult};
pub use gun_safe::{GunSafeWeightTicketService, GunSafeWeightTicketUpdate};
pub use mobile_home::{MobileHomeService, MobileHomeUpdate};
pub use resolver::{ParentResolver, ParentShipment, StoreParentResolver};
pub use rules::RuleContext;
pub use service::DependentService;
