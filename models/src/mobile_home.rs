//! Mobile homes.

use chrono::{DateTime, Utc};
use haul_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::{Document, Shipment, MOBILE_HOME};

/// Mobile home details for a `MOBILE_HOME` shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobileHome {
    pub id: RecordId,
    pub shipment_id: RecordId,
    pub document_id: RecordId,
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub length_in_inches: Option<i32>,
    pub width_in_inches: Option<i32>,
    pub height_in_inches: Option<i32>,
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

dependent_record!(MobileHome, MOBILE_HOME);
