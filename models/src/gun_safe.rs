//! Gun-safe weight tickets.

use chrono::{DateTime, Utc};
use haul_core::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Document, Shipment, GUN_SAFE_WEIGHT_TICKET};

/// Reviewer verdict on a submitted ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    Approved,
    Excluded,
    Rejected,
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReviewStatus::Approved => "APPROVED",
            ReviewStatus::Excluded => "EXCLUDED",
            ReviewStatus::Rejected => "REJECTED",
        })
    }
}

/// Weight evidence for a gun safe moved in a `PPM` shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GunSafeWeightTicket {
    pub id: RecordId,
    pub shipment_id: RecordId,
    pub document_id: RecordId,
    pub description: Option<String>,
    pub weight: Option<i32>,
    pub has_weight_tickets: Option<bool>,
    pub submitted_weight: Option<i32>,
    pub submitted_has_weight_tickets: Option<bool>,
    pub status: Option<ReviewStatus>,
    pub reason: Option<String>,
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

dependent_record!(GunSafeWeightTicket, GUN_SAFE_WEIGHT_TICKET);
