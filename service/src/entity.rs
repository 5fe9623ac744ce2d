//! The dependent-entity contract.

use chrono::{DateTime, Utc};
use haul_core::{Model, RecordId};
use haul_merge::Merge;
use haul_models::{Document, Shipment};
use haul_validation::ValidatorChain;

use crate::config::ServiceConfig;
use crate::context::Actor;
use crate::rules::RuleContext;

/// Rule chains for one entity type.
pub struct Rules<E> {
    pub create: ValidatorChain<E, RuleContext>,
    pub customer_update: ValidatorChain<E, RuleContext>,
    pub reviewer_update: ValidatorChain<E, RuleContext>,
}

impl<E: DependentEntity> Rules<E> {
    /// The update chain for `actor`.
    pub fn update_chain(&self, actor: &Actor) -> &ValidatorChain<E, RuleContext> {
        match actor {
            Actor::Customer { .. } => &self.customer_update,
            Actor::Reviewer { .. } | Actor::Anonymous => &self.reviewer_update,
        }
    }
}

/// A 1:1 sub-record of a shipment that owns a document.
pub trait DependentEntity: Model + PartialEq {
    /// Entity name used in validation messages.
    const SUBJECT: &'static str;

    /// Partial update payload.
    type Update: Merge<Self>;

    fn shipment_id(&self) -> RecordId;

    fn document_id(&self) -> RecordId;

    fn set_document_id(&mut self, id: RecordId);

    fn document(&self) -> Option<&Document>;

    fn document_mut(&mut self) -> Option<&mut Document>;

    fn set_document(&mut self, document: Option<Document>);

    fn set_shipment(&mut self, shipment: Option<Box<Shipment>>);

    fn updated_at(&self) -> DateTime<Utc>;

    fn rules(config: &ServiceConfig) -> Rules<Self>;

    /// Adjust a merged update before validation.
    fn after_merge(&mut self, _actor: &Actor) {}
}

/// Implement the accessor part of `DependentEntity`.
macro_rules! dependent_accessors {
    () => {
        fn shipment_id(&self) -> haul_core::RecordId {
            self.shipment_id
        }

        fn document_id(&self) -> haul_core::RecordId {
            self.document_id
        }

        fn set_document_id(&mut self, id: haul_core::RecordId) {
            self.document_id = id;
        }

        fn document(&self) -> Option<&haul_models::Document> {
            self.document.as_ref()
        }

        fn document_mut(&mut self) -> Option<&mut haul_models::Document> {
            self.document.as_mut()
        }

        fn set_document(&mut self, document: Option<haul_models::Document>) {
            self.document = document;
        }

        fn set_shipment(&mut self, shipment: Option<Box<haul_models::Shipment>>) {
            self.shipment = shipment;
        }

        fn updated_at(&self) -> chrono::DateTime<chrono::Utc> {
            self.updated_at
        }
    };
}

pub(crate) use dependent_accessors;
