//! Generic create/update/fetch/soft-delete for dependent entities.

use chrono::{Datelike, Utc};
use haul_cascade::DeletedRecords;
use haul_core::{field_errors, messages, AppError, AppResult, RecordId};
use haul_merge::Merge;
use haul_models::{Document, Shipment, DOCUMENT, SHIPMENT};
use haul_store::{Scope, Store, StoreExt};
use tracing::{debug, info, warn};

use crate::association::{parse_eager, parse_postload, EagerAssociation, PostloadAssociation};
use crate::config::ServiceConfig;
use crate::context::{Actor, AppContext};
use crate::entity::{DependentEntity, Rules};
use crate::etag;
use crate::resolver::{ParentResolver, ParentShipment, StoreParentResolver};
use crate::rules::RuleContext;

/// Service for one dependent-entity type.
pub struct DependentService<E> {
    config: ServiceConfig,
    rules: Rules<E>,
    resolver: Box<dyn ParentResolver>,
}

impl<E: DependentEntity> Default for DependentService<E> {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}

impl<E: DependentEntity> DependentService<E> {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            rules: E::rules(&config),
            config,
            resolver: Box::new(StoreParentResolver),
        }
    }

    /// Replace the parent shipment lookup.
    pub fn with_resolver(mut self, resolver: impl ParentResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn rules(&self) -> &Rules<E> {
        &self.rules
    }

    /// Validate and store a new entity together with its document and
    /// uploads. A candidate without a document gets an empty one owned by
    /// the parent's service member.
    pub fn create<S: Store>(&self, ctx: &mut AppContext<'_, S>, mut candidate: E) -> AppResult<E> {
        let actor = ctx.actor();
        let parent = self.resolve_parent(ctx.store(), candidate.shipment_id(), &actor)?;

        let owner = parent
            .map(|parent| parent.service_member_id)
            .unwrap_or_default();
        if candidate.document().is_none() {
            match candidate.document_id().assigned() {
                Some(document_id) => {
                    let document = self.existing_document(ctx.store(), document_id, owner)?;
                    candidate.set_document(Some(document));
                }
                None => candidate.set_document(Some(Document::new(owner))),
            }
        }

        let rule_context = self.rule_context(parent, actor);
        if let Err(err) = self.rules.create.validate(&candidate, None, &rule_context) {
            warn!(kind = %E::KIND, error = %err, "rejected create");
            return Err(err);
        }

        let created = ctx.store_mut().with_transaction(|store| -> AppResult<E> {
            let document_id = match candidate.document_mut() {
                Some(document) => {
                    if document.id.is_nil() {
                        store.validate_and_create(document)?;
                    }
                    let document_id = document.id;
                    for upload in &mut document.user_uploads {
                        if upload.id.is_nil() {
                            upload.document_id = document_id;
                            store.validate_and_create(upload)?;
                        }
                    }
                    Some(document_id)
                }
                None => None,
            };
            if let Some(document_id) = document_id {
                candidate.set_document_id(document_id);
            }

            store.validate_and_create(&mut candidate)?;
            Ok(candidate)
        })?;

        info!(kind = %E::KIND, id = %created.id(), shipment_id = %created.shipment_id(), "created");
        Ok(created)
    }

    /// Merge `payload` onto the entity attached to `shipment_id` and store
    /// the result. `etag` must match the stored record.
    pub fn update<S: Store>(
        &self,
        ctx: &mut AppContext<'_, S>,
        payload: &E::Update,
        shipment_id: RecordId,
        etag: &str,
    ) -> AppResult<E> {
        let actor = ctx.actor();
        let updated = ctx.store_mut().with_transaction(|store| -> AppResult<E> {
            let mut old = self.find_by_shipment(&*store, shipment_id)?;
            let parent = self
                .resolve_parent(&*store, old.shipment_id(), &actor)
                .map_err(|err| {
                    if err.is_not_found() {
                        AppError::not_found_kind(shipment_id, E::KIND)
                    } else {
                        err
                    }
                })?;

            if !etag::matches(old.updated_at(), etag) {
                debug!(kind = %E::KIND, id = %old.id(), "stale eTag");
                return Err(AppError::precondition_failed(old.id()));
            }

            load_document(&*store, &mut old, Scope::Live)?;
            let mut merged = payload.merge(&old);
            merged.after_merge(&actor);

            let chain = self.rules.update_chain(&actor);
            let rule_context = self.rule_context(parent, actor);
            if let Err(err) = chain.validate(&merged, Some(&old), &rule_context) {
                warn!(kind = %E::KIND, id = %old.id(), error = %err, "rejected update");
                return Err(err);
            }

            store.validate_and_update(&mut merged)?;
            Ok(merged)
        })?;

        info!(kind = %E::KIND, id = %updated.id(), "updated");
        Ok(updated)
    }

    /// Load a live entity by id. Customers only see entities on their own
    /// shipments.
    pub fn fetch<S: Store>(
        &self,
        ctx: &AppContext<'_, S>,
        id: RecordId,
        eager: &[EagerAssociation],
        postload: &[PostloadAssociation],
    ) -> AppResult<E> {
        let store = ctx.store();
        let mut entity: E = store
            .find(id, Scope::Live)?
            .ok_or_else(|| AppError::not_found_kind(id, E::KIND))?;

        let actor = ctx.actor();
        if actor.is_customer() {
            let parent = self.resolver.resolve(store, entity.shipment_id())?;
            if !parent.is_some_and(|parent| actor.can_access(parent.service_member_id)) {
                return Err(AppError::not_found_kind(id, E::KIND));
            }
        }

        for association in eager {
            match association {
                EagerAssociation::Shipment => {
                    let shipment: Option<Shipment> = store.find(entity.shipment_id(), Scope::Live)?;
                    entity.set_shipment(shipment.map(Box::new));
                }
                EagerAssociation::Document => {
                    store.load_associations(&mut entity, &["document"], Scope::Live)?;
                }
                EagerAssociation::DocumentUserUploads => {
                    load_document(store, &mut entity, Scope::All)?;
                }
            }
        }

        for association in postload {
            match association {
                PostloadAssociation::ActiveUserUploads => {
                    if !eager.contains(&EagerAssociation::DocumentUserUploads) {
                        load_document(store, &mut entity, Scope::Live)?;
                    }
                    if let Some(document) = entity.document_mut() {
                        document
                            .user_uploads
                            .retain(|upload| upload.deleted_at.is_none());
                    }
                }
            }
        }

        Ok(entity)
    }

    /// `fetch` with association names from an external caller. Unknown
    /// names fail before the store is consulted.
    pub fn fetch_by_names<S: Store>(
        &self,
        ctx: &AppContext<'_, S>,
        id: RecordId,
        eager: &[&str],
        postload: &[&str],
    ) -> AppResult<E> {
        let eager = parse_eager(eager)?;
        let postload = parse_postload(postload)?;
        self.fetch(ctx, id, &eager, &postload)
    }

    /// Soft-delete the entity with its document and uploads in one
    /// transaction.
    pub fn soft_destroy<S: Store>(
        &self,
        ctx: &mut AppContext<'_, S>,
        id: RecordId,
    ) -> AppResult<DeletedRecords> {
        let mut entity = self.fetch(ctx, id, &[], &[])?;
        ctx.store_mut()
            .with_transaction(|store| haul_cascade::soft_destroy(store, &mut entity))
    }

    fn resolve_parent(
        &self,
        store: &dyn Store,
        shipment_id: RecordId,
        actor: &Actor,
    ) -> AppResult<Option<ParentShipment>> {
        let Some(id) = shipment_id.assigned() else {
            return Ok(None);
        };
        match self.resolver.resolve(store, id)? {
            Some(parent) if actor.can_access(parent.service_member_id) => Ok(Some(parent)),
            _ => Err(AppError::not_found_kind(id, SHIPMENT)),
        }
    }

    /// A stored document named by a create candidate. It must be live and,
    /// when the parent is known, owned by the parent's service member.
    fn existing_document<S: Store>(
        &self,
        store: &S,
        document_id: RecordId,
        owner: RecordId,
    ) -> AppResult<Document> {
        let document: Document = store
            .find(document_id, Scope::Live)?
            .ok_or_else(|| AppError::not_found_kind(document_id, DOCUMENT))?;
        if !owner.is_nil() && document.service_member_id != owner {
            warn!(kind = %E::KIND, document_id = %document_id, "document belongs to another service member");
            return Err(AppError::invalid_input(
                None,
                field_errors! { "document_id" => messages::ERR_DOCUMENT_OWNER },
                format!("Invalid input found while validating the {}.", E::SUBJECT),
            ));
        }
        Ok(document)
    }

    fn find_by_shipment<S: Store>(&self, store: &S, shipment_id: RecordId) -> AppResult<E> {
        let found: Vec<E> = store.select("shipment_id", shipment_id, Scope::Live)?;
        if found.len() > 1 {
            warn!(kind = %E::KIND, shipment_id = %shipment_id, count = found.len(), "shipment has more than one live entity");
        }
        found
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found_kind(shipment_id, E::KIND))
    }

    fn rule_context(&self, parent: Option<ParentShipment>, actor: Actor) -> RuleContext {
        RuleContext::new(parent, actor, Utc::now().year())
    }
}

/// Load the owning document and its uploads.
fn load_document<E: DependentEntity, S: Store + ?Sized>(
    store: &S,
    entity: &mut E,
    uploads: Scope,
) -> AppResult<()> {
    if entity.document().is_none() {
        store.load_associations(entity, &["document"], Scope::Live)?;
    }
    if let Some(document) = entity.document_mut() {
        store.load_associations(document, &["user_uploads"], uploads)?;
    }
    Ok(())
}
