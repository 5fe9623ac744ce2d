//! Gun-safe weight tickets.

use haul_core::{messages, AppResult, FieldErrors};
use haul_merge::{merge_option, Merge, Patch};
use haul_models::{GunSafeWeightTicket, ReviewStatus, ShipmentType};
use haul_validation::checks::{is_blank, require_non_blank, require_positive, require_present};
use haul_validation::{check_id, check_link, validator_fn, Validator, ValidatorChain};

use crate::config::ServiceConfig;
use crate::context::Actor;
use crate::entity::{dependent_accessors, DependentEntity, Rules};
use crate::rules::{check_parent_type, RuleContext};
use crate::service::DependentService;

pub type GunSafeWeightTicketService = DependentService<GunSafeWeightTicket>;

/// Partial update of a gun-safe weight ticket.
///
/// `reason` is tri-state so a reviewer can clear an earlier rejection
/// reason while approving. A blank reason clears it as well.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GunSafeWeightTicketUpdate {
    pub description: Option<String>,
    pub weight: Option<i32>,
    pub has_weight_tickets: Option<bool>,
    pub status: Option<ReviewStatus>,
    pub reason: Patch<String>,
}

impl Merge<GunSafeWeightTicket> for GunSafeWeightTicketUpdate {
    fn merge(&self, old: &GunSafeWeightTicket) -> GunSafeWeightTicket {
        GunSafeWeightTicket {
            description: merge_option(&self.description, &old.description),
            weight: merge_option(&self.weight, &old.weight),
            has_weight_tickets: merge_option(&self.has_weight_tickets, &old.has_weight_tickets),
            status: merge_option(&self.status, &old.status),
            reason: match &self.reason {
                Patch::Value(reason) if reason.trim().is_empty() => None,
                reason => reason.apply(&old.reason),
            },
            ..old.clone()
        }
    }
}

/// Shipment link and an owning document with a service member.
fn check_base_fields(
    ticket: &GunSafeWeightTicket,
    _: Option<&GunSafeWeightTicket>,
    _: &RuleContext,
) -> AppResult<FieldErrors> {
    let mut errors = FieldErrors::new();
    match &ticket.document {
        Some(document) if document.service_member_id.is_nil() => {
            errors.add("service_member_id", messages::ERR_REQUIRED)
        }
        Some(_) => {}
        None if ticket.document_id.is_nil() => errors.add("document", messages::ERR_REQUIRED),
        None => {}
    }
    Ok(errors)
}

/// New tickets start unreviewed with nothing submitted.
fn check_unreviewed(
    ticket: &GunSafeWeightTicket,
    _: Option<&GunSafeWeightTicket>,
    _: &RuleContext,
) -> AppResult<FieldErrors> {
    let mut errors = FieldErrors::new();
    if ticket.status.is_some() {
        errors.add("status", messages::ERR_SET_ON_CREATE);
    }
    if ticket.reason.is_some() {
        errors.add("reason", messages::ERR_SET_ON_CREATE);
    }
    if ticket.submitted_weight.is_some() {
        errors.add("submitted_weight", messages::ERR_SET_ON_CREATE);
    }
    if ticket.submitted_has_weight_tickets.is_some() {
        errors.add("submitted_has_weight_tickets", messages::ERR_SET_ON_CREATE);
    }
    Ok(errors)
}

fn check_customer_fields(require_uploads: bool) -> impl Validator<GunSafeWeightTicket, RuleContext> {
    validator_fn(
        move |ticket: &GunSafeWeightTicket, _: Option<&GunSafeWeightTicket>, _: &RuleContext| {
            let mut errors = FieldErrors::new();
            require_non_blank(&mut errors, "description", ticket.description.as_deref());
            require_positive(&mut errors, "weight", ticket.weight);
            require_present(&mut errors, "has_weight_tickets", &ticket.has_weight_tickets);

            let uploads = ticket
                .document
                .as_ref()
                .map_or(0, |document| document.active_uploads().count());
            if require_uploads && uploads == 0 {
                errors.add("document", messages::ERR_UPLOAD_REQUIRED);
            }
            Ok(errors)
        },
    )
}

/// Customers may not touch the review outcome.
fn check_review_unchanged(
    ticket: &GunSafeWeightTicket,
    old: Option<&GunSafeWeightTicket>,
    _: &RuleContext,
) -> AppResult<FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Some(old) = old {
        if ticket.status != old.status {
            errors.add("status", messages::ERR_STATUS_CHANGED);
        }
        if ticket.reason != old.reason {
            errors.add("reason", messages::ERR_REASON_CHANGED);
        }
    }
    Ok(errors)
}

/// Reviewer verdicts: a reason explains exclusions and rejections only.
fn check_review_outcome(
    ticket: &GunSafeWeightTicket,
    _: Option<&GunSafeWeightTicket>,
    _: &RuleContext,
) -> AppResult<FieldErrors> {
    let mut errors = FieldErrors::new();
    let has_reason = !is_blank(ticket.reason.as_deref());
    match ticket.status {
        None if has_reason => errors.add("reason", messages::ERR_REASON_WITHOUT_STATUS),
        Some(ReviewStatus::Approved) if ticket.reason.is_some() => {
            errors.add("reason", messages::ERR_REASON_WITH_APPROVAL)
        }
        Some(ReviewStatus::Excluded | ReviewStatus::Rejected) if !has_reason => {
            errors.add("reason", messages::ERR_REASON_MANDATORY)
        }
        _ => {}
    }
    Ok(errors)
}

fn base_chain() -> ValidatorChain<GunSafeWeightTicket, RuleContext> {
    ValidatorChain::new(GunSafeWeightTicket::SUBJECT)
        .with(check_id())
        .with(check_link::<GunSafeWeightTicket>("shipment_id", |ticket| {
            ticket.shipment_id
        }))
        .with(check_parent_type(&[ShipmentType::Ppm]))
}

impl DependentEntity for GunSafeWeightTicket {
    const SUBJECT: &'static str = "gun safe weight ticket";

    type Update = GunSafeWeightTicketUpdate;

    dependent_accessors!();

    fn rules(config: &ServiceConfig) -> Rules<Self> {
        Rules {
            create: base_chain()
                .with(validator_fn(check_base_fields))
                .with(validator_fn(check_unreviewed)),
            customer_update: base_chain()
                .with(check_customer_fields(config.require_gun_safe_uploads))
                .with(validator_fn(check_review_unchanged)),
            reviewer_update: base_chain().with(validator_fn(check_review_outcome)),
        }
    }

    /// Customer edits are what the customer submitted.
    fn after_merge(&mut self, actor: &Actor) {
        if actor.is_customer() {
            self.submitted_weight = self.weight;
            self.submitted_has_weight_tickets = self.has_weight_tickets;
        }
    }
}
