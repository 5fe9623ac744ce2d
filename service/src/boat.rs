//! Boat shipments.

use haul_core::{messages, AppResult, FieldErrors};
use haul_merge::{merge_option, Merge};
use haul_models::{BoatShipment, BoatType, ShipmentType};
use haul_validation::checks::require_present;
use haul_validation::{check_id, check_link, validator_fn, Validator, ValidatorChain};

use crate::config::{BoatThresholds, ServiceConfig};
use crate::entity::{dependent_accessors, DependentEntity, Rules};
use crate::rules::{check_parent_type, RuleContext, Vehicle};
use crate::service::DependentService;

pub type BoatShipmentService = DependentService<BoatShipment>;

const BOAT_SHIPMENT_TYPES: &[ShipmentType] =
    &[ShipmentType::BoatHaulAway, ShipmentType::BoatTowAway];

/// Partial update of a boat shipment; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoatShipmentUpdate {
    pub boat_type: Option<BoatType>,
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub length_in_inches: Option<i32>,
    pub width_in_inches: Option<i32>,
    pub height_in_inches: Option<i32>,
    pub has_trailer: Option<bool>,
    pub is_roadworthy: Option<bool>,
}

impl Merge<BoatShipment> for BoatShipmentUpdate {
    fn merge(&self, old: &BoatShipment) -> BoatShipment {
        let mut merged = old.clone();
        merged.boat_type = merge_option(&self.boat_type, &old.boat_type);
        merged.year = merge_option(&self.year, &old.year);
        merged.make = merge_option(&self.make, &old.make);
        merged.model = merge_option(&self.model, &old.model);
        merged.length_in_inches = merge_option(&self.length_in_inches, &old.length_in_inches);
        merged.width_in_inches = merge_option(&self.width_in_inches, &old.width_in_inches);
        merged.height_in_inches = merge_option(&self.height_in_inches, &old.height_in_inches);
        merged.has_trailer = merge_option(&self.has_trailer, &old.has_trailer);
        merged.is_roadworthy = merge_option(&self.is_roadworthy, &old.is_roadworthy);

        // No trailer, no roadworthiness.
        if self.has_trailer == Some(false) {
            merged.is_roadworthy = None;
        }
        merged
    }
}

fn check_boat_type(
    boat: &BoatShipment,
    _: Option<&BoatShipment>,
    ctx: &RuleContext,
) -> AppResult<FieldErrors> {
    let mut errors = FieldErrors::new();
    require_present(&mut errors, "boat_type", &boat.boat_type);
    if let (Some(boat_type), Some(parent)) = (boat.boat_type, ctx.parent) {
        if parent.shipment_type.is_boat() && boat_type.shipment_type() != parent.shipment_type {
            errors.add("boat_type", messages::ERR_BOAT_TYPE_MISMATCH);
        }
    }
    Ok(errors)
}

fn check_trailer(
    boat: &BoatShipment,
    _: Option<&BoatShipment>,
    _: &RuleContext,
) -> AppResult<FieldErrors> {
    let mut errors = FieldErrors::new();
    match boat.has_trailer {
        None => errors.add("has_trailer", messages::ERR_REQUIRED),
        Some(true) if boat.is_roadworthy.is_none() => {
            errors.add("is_roadworthy", messages::ERR_ROADWORTHY_REQUIRED)
        }
        Some(_) => {}
    }
    Ok(errors)
}

/// Required vehicle fields with the configured year window.
fn check_required_fields(config: &ServiceConfig) -> impl Validator<BoatShipment, RuleContext> {
    let (min_year, max_years_ahead) = (config.min_year, config.max_years_ahead);
    validator_fn(move |boat: &BoatShipment, _: Option<&BoatShipment>, ctx: &RuleContext| {
        let mut errors = FieldErrors::new();
        Vehicle {
            year: boat.year,
            make: boat.make.as_deref(),
            model: boat.model.as_deref(),
            length_in_inches: boat.length_in_inches,
            width_in_inches: boat.width_in_inches,
            height_in_inches: boat.height_in_inches,
        }
        .check(&mut errors, min_year, max_years_ahead, ctx.current_year);
        Ok(errors)
    })
}

/// At least one dimension must exceed its threshold. Runs only once all
/// three dimensions are known.
pub fn check_boat_eligibility(
    thresholds: BoatThresholds,
) -> impl Validator<BoatShipment, RuleContext> {
    validator_fn(move |boat: &BoatShipment, _: Option<&BoatShipment>, _: &RuleContext| {
        let mut errors = FieldErrors::new();
        if let (Some(length), Some(width), Some(height)) =
            (boat.length_in_inches, boat.width_in_inches, boat.height_in_inches)
        {
            if !thresholds.is_eligible(length, width, height) {
                for field in ["length_in_inches", "width_in_inches", "height_in_inches"] {
                    errors.add(field, messages::ERR_BOAT_TOO_SMALL);
                }
            }
        }
        Ok(errors)
    })
}

fn chain(config: &ServiceConfig) -> ValidatorChain<BoatShipment, RuleContext> {
    ValidatorChain::new(BoatShipment::SUBJECT)
        .with(check_id())
        .with(check_link::<BoatShipment>("shipment_id", |boat| boat.shipment_id))
        .with(check_parent_type(BOAT_SHIPMENT_TYPES))
        .with(validator_fn(check_boat_type))
        .with(check_required_fields(config))
        .with(validator_fn(check_trailer))
        .with(check_boat_eligibility(config.boat_thresholds))
}

impl DependentEntity for BoatShipment {
    const SUBJECT: &'static str = "boat shipment";

    type Update = BoatShipmentUpdate;

    dependent_accessors!();

    fn rules(config: &ServiceConfig) -> Rules<Self> {
        Rules {
            create: chain(config),
            customer_update: chain(config),
            reviewer_update: chain(config),
        }
    }
}
