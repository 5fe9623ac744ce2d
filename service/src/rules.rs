//! Rules shared by the dependent-entity variants.

use haul_core::{messages, FieldErrors};
use haul_models::ShipmentType;
use haul_validation::checks::{require_non_blank, require_positive, require_year_between};
use haul_validation::{validator_fn, Validator};

use crate::context::Actor;
use crate::resolver::ParentShipment;

/// Context handed to every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    /// The parent shipment, when the entity names one.
    pub parent: Option<ParentShipment>,
    pub actor: Actor,
    pub current_year: i32,
}

impl RuleContext {
    pub fn new(parent: Option<ParentShipment>, actor: Actor, current_year: i32) -> Self {
        Self {
            parent,
            actor,
            current_year,
        }
    }
}

/// The parent shipment must have one of the `allowed` types.
pub fn check_parent_type<E>(allowed: &'static [ShipmentType]) -> impl Validator<E, RuleContext> {
    validator_fn(move |_: &E, _: Option<&E>, ctx: &RuleContext| {
        let mut errors = FieldErrors::new();
        if let Some(parent) = ctx.parent {
            if !allowed.contains(&parent.shipment_type) {
                errors.add("shipment_id", messages::ERR_PARENT_TYPE);
            }
        }
        Ok(errors)
    })
}

/// Year, make, model and three positive dimensions.
pub(crate) struct Vehicle<'a> {
    pub year: Option<i32>,
    pub make: Option<&'a str>,
    pub model: Option<&'a str>,
    pub length_in_inches: Option<i32>,
    pub width_in_inches: Option<i32>,
    pub height_in_inches: Option<i32>,
}

impl Vehicle<'_> {
    /// Required-field checks, with the year bounded by
    /// `[min_year, current_year + max_years_ahead]`.
    pub fn check(
        &self,
        errors: &mut FieldErrors,
        min_year: i32,
        max_years_ahead: i32,
        current_year: i32,
    ) {
        require_year_between(
            errors,
            "year",
            self.year,
            min_year,
            current_year.saturating_add(max_years_ahead),
        );
        require_non_blank(errors, "make", self.make);
        require_non_blank(errors, "model", self.model);
        require_positive(errors, "length_in_inches", self.length_in_inches);
        require_positive(errors, "width_in_inches", self.width_in_inches);
        require_positive(errors, "height_in_inches", self.height_in_inches);
    }
}
