//! Mobile homes.

use haul_core::FieldErrors;
use haul_merge::{merge_option, Merge};
use haul_models::{MobileHome, ShipmentType};
use haul_validation::{check_id, check_link, validator_fn, Validator, ValidatorChain};

use crate::config::ServiceConfig;
use crate::entity::{dependent_accessors, DependentEntity, Rules};
use crate::rules::{check_parent_type, RuleContext, Vehicle};
use crate::service::DependentService;

pub type MobileHomeService = DependentService<MobileHome>;

/// Partial update of a mobile home; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MobileHomeUpdate {
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub length_in_inches: Option<i32>,
    pub width_in_inches: Option<i32>,
    pub height_in_inches: Option<i32>,
}

impl Merge<MobileHome> for MobileHomeUpdate {
    fn merge(&self, old: &MobileHome) -> MobileHome {
        MobileHome {
            year: merge_option(&self.year, &old.year),
            make: merge_option(&self.make, &old.make),
            model: merge_option(&self.model, &old.model),
            length_in_inches: merge_option(&self.length_in_inches, &old.length_in_inches),
            width_in_inches: merge_option(&self.width_in_inches, &old.width_in_inches),
            height_in_inches: merge_option(&self.height_in_inches, &old.height_in_inches),
            ..old.clone()
        }
    }
}

fn check_required_fields(config: &ServiceConfig) -> impl Validator<MobileHome, RuleContext> {
    let (min_year, max_years_ahead) = (config.min_year, config.max_years_ahead);
    validator_fn(move |home: &MobileHome, _: Option<&MobileHome>, ctx: &RuleContext| {
        let mut errors = FieldErrors::new();
        Vehicle {
            year: home.year,
            make: home.make.as_deref(),
            model: home.model.as_deref(),
            length_in_inches: home.length_in_inches,
            width_in_inches: home.width_in_inches,
            height_in_inches: home.height_in_inches,
        }
        .check(&mut errors, min_year, max_years_ahead, ctx.current_year);
        Ok(errors)
    })
}

fn chain(config: &ServiceConfig) -> ValidatorChain<MobileHome, RuleContext> {
    ValidatorChain::new(MobileHome::SUBJECT)
        .with(check_id())
        .with(check_link::<MobileHome>("shipment_id", |home| home.shipment_id))
        .with(check_parent_type(&[ShipmentType::MobileHome]))
        .with(check_required_fields(config))
}

impl DependentEntity for MobileHome {
    const SUBJECT: &'static str = "mobile home";

    type Update = MobileHomeUpdate;

    dependent_accessors!();

    fn rules(config: &ServiceConfig) -> Rules<Self> {
        Rules {
            create: chain(config),
            customer_update: chain(config),
            reviewer_update: chain(config),
        }
    }
}
