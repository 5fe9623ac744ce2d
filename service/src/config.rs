//! Service configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Minimum boat dimensions, in inches. A boat qualifies when at least one
/// dimension is strictly greater than its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoatThresholds {
    pub length_in_inches: i32,
    pub width_in_inches: i32,
    pub height_in_inches: i32,
}

impl Default for BoatThresholds {
    fn default() -> Self {
        Self {
            length_in_inches: 168,
            width_in_inches: 82,
            height_in_inches: 77,
        }
    }
}

impl BoatThresholds {
    pub fn new(length_in_inches: i32, width_in_inches: i32, height_in_inches: i32) -> Self {
        Self {
            length_in_inches,
            width_in_inches,
            height_in_inches,
        }
    }

    pub fn is_eligible(&self, length: i32, width: i32, height: i32) -> bool {
        length > self.length_in_inches
            || width > self.width_in_inches
            || height > self.height_in_inches
    }
}

/// Tunables for the dependent-entity rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Boat eligibility thresholds
    pub boat_thresholds: BoatThresholds,
    /// Oldest accepted model year
    pub min_year: i32,
    /// How many years past the current one a model year may be
    pub max_years_ahead: i32,
    /// Gun-safe customer updates need at least one live upload
    pub require_gun_safe_uploads: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            boat_thresholds: BoatThresholds::default(),
            min_year: 1700,
            max_years_ahead: 2,
            require_gun_safe_uploads: true,
        }
    }
}

impl ServiceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_boat_thresholds(mut self, thresholds: BoatThresholds) -> Self {
        self.boat_thresholds = thresholds;
        self
    }

    pub fn with_min_year(mut self, year: i32) -> Self {
        self.min_year = year;
        self
    }

    pub fn with_max_years_ahead(mut self, years: i32) -> Self {
        self.max_years_ahead = years;
        self
    }

    pub fn with_gun_safe_uploads_required(mut self, required: bool) -> Self {
        self.require_gun_safe_uploads = required;
        self
    }

    /// Defaults without the gun-safe upload requirement, for hosts that
    /// collect uploads in a later step.
    pub fn lenient() -> Self {
        Self {
            require_gun_safe_uploads: false,
            ..Self::default()
        }
    }

    /// Parse and check a JSON document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn check(&self) -> ConfigResult<()> {
        let thresholds = &self.boat_thresholds;
        for (field, value) in [
            ("boat_thresholds.length_in_inches", thresholds.length_in_inches),
            ("boat_thresholds.width_in_inches", thresholds.width_in_inches),
            ("boat_thresholds.height_in_inches", thresholds.height_in_inches),
        ] {
            if value < 0 {
                return Err(ConfigError::invalid(field, format!("{value} is negative")));
            }
        }
        if self.max_years_ahead < 0 {
            return Err(ConfigError::invalid(
                "max_years_ahead",
                format!("{} is negative", self.max_years_ahead),
            ));
        }
        Ok(())
    }

    /// Newest accepted model year.
    pub fn max_year(&self, current_year: i32) -> i32 {
        current_year.saturating_add(self.max_years_ahead)
    }
}
