//! Footprint result types.

use serde::{Deserialize, Serialize};

/// Unrounded per-category emissions, tonnes CO2e per year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmissionBreakdown {
    pub home: f64,
    pub transport: f64,
    pub food: f64,
}

impl EmissionBreakdown {
    pub fn total(&self) -> f64 {
        self.home + self.transport + self.food
    }

    /// Rounds every field independently for presentation.
    pub fn to_result(&self) -> FootprintResult {
        FootprintResult {
            total_emissions: round_tenth(self.total()),
            home_emissions: round_tenth(self.home),
            transport_emissions: round_tenth(self.transport),
            food_emissions: round_tenth(self.food),
        }
    }
}

/// Annual footprint in tonnes CO2e, each figure rounded to one decimal.
///
/// The total is rounded from the unrounded sum, so it can differ from the
/// sum of the rounded parts by 0.1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintResult {
    pub total_emissions: f64,
    pub home_emissions: f64,
    pub transport_emissions: f64,
    pub food_emissions: f64,
}

impl FootprintResult {
    pub fn new(total: f64, home: f64, transport: f64, food: f64) -> Self {
        Self {
            total_emissions: total,
            home_emissions: home,
            transport_emissions: transport,
            food_emissions: food,
        }
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
