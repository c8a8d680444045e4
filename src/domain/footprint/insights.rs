//! Footprint insights - presentation figures derived from a rounded result.
//!
//! Nothing here feeds back into the calculation. Division by a zero total
//! is handled here rather than in the calculator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::survey::Location;

use super::result::FootprintResult;

/// Annual per-person carbon budget consistent with 1.5°C, tonnes CO2e.
pub const CARBON_BUDGET_TONNES: f64 = 2.5;

/// Fallback per-person average for locations without a published figure.
pub const GLOBAL_AVERAGE_TONNES: f64 = 12.0;

/// Per-person annual average for a location, tonnes CO2e.
pub fn regional_average(location: &Location) -> f64 {
    match location.as_str() {
        "us" => 16.0,
        "uk" => 10.0,
        "ca" => 14.2,
        "au" => 15.5,
        "in" => 1.9,
        _ => GLOBAL_AVERAGE_TONNES,
    }
}

/// Share of the total contributed by each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShares {
    pub home: Percentage,
    pub transport: Percentage,
    pub food: Percentage,
}

/// How a footprint compares with the regional per-person average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageComparison {
    pub regional_average: f64,
    /// Magnitude of the difference, percent of the average.
    pub percent_difference: u32,
    pub below_average: bool,
}

/// Presentation figures for a footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintInsights {
    pub shares: CategoryShares,
    pub comparison: AverageComparison,
    pub carbon_budget_used: Percentage,
}

impl FootprintInsights {
    pub fn compute(result: &FootprintResult, location: &Location) -> Self {
        let total = result.total_emissions;
        Self {
            shares: CategoryShares {
                home: Percentage::from_ratio(result.home_emissions, total),
                transport: Percentage::from_ratio(result.transport_emissions, total),
                food: Percentage::from_ratio(result.food_emissions, total),
            },
            comparison: compare_to_average(total, location),
            carbon_budget_used: Percentage::from_ratio(total, CARBON_BUDGET_TONNES),
        }
    }
}

pub fn compare_to_average(total: f64, location: &Location) -> AverageComparison {
    let average = regional_average(location);
    let difference = average - total;
    let percent = (difference / average * 100.0).round();
    AverageComparison {
        regional_average: average,
        percent_difference: percent.abs() as u32,
        below_average: difference > 0.0,
    }
}
