//! Footprint module - annual emission calculation and presentation insights.
//!
//! # Components
//!
//! - `FootprintCalculator` - pure function from survey + factors to emissions
//! - `EmissionBreakdown` / `FootprintResult` - unrounded and rounded outputs
//! - `flights` - round-trip, radiative-forcing-adjusted flight allocation
//! - `FootprintInsights` - category shares, regional comparison, carbon budget

mod calculator;
pub mod flights;
mod insights;
mod result;

pub use calculator::{
    renewable_discount, FootprintCalculator, BASELINE_FOOD_TONNES, RENEWABLE_DISCOUNT_CAP,
    RENEWABLE_DISCOUNT_PER_SOURCE,
};
pub use insights::{
    compare_to_average, regional_average, AverageComparison, CategoryShares, FootprintInsights,
    CARBON_BUDGET_TONNES, GLOBAL_AVERAGE_TONNES,
};
pub use result::{round_tenth, EmissionBreakdown, FootprintResult};
