//! Footprint command and query handlers.

mod assess_footprint;
mod calculate_footprint;
mod generate_recommendations;

pub use assess_footprint::{AssessFootprintCommand, AssessFootprintHandler, AssessFootprintResult};
pub use calculate_footprint::{
    CalculateFootprintCommand, CalculateFootprintHandler, CalculateFootprintResult,
};
pub use generate_recommendations::{GenerateRecommendationsHandler, GenerateRecommendationsQuery};
