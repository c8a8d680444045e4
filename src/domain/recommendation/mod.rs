//! Recommendation module - rule-based reduction advice.

mod catalog;
mod engine;
mod record;

pub use catalog::{RecommendationTemplate, ALL_TEMPLATES};
pub use engine::{
    RecommendationEngine, CAR_TRANSPORT_THRESHOLD, FOOD_EMISSIONS_THRESHOLD,
    FREQUENT_LONG_FLIGHTS, FREQUENT_SHORT_FLIGHTS, HOME_EMISSIONS_THRESHOLD,
    SHORT_HAUL_ADVICE_FLIGHTS,
};
pub use record::{Recommendation, RecommendationCategory};
