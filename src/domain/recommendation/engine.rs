//! Recommendation Engine - static rules over a footprint and its survey.
//!
//! Each rule appends at most one recommendation (rule 4 may append two) and
//! never touches another rule's output. Evaluation order is display order.

use crate::domain::footprint::FootprintResult;
use crate::domain::survey::{PrimaryTransport, SurveyInput, GREEN_ENERGY_SOURCE};

use super::catalog::{
    ALTERNATIVE_TRANSPORT, CARPOOL_OR_TRANSIT, CONSOLIDATE_TRAVEL, OFFSET_LONG_HAUL,
    PLANT_RICH_DIET, REDUCE_FOOD_WASTE, REDUCE_SHORT_HAUL, RENEWABLE_ENERGY, THERMOSTAT,
};
use super::record::Recommendation;

/// Home emissions above which heating/cooling advice is given, tonnes.
pub const HOME_EMISSIONS_THRESHOLD: f64 = 2.0;

/// Transport emissions above which drivers get carpool advice, tonnes.
pub const CAR_TRANSPORT_THRESHOLD: f64 = 2.0;

/// Food emissions above which diet advice is given, tonnes.
pub const FOOD_EMISSIONS_THRESHOLD: f64 = 1.5;

/// Frequent-flyer thresholds (strictly greater than).
pub const FREQUENT_SHORT_FLIGHTS: u32 = 5;
pub const FREQUENT_LONG_FLIGHTS: u32 = 2;

/// Short flights above which short-haul advice is given.
pub const SHORT_HAUL_ADVICE_FLIGHTS: u32 = 3;

/// Rule-based recommendation generator.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Evaluates every rule in order. Never empty: food waste advice is
    /// unconditional.
    pub fn generate(result: &FootprintResult, input: &SurveyInput) -> Vec<Recommendation> {
        let transport = &input.transport;
        let short_flights = transport.short_flight_count();
        let long_flights = transport.long_flight_count();
        let mut recommendations = Vec::new();

        if result.home_emissions > HOME_EMISSIONS_THRESHOLD {
            recommendations.push(THERMOSTAT.to_recommendation());
        }

        if !input.home.has_renewable_source(GREEN_ENERGY_SOURCE) {
            recommendations.push(RENEWABLE_ENERGY.to_recommendation());
        }

        if transport.is_primary(PrimaryTransport::Car)
            && result.transport_emissions > CAR_TRANSPORT_THRESHOLD
        {
            recommendations.push(CARPOOL_OR_TRANSIT.to_recommendation());
        }

        if transport.is_primary(PrimaryTransport::Flight) {
            recommendations.push(ALTERNATIVE_TRANSPORT.to_recommendation());
            if short_flights > FREQUENT_SHORT_FLIGHTS || long_flights > FREQUENT_LONG_FLIGHTS {
                recommendations.push(CONSOLIDATE_TRAVEL.to_recommendation());
            }
        }

        if long_flights > 0 {
            recommendations.push(OFFSET_LONG_HAUL.to_recommendation());
        } else if short_flights > SHORT_HAUL_ADVICE_FLIGHTS {
            recommendations.push(REDUCE_SHORT_HAUL.to_recommendation());
        }

        recommendations.push(REDUCE_FOOD_WASTE.to_recommendation());

        if result.food_emissions > FOOD_EMISSIONS_THRESHOLD {
            recommendations.push(PLANT_RICH_DIET.to_recommendation());
        }

        recommendations
    }
}
