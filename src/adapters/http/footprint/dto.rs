//! HTTP DTOs for footprint endpoints.
//!
//! `SurveyPayload` is the flat camelCase survey body. Converting it into a
//! `SurveyInput` is the single place where raw strings become typed answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::domain::footprint::{FootprintInsights, FootprintResult};
use crate::domain::foundation::{SubmissionId, ValidationError};
use crate::domain::recommendation::Recommendation;
use crate::domain::survey::{
    CalculationType, HomeProfile, Location, SurveyInput, TransportProfile,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Flat survey body as submitted by the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity_usage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_usage: Option<f64>,
    #[serde(default)]
    pub renewable_sources: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_transport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_efficiency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_mileage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_bus_rides: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_commute_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_bike_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_walking_miles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_flights: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_flights: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_flight_distance: Option<f64>,
}

/// Request for recommendations on an already-calculated footprint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub footprint_data: SurveyPayload,
    #[serde(default)]
    pub total_emissions: f64,
    #[serde(default)]
    pub home_emissions: f64,
    #[serde(default)]
    pub transport_emissions: f64,
    #[serde(default)]
    pub food_emissions: f64,
}

impl RecommendationsRequest {
    pub fn footprint(&self) -> FootprintResult {
        FootprintResult::new(
            self.total_emissions,
            self.home_emissions,
            self.transport_emissions,
            self.food_emissions,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a footprint calculation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateFootprintResponse {
    pub submission_id: String,
    #[serde(flatten)]
    pub result: FootprintResult,
    pub insights: FootprintInsights,
}

impl CalculateFootprintResponse {
    pub fn new(submission_id: SubmissionId, result: FootprintResult, insights: FootprintInsights) -> Self {
        Self {
            submission_id: submission_id.to_string(),
            result,
            insights,
        }
    }
}

/// Response carrying generated recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

// ════════════════════════════════════════════════════════════════════════════
// Conversion
// ════════════════════════════════════════════════════════════════════════════

/// Blank strings count as absent; anything else must be a known value.
fn parse_choice<T>(raw: Option<&str>) -> Result<Option<T>, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

/// Whole, non-negative count.
fn parse_count(field: &str, raw: Option<f64>) -> Result<Option<u32>, ValidationError> {
    let Some(value) = raw else {
        return Ok(None);
    };
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::negative_or_non_finite(field, value));
    }
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ValidationError::invalid_format(field, "must be a whole number"));
    }
    Ok(Some(value as u32))
}

impl TryFrom<SurveyPayload> for SurveyInput {
    type Error = ValidationError;

    fn try_from(payload: SurveyPayload) -> Result<Self, Self::Error> {
        let renewable_sources: BTreeSet<String> = payload
            .renewable_sources
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let survey = SurveyInput {
            calculation_type: parse_choice::<CalculationType>(payload.calculation_type.as_deref())?
                .unwrap_or_default(),
            location: Location::parse(payload.location.as_deref())?,
            household_size: parse_count("householdSize", payload.household_size)?
                .filter(|n| *n > 0),
            income_range: parse_choice(payload.income_range.as_deref())?,
            home: HomeProfile {
                home_type: parse_choice(payload.home_type.as_deref())?,
                home_size: payload.home_size,
                home_unit: parse_choice(payload.home_unit.as_deref())?,
                electricity_usage: payload.electricity_usage,
                gas_usage: payload.gas_usage,
                renewable_sources,
            },
            transport: TransportProfile {
                primary_transport: parse_choice(payload.primary_transport.as_deref())?,
                car_type: parse_choice(payload.car_type.as_deref())?,
                fuel_efficiency: payload.fuel_efficiency,
                annual_mileage: payload.annual_mileage,
                weekly_bus_rides: payload.weekly_bus_rides,
                avg_commute_distance: payload.avg_commute_distance,
                weekly_bike_miles: payload.weekly_bike_miles,
                weekly_walking_miles: payload.weekly_walking_miles,
                short_flights: parse_count("shortFlights", payload.short_flights)?,
                long_flights: parse_count("longFlights", payload.long_flights)?,
                avg_flight_distance: payload.avg_flight_distance,
            },
        };

        survey.validate()?;
        Ok(survey)
    }
}

impl From<&SurveyInput> for SurveyPayload {
    fn from(survey: &SurveyInput) -> Self {
        let home = &survey.home;
        let transport = &survey.transport;
        Self {
            calculation_type: Some(survey.calculation_type.to_string()),
            location: Some(survey.location.to_string()),
            household_size: survey.household_size.map(f64::from),
            income_range: survey.income_range.map(|v| v.to_string()),
            home_type: home.home_type.map(|v| v.to_string()),
            home_size: home.home_size,
            home_unit: home.home_unit.map(|v| v.to_string()),
            electricity_usage: home.electricity_usage,
            gas_usage: home.gas_usage,
            renewable_sources: home.renewable_sources.iter().cloned().collect(),
            primary_transport: transport.primary_transport.map(|v| v.to_string()),
            car_type: transport.car_type.map(|v| v.to_string()),
            fuel_efficiency: transport.fuel_efficiency,
            annual_mileage: transport.annual_mileage,
            weekly_bus_rides: transport.weekly_bus_rides,
            avg_commute_distance: transport.avg_commute_distance,
            weekly_bike_miles: transport.weekly_bike_miles,
            weekly_walking_miles: transport.weekly_walking_miles,
            short_flights: transport.short_flights.map(f64::from),
            long_flights: transport.long_flights.map(f64::from),
            avg_flight_distance: transport.avg_flight_distance,
        }
    }
}
