//! Survey input - the caller's self-reported lifestyle answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::location::Location;
use super::macros::survey_enum;
use crate::domain::foundation::ValidationError;

survey_enum! {
    /// Whether the footprint is for a person or an organisation.
    CalculationType, field = "calculationType" {
        Individual => "individual",
        Business => "business",
    }
}

impl Default for CalculationType {
    fn default() -> Self {
        CalculationType::Individual
    }
}

survey_enum! {
    /// Dwelling type; selects the home energy multiplier.
    HomeType, field = "homeType" {
        Apartment => "apartment",
        House => "house",
        Other => "other",
    }
}

survey_enum! {
    HomeUnit, field = "homeUnit" {
        SquareFeet => "sqft",
        SquareMeters => "sqm",
    }
}

survey_enum! {
    /// Mode used for most day-to-day travel.
    PrimaryTransport, field = "primaryTransport" {
        Car => "car",
        PublicTransport => "publicTransport",
        Bike => "bike",
        Walking => "walking",
        Flight => "flight",
    }
}

survey_enum! {
    CarType, field = "carType" {
        Sedan => "sedan",
        Suv => "suv",
        Truck => "truck",
        Hybrid => "hybrid",
        Electric => "electric",
    }
}

survey_enum! {
    /// Household income bracket; only `low` and `high` move food emissions.
    IncomeRange, field = "incomeRange" {
        Low => "low",
        MediumLow => "medium-low",
        Medium => "medium",
        MediumHigh => "medium-high",
        High => "high",
        PreferNot => "prefer-not",
    }
}

/// Renewable source name that marks a green-tariff electricity supply.
pub const GREEN_ENERGY_SOURCE: &str = "greenEnergy";

/// Home energy answers. Usage figures are monthly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeProfile {
    pub home_type: Option<HomeType>,
    pub home_size: Option<f64>,
    pub home_unit: Option<HomeUnit>,
    /// kWh per month.
    pub electricity_usage: Option<f64>,
    /// therms per month.
    pub gas_usage: Option<f64>,
    #[serde(default)]
    pub renewable_sources: BTreeSet<String>,
}

impl HomeProfile {
    pub fn has_renewable_source(&self, source: &str) -> bool {
        self.renewable_sources.contains(source)
    }
}

/// Travel answers. Distances are in miles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportProfile {
    pub primary_transport: Option<PrimaryTransport>,
    pub car_type: Option<CarType>,
    pub fuel_efficiency: Option<f64>,
    pub annual_mileage: Option<f64>,
    pub weekly_bus_rides: Option<f64>,
    pub avg_commute_distance: Option<f64>,
    pub weekly_bike_miles: Option<f64>,
    pub weekly_walking_miles: Option<f64>,
    /// Round trips per year.
    pub short_flights: Option<u32>,
    /// Round trips per year.
    pub long_flights: Option<u32>,
    pub avg_flight_distance: Option<f64>,
}

impl TransportProfile {
    pub fn is_primary(&self, mode: PrimaryTransport) -> bool {
        self.primary_transport == Some(mode)
    }

    pub fn short_flight_count(&self) -> u32 {
        self.short_flights.unwrap_or(0)
    }

    pub fn long_flight_count(&self) -> u32 {
        self.long_flights.unwrap_or(0)
    }
}

/// A complete, validated survey response.
///
/// Owned by the caller for the duration of a calculation; the calculator
/// and the recommendation engine only ever borrow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyInput {
    #[serde(default)]
    pub calculation_type: CalculationType,
    #[serde(default)]
    pub location: Location,
    pub household_size: Option<u32>,
    pub income_range: Option<IncomeRange>,
    #[serde(default)]
    pub home: HomeProfile,
    #[serde(default)]
    pub transport: TransportProfile,
}

impl SurveyInput {
    /// Checks the numeric answers and the renewable source names.
    ///
    /// Enum answers and the location are already typed, so this only has to
    /// reject negative or non-finite quantities and empty names.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.household_size == Some(0) {
            return Err(ValidationError::out_of_range(
                "householdSize",
                1,
                i64::from(u32::MAX),
                0,
            ));
        }

        let quantities = [
            ("homeSize", self.home.home_size),
            ("electricityUsage", self.home.electricity_usage),
            ("gasUsage", self.home.gas_usage),
            ("fuelEfficiency", self.transport.fuel_efficiency),
            ("annualMileage", self.transport.annual_mileage),
            ("weeklyBusRides", self.transport.weekly_bus_rides),
            ("avgCommuteDistance", self.transport.avg_commute_distance),
            ("weeklyBikeMiles", self.transport.weekly_bike_miles),
            ("weeklyWalkingMiles", self.transport.weekly_walking_miles),
            ("avgFlightDistance", self.transport.avg_flight_distance),
        ];
        for (field, value) in quantities {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(ValidationError::negative_or_non_finite(field, v));
                }
            }
        }

        if self.home.renewable_sources.iter().any(|s| s.trim().is_empty()) {
            return Err(ValidationError::empty_field("renewableSources"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_parse_wire_strings() {
        assert_eq!("publicTransport".parse::<PrimaryTransport>().unwrap(), PrimaryTransport::PublicTransport);
        assert_eq!("medium-high".parse::<IncomeRange>().unwrap(), IncomeRange::MediumHigh);
        assert_eq!(" sqm ".parse::<HomeUnit>().unwrap(), HomeUnit::SquareMeters);
    }

    #[test]
    fn unknown_enum_value_names_the_field() {
        let err = "hovercraft".parse::<PrimaryTransport>().unwrap_err();
        assert_eq!(err.field(), "primaryTransport");
        assert!(err.to_string().contains("publicTransport"));
    }

    #[test]
    fn enums_serialize_to_wire_strings() {
        assert_eq!(serde_json::to_string(&IncomeRange::PreferNot).unwrap(), "\"prefer-not\"");
        assert_eq!(CarType::Electric.to_string(), "electric");
    }

    #[test]
    fn default_survey_is_individual_and_global() {
        let survey = SurveyInput::default();
        assert_eq!(survey.calculation_type, CalculationType::Individual);
        assert!(survey.location.is_global());
        assert!(survey.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_usage() {
        let mut survey = SurveyInput::default();
        survey.home.gas_usage = Some(-1.0);
        let err = survey.validate().unwrap_err();
        assert_eq!(err.field(), "gasUsage");
    }

    #[test]
    fn validate_rejects_nan_distance() {
        let mut survey = SurveyInput::default();
        survey.transport.avg_flight_distance = Some(f64::NAN);
        assert!(survey.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_household() {
        let survey = SurveyInput {
            household_size: Some(0),
            ..Default::default()
        };
        assert_eq!(survey.validate().unwrap_err().field(), "householdSize");
    }

    #[test]
    fn validate_rejects_blank_renewable_source() {
        let mut survey = SurveyInput::default();
        survey.home.renewable_sources.insert(" ".to_string());
        assert!(survey.validate().is_err());
    }

    #[test]
    fn flight_counts_default_to_zero() {
        let transport = TransportProfile::default();
        assert_eq!(transport.short_flight_count(), 0);
        assert_eq!(transport.long_flight_count(), 0);
        assert!(!transport.is_primary(PrimaryTransport::Car));
    }
}
