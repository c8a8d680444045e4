//! Footprint Calculator - turns a survey response into annual emissions.
//!
//! Pure and synchronous: every factor comes from an already-loaded
//! [`FactorLookup`] snapshot, and absent optional answers count as zero.

use crate::domain::emissions::{FactorCategory, FactorLookup};
use crate::domain::survey::{CarType, IncomeRange, PrimaryTransport, SurveyInput};

use super::flights::{primary_flight_emissions, secondary_flight_emissions, FlightFactors};
use super::result::{EmissionBreakdown, FootprintResult};

/// Food emissions when no household information is given, tonnes/year.
pub const BASELINE_FOOD_TONNES: f64 = 1.7;

/// Discount per declared renewable source.
pub const RENEWABLE_DISCOUNT_PER_SOURCE: f64 = 0.15;

/// Maximum combined renewable discount.
pub const RENEWABLE_DISCOUNT_CAP: f64 = 0.6;

const MONTHS_PER_YEAR: f64 = 12.0;
const WEEKS_PER_YEAR: f64 = 52.0;
const KG_PER_TONNE: f64 = 1000.0;

const HIGH_INCOME_FOOD_MULTIPLIER: f64 = 1.2;
const LOW_INCOME_FOOD_MULTIPLIER: f64 = 0.8;

/// Calculator for annual footprints.
pub struct FootprintCalculator;

impl FootprintCalculator {
    /// Computes the rounded footprint for a validated survey.
    pub fn calculate(factors: &impl FactorLookup, input: &SurveyInput) -> FootprintResult {
        Self::breakdown(factors, input).to_result()
    }

    /// Computes the unrounded per-category emissions.
    pub fn breakdown(factors: &impl FactorLookup, input: &SurveyInput) -> EmissionBreakdown {
        EmissionBreakdown {
            home: Self::home_emissions(factors, input),
            transport: Self::transport_emissions(factors, input),
            food: Self::food_emissions(factors, input),
        }
    }

    /// Electricity and gas, scaled by dwelling type, then discounted for
    /// renewable sources.
    pub fn home_emissions(factors: &impl FactorLookup, input: &SurveyInput) -> f64 {
        let home = &input.home;
        let mut emissions = 0.0;

        if let Some(kwh) = home.electricity_usage {
            let factor = factors.lookup(FactorCategory::Electricity, input.location.as_str());
            emissions += kwh * factor * MONTHS_PER_YEAR / KG_PER_TONNE;
        }

        if let Some(therms) = home.gas_usage {
            let factor = factors.lookup(FactorCategory::NaturalGas, "global");
            emissions += therms * factor * MONTHS_PER_YEAR / KG_PER_TONNE;
        }

        if let Some(home_type) = home.home_type {
            emissions *= factors.lookup(FactorCategory::Home, home_type.as_str());
        }

        emissions * (1.0 - renewable_discount(home.renewable_sources.len()))
    }

    /// Ground travel for the primary mode plus any secondary flights.
    ///
    /// Bike and walking contribute exactly zero, reported flights included.
    pub fn transport_emissions(factors: &impl FactorLookup, input: &SurveyInput) -> f64 {
        let transport = &input.transport;

        match transport.primary_transport {
            Some(PrimaryTransport::Bike) | Some(PrimaryTransport::Walking) => 0.0,
            Some(PrimaryTransport::Flight) => {
                primary_flight_emissions(transport, &FlightFactors::resolve(factors))
            }
            Some(PrimaryTransport::Car) => {
                let car_type = transport.car_type.unwrap_or(CarType::Sedan);
                let factor = factors.lookup(FactorCategory::Car, car_type.as_str());
                let ground = transport.annual_mileage.unwrap_or(0.0) * factor / KG_PER_TONNE;
                ground + Self::secondary_flights(factors, input)
            }
            Some(PrimaryTransport::PublicTransport) => {
                let factor = factors.lookup(FactorCategory::PublicTransport, "global");
                let miles = match (transport.weekly_bus_rides, transport.avg_commute_distance) {
                    (Some(rides), Some(distance)) if rides > 0.0 && distance > 0.0 => {
                        rides * distance * WEEKS_PER_YEAR
                    }
                    _ => transport.annual_mileage.unwrap_or(0.0),
                };
                miles * factor / KG_PER_TONNE + Self::secondary_flights(factors, input)
            }
            None => Self::secondary_flights(factors, input),
        }
    }

    fn secondary_flights(factors: &impl FactorLookup, input: &SurveyInput) -> f64 {
        let transport = &input.transport;
        if transport.short_flight_count() == 0 && transport.long_flight_count() == 0 {
            return 0.0;
        }
        secondary_flight_emissions(transport, &FlightFactors::resolve(factors))
    }

    /// Per-person food emissions; not scaled by household size.
    pub fn food_emissions(factors: &impl FactorLookup, input: &SurveyInput) -> f64 {
        if input.household_size.is_none() {
            return BASELINE_FOOD_TONNES;
        }

        let average = factors.lookup(FactorCategory::Food, "average");
        match input.income_range {
            Some(IncomeRange::High) => average * HIGH_INCOME_FOOD_MULTIPLIER,
            Some(IncomeRange::Low) => average * LOW_INCOME_FOOD_MULTIPLIER,
            _ => average,
        }
    }
}

/// Fractional home-emission discount for `sources` renewable sources.
pub fn renewable_discount(sources: usize) -> f64 {
    (RENEWABLE_DISCOUNT_PER_SOURCE * sources as f64).min(RENEWABLE_DISCOUNT_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emissions::{builtin_factors, EmissionFactorRegistry};
    use crate::domain::survey::{HomeType, Location};
    use std::collections::HashMap;

    fn registry() -> EmissionFactorRegistry {
        EmissionFactorRegistry::from_factors(builtin_factors())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn us_house_driver() -> SurveyInput {
        let mut input = SurveyInput {
            location: Location::new("us").unwrap(),
            household_size: Some(2),
            income_range: Some(IncomeRange::Medium),
            ..Default::default()
        };
        input.home.home_type = Some(HomeType::House);
        input.home.electricity_usage = Some(600.0);
        input.home.gas_usage = Some(80.0);
        input.transport.primary_transport = Some(PrimaryTransport::Car);
        input.transport.car_type = Some(CarType::Sedan);
        input.transport.annual_mileage = Some(12000.0);
        input
    }

    /// Fixed-value lookup used to isolate formulas from the seed table.
    struct Fixed(HashMap<(FactorCategory, &'static str), f64>);

    impl FactorLookup for Fixed {
        fn lookup(&self, category: FactorCategory, key: &str) -> f64 {
            self.0
                .iter()
                .find(|((c, k), _)| *c == category && *k == key)
                .map(|(_, v)| *v)
                .unwrap_or(0.0)
        }
    }

    #[test]
    fn us_house_with_car() {
        let breakdown = FootprintCalculator::breakdown(&registry(), &us_house_driver());
        assert!(approx(breakdown.home, 8.112));
        assert!(approx(breakdown.transport, 4.68));
        assert!(approx(breakdown.food, 1.7));

        let result = FootprintCalculator::calculate(&registry(), &us_house_driver());
        assert_eq!(result.home_emissions, 8.1);
        assert_eq!(result.transport_emissions, 4.7);
        assert_eq!(result.food_emissions, 1.7);
        assert_eq!(result.total_emissions, 14.5);
    }

    #[test]
    fn two_renewable_sources_discount_thirty_percent() {
        let mut input = us_house_driver();
        input.home.renewable_sources.insert("solar".to_string());
        input.home.renewable_sources.insert("wind".to_string());

        let home = FootprintCalculator::home_emissions(&registry(), &input);
        assert!(approx(home, 8.112 * 0.7));
        assert_eq!(FootprintCalculator::calculate(&registry(), &input).home_emissions, 5.7);
    }

    #[test]
    fn renewable_discount_is_capped() {
        assert_eq!(renewable_discount(0), 0.0);
        assert!(approx(renewable_discount(1), 0.15));
        assert_eq!(renewable_discount(4), 0.6);
        assert_eq!(renewable_discount(9), 0.6);
    }

    #[test]
    fn home_type_multiplies_the_summed_energy() {
        let mut input = us_house_driver();
        input.home.home_type = Some(HomeType::Apartment);
        let home = FootprintCalculator::home_emissions(&registry(), &input);
        assert!(approx(home, 8.112 * 0.75));
    }

    #[test]
    fn unknown_region_falls_back_to_global_electricity() {
        let mut input = SurveyInput::default();
        input.location = Location::new("zz").unwrap();
        input.home.electricity_usage = Some(100.0);
        let home = FootprintCalculator::home_emissions(&registry(), &input);
        assert!(approx(home, 100.0 * 0.475 * 12.0 / 1000.0));
    }

    #[test]
    fn bike_and_walking_are_zero() {
        for mode in [PrimaryTransport::Bike, PrimaryTransport::Walking] {
            let mut input = us_house_driver();
            input.transport.primary_transport = Some(mode);
            input.transport.weekly_bike_miles = Some(50.0);
            input.transport.short_flights = Some(4);
            input.transport.long_flights = Some(2);
            let breakdown = FootprintCalculator::breakdown(&registry(), &input);
            assert_eq!(breakdown.transport, 0.0);
        }
    }

    #[test]
    fn flight_primary_short_haul() {
        let mut input = SurveyInput::default();
        input.transport.primary_transport = Some(PrimaryTransport::Flight);
        input.transport.short_flights = Some(3);
        input.transport.long_flights = Some(0);
        input.transport.avg_flight_distance = Some(500.0);

        let result = FootprintCalculator::calculate(&registry(), &input);
        assert_eq!(result.transport_emissions, 1.6);
    }

    #[test]
    fn car_defaults_to_sedan() {
        let mut input = us_house_driver();
        input.transport.car_type = None;
        let transport = FootprintCalculator::transport_emissions(&registry(), &input);
        assert!(approx(transport, 4.68));
    }

    #[test]
    fn car_adds_secondary_flights_at_standard_distance() {
        let mut input = us_house_driver();
        input.transport.short_flights = Some(2);
        input.transport.avg_flight_distance = Some(900.0);
        let transport = FootprintCalculator::transport_emissions(&registry(), &input);
        let flights = 2.0 * 0.28 * 500.0 * 2.0 * 1.9 / 1000.0;
        assert!(approx(transport, 4.68 + flights));
    }

    #[test]
    fn public_transport_weekly_rides() {
        let mut input = SurveyInput::default();
        input.transport.primary_transport = Some(PrimaryTransport::PublicTransport);
        input.transport.weekly_bus_rides = Some(10.0);
        input.transport.avg_commute_distance = Some(5.0);

        let lookup = Fixed(HashMap::from([((FactorCategory::PublicTransport, "global"), 0.2)]));
        let transport = FootprintCalculator::transport_emissions(&lookup, &input);
        assert!(approx(transport, 10.0 * 5.0 * 52.0 * 0.2 / 1000.0));
    }

    #[test]
    fn public_transport_falls_back_to_annual_mileage() {
        let mut input = SurveyInput::default();
        input.transport.primary_transport = Some(PrimaryTransport::PublicTransport);
        input.transport.weekly_bus_rides = Some(10.0);
        input.transport.annual_mileage = Some(4000.0);

        let transport = FootprintCalculator::transport_emissions(&registry(), &input);
        assert!(approx(transport, 4000.0 * 0.16 / 1000.0));
    }

    #[test]
    fn no_primary_mode_still_counts_flights() {
        let mut input = SurveyInput::default();
        input.transport.long_flights = Some(1);
        let transport = FootprintCalculator::transport_emissions(&registry(), &input);
        assert!(approx(transport, 0.18 * 2500.0 * 2.0 * 1.9 / 1000.0));
    }

    #[test]
    fn food_baseline_without_household() {
        let input = SurveyInput {
            income_range: Some(IncomeRange::High),
            ..Default::default()
        };
        assert_eq!(FootprintCalculator::food_emissions(&registry(), &input), 1.7);
    }

    #[test]
    fn food_scales_with_income_not_household() {
        let high = SurveyInput {
            household_size: Some(3),
            income_range: Some(IncomeRange::High),
            ..Default::default()
        };
        assert!(approx(FootprintCalculator::food_emissions(&registry(), &high), 2.04));
        assert_eq!(FootprintCalculator::calculate(&registry(), &high).food_emissions, 2.0);

        let low = SurveyInput {
            household_size: Some(1),
            income_range: Some(IncomeRange::Low),
            ..Default::default()
        };
        assert!(approx(FootprintCalculator::food_emissions(&registry(), &low), 1.36));
    }

    #[test]
    fn empty_survey_is_baseline_food_only() {
        let result = FootprintCalculator::calculate(&registry(), &SurveyInput::default());
        assert_eq!(result, FootprintResult::new(1.7, 0.0, 0.0, 1.7));
    }
}
