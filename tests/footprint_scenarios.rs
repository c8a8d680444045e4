//! End-to-end footprint scenarios and calculator properties.
//!
//! Runs the calculator and recommendation engine against the builtin factor
//! seed, the same snapshot the server starts with by default.

use proptest::prelude::*;

use ecotracker::domain::emissions::{builtin_factors, EmissionFactorRegistry};
use ecotracker::domain::footprint::{renewable_discount, FootprintCalculator, RENEWABLE_DISCOUNT_CAP};
use ecotracker::domain::recommendation::RecommendationEngine;
use ecotracker::domain::survey::{
    CarType, HomeType, IncomeRange, Location, PrimaryTransport, SurveyInput,
};

// =============================================================================
// Fixtures
// =============================================================================

fn registry() -> EmissionFactorRegistry {
    EmissionFactorRegistry::from_factors(builtin_factors())
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// US house, sedan driver, two-person medium-income household.
fn us_commuter() -> SurveyInput {
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

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn us_commuter_footprint() {
    let registry = registry();
    let input = us_commuter();

    let breakdown = FootprintCalculator::breakdown(&registry, &input);
    approx(breakdown.home, 8.112);
    approx(breakdown.transport, 4.68);
    approx(breakdown.food, 1.7);

    let result = FootprintCalculator::calculate(&registry, &input);
    assert_eq!(result.total_emissions, 14.5);
    assert_eq!(result.home_emissions, 8.1);
    assert_eq!(result.transport_emissions, 4.7);
    assert_eq!(result.food_emissions, 1.7);
}

#[test]
fn two_renewable_sources_take_thirty_percent_off_home() {
    let mut input = us_commuter();
    input.home.renewable_sources.insert("solar".to_string());
    input.home.renewable_sources.insert("wind".to_string());

    let breakdown = FootprintCalculator::breakdown(&registry(), &input);
    approx(breakdown.home, 8.112 * 0.7);
    assert_eq!(FootprintCalculator::calculate(&registry(), &input).home_emissions, 5.7);
}

#[test]
fn cyclist_has_zero_transport_even_with_mileage_and_flights() {
    let mut input = us_commuter();
    input.transport.primary_transport = Some(PrimaryTransport::Bike);
    input.transport.short_flights = Some(4);
    input.transport.long_flights = Some(2);

    let result = FootprintCalculator::calculate(&registry(), &input);
    assert_eq!(result.transport_emissions, 0.0);
}

#[test]
fn short_haul_flyer() {
    let mut input = SurveyInput::default();
    input.transport.primary_transport = Some(PrimaryTransport::Flight);
    input.transport.short_flights = Some(3);
    input.transport.long_flights = Some(0);
    input.transport.avg_flight_distance = Some(500.0);

    let breakdown = FootprintCalculator::breakdown(&registry(), &input);
    approx(breakdown.transport, 1.596);
    assert_eq!(breakdown.to_result().transport_emissions, 1.6);
}

#[test]
fn long_average_distance_caps_short_flights_at_500_miles() {
    let mut input = SurveyInput::default();
    input.transport.primary_transport = Some(PrimaryTransport::Flight);
    input.transport.short_flights = Some(1);
    input.transport.avg_flight_distance = Some(3000.0);

    let transport = FootprintCalculator::transport_emissions(&registry(), &input);
    approx(transport, 0.28 * 500.0 * 2.0 * 1.9 / 1000.0);
}

#[test]
fn high_income_food_is_not_scaled_by_household() {
    let input = SurveyInput {
        household_size: Some(3),
        income_range: Some(IncomeRange::High),
        ..Default::default()
    };

    let breakdown = FootprintCalculator::breakdown(&registry(), &input);
    approx(breakdown.food, 1.7 * 1.2);
    assert_eq!(breakdown.to_result().food_emissions, 2.0);
}

#[test]
fn us_commuter_recommendations() {
    let input = us_commuter();
    let result = FootprintCalculator::calculate(&registry(), &input);
    let ids: Vec<String> = RecommendationEngine::generate(&result, &input)
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec!["rec1", "rec2", "rec3", "rec5", "rec6"]);
}

#[test]
fn unknown_region_falls_back_to_global_electricity() {
    let mut input = SurveyInput {
        location: Location::new("zz").unwrap(),
        ..Default::default()
    };
    input.home.electricity_usage = Some(100.0);

    approx(
        FootprintCalculator::home_emissions(&registry(), &input),
        100.0 * 0.475 * 12.0 / 1000.0,
    );
}

// =============================================================================
// Properties
// =============================================================================

fn primary_transport() -> impl Strategy<Value = Option<PrimaryTransport>> {
    prop_oneof![
        Just(None),
        proptest::sample::select(PrimaryTransport::ALL).prop_map(Some),
    ]
}

fn survey() -> impl Strategy<Value = SurveyInput> {
    (
        (
            proptest::sample::select(vec!["global", "us", "uk", "ca", "au", "in", "zz"]),
            proptest::option::of(1u32..8),
            proptest::option::of(proptest::sample::select(IncomeRange::ALL)),
            proptest::option::of(proptest::sample::select(HomeType::ALL)),
            proptest::option::of(0.0f64..5000.0),
            proptest::option::of(0.0f64..500.0),
            proptest::sample::subsequence(
                vec!["solar", "wind", "geothermal", "greenEnergy", "hydro"],
                0..=5,
            ),
        ),
        (
            primary_transport(),
            proptest::option::of(proptest::sample::select(CarType::ALL)),
            proptest::option::of(0.0f64..40000.0),
            proptest::option::of(0.0f64..30.0),
            proptest::option::of(0.0f64..50.0),
            proptest::option::of(0u32..20),
            proptest::option::of(0u32..10),
            proptest::option::of(0.0f64..8000.0),
        ),
    )
        .prop_map(|(home, transport)| {
            let (location, household, income, home_type, electricity, gas, renewables) = home;
            let (primary, car, mileage, rides, commute, short, long, distance) = transport;

            let mut input = SurveyInput {
                location: Location::new(location).unwrap(),
                household_size: household,
                income_range: income,
                ..Default::default()
            };
            input.home.home_type = home_type;
            input.home.electricity_usage = electricity;
            input.home.gas_usage = gas;
            input.home.renewable_sources = renewables.into_iter().map(String::from).collect();
            input.transport.primary_transport = primary;
            input.transport.car_type = car;
            input.transport.annual_mileage = mileage;
            input.transport.weekly_bus_rides = rides;
            input.transport.avg_commute_distance = commute;
            input.transport.short_flights = short;
            input.transport.long_flights = long;
            input.transport.avg_flight_distance = distance;
            input
        })
}

proptest! {
    #[test]
    fn calculation_is_deterministic(input in survey()) {
        let registry = registry();
        let first = FootprintCalculator::calculate(&registry, &input);
        let second = FootprintCalculator::calculate(&registry, &input);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn total_is_sum_of_categories_within_rounding(input in survey()) {
        let result = FootprintCalculator::calculate(&registry(), &input);
        let parts = result.home_emissions + result.transport_emissions + result.food_emissions;
        prop_assert!((result.total_emissions - parts).abs() <= 0.15 + 1e-9);
    }

    #[test]
    fn bike_and_walking_emit_nothing(mut input in survey(), walking in any::<bool>()) {
        input.transport.primary_transport = Some(if walking {
            PrimaryTransport::Walking
        } else {
            PrimaryTransport::Bike
        });
        prop_assert_eq!(FootprintCalculator::transport_emissions(&registry(), &input), 0.0);
    }

    #[test]
    fn renewable_discount_never_exceeds_cap(sources in 0usize..12) {
        let discount = renewable_discount(sources);
        prop_assert!(discount <= RENEWABLE_DISCOUNT_CAP);
        if sources >= 4 {
            prop_assert_eq!(discount, RENEWABLE_DISCOUNT_CAP);
        }
    }

    #[test]
    fn recommendations_always_include_food_waste(input in survey()) {
        let result = FootprintCalculator::calculate(&registry(), &input);
        let recommendations = RecommendationEngine::generate(&result, &input);
        prop_assert!(!recommendations.is_empty());
        prop_assert!(recommendations.iter().any(|r| r.id == "rec5"));
    }

    #[test]
    fn every_category_is_non_negative(input in survey()) {
        let result = FootprintCalculator::calculate(&registry(), &input);
        prop_assert!(result.home_emissions >= 0.0);
        prop_assert!(result.transport_emissions >= 0.0);
        prop_assert!(result.food_emissions >= 0.0);
    }
}
