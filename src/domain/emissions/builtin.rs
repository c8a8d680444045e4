//! Builtin emission factor seed.
//!
//! Values are 2023 national and global averages. Order matters: the first
//! global row of each category answers `(category, "global")` lookups.

use once_cell::sync::Lazy;

use super::factor::{EmissionFactor, FactorCategory, GLOBAL_REGION};

const SEED_YEAR: i32 = 2023;

/// (category, subcategory, region, value, unit, description)
type SeedRow = (
    FactorCategory,
    &'static str,
    &'static str,
    f64,
    &'static str,
    &'static str,
);

const SEED: &[SeedRow] = &[
    // Grid electricity, kg CO2e per kWh
    (FactorCategory::Electricity, "grid", GLOBAL_REGION, 0.475, "kg CO2e/kWh", "Global average grid electricity emissions"),
    (FactorCategory::Electricity, "grid", "us", 0.42, "kg CO2e/kWh", "US national average grid electricity emissions"),
    (FactorCategory::Electricity, "grid", "uk", 0.23, "kg CO2e/kWh", "UK national average grid electricity emissions"),
    (FactorCategory::Electricity, "grid", "ca", 0.14, "kg CO2e/kWh", "Canada national average grid electricity emissions (low due to hydro)"),
    (FactorCategory::Electricity, "grid", "au", 0.79, "kg CO2e/kWh", "Australia national average grid electricity emissions"),
    (FactorCategory::Electricity, "grid", "in", 0.82, "kg CO2e/kWh", "India national average grid electricity emissions (high due to coal)"),
    (FactorCategory::Electricity, "grid", "cn", 0.63, "kg CO2e/kWh", "China national average grid electricity emissions"),
    (FactorCategory::Electricity, "grid", "de", 0.37, "kg CO2e/kWh", "Germany national average grid electricity emissions"),
    (FactorCategory::Electricity, "grid", "fr", 0.09, "kg CO2e/kWh", "France national average grid electricity emissions (low due to nuclear)"),
    // Natural gas
    (FactorCategory::NaturalGas, "residential", GLOBAL_REGION, 5.3, "kg CO2e/therm", "Natural gas emissions for residential heating"),
    // Cars, kg CO2e per mile
    (FactorCategory::Car, "sedan", GLOBAL_REGION, 0.39, "kg CO2e/mile", "Average sedan emissions per mile"),
    (FactorCategory::Car, "suv", GLOBAL_REGION, 0.57, "kg CO2e/mile", "Average SUV/truck emissions per mile"),
    (FactorCategory::Car, "truck", GLOBAL_REGION, 0.68, "kg CO2e/mile", "Average large truck emissions per mile"),
    (FactorCategory::Car, "hybrid", GLOBAL_REGION, 0.19, "kg CO2e/mile", "Average hybrid vehicle emissions per mile"),
    (FactorCategory::Car, "electric", GLOBAL_REGION, 0.1, "kg CO2e/mile", "Average electric vehicle emissions per mile (including electricity generation)"),
    // Public transport, kg CO2e per passenger mile
    (FactorCategory::PublicTransport, "bus", GLOBAL_REGION, 0.16, "kg CO2e/mile", "Average bus emissions per passenger mile"),
    (FactorCategory::PublicTransport, "train", GLOBAL_REGION, 0.12, "kg CO2e/mile", "Average train emissions per passenger mile"),
    (FactorCategory::PublicTransport, "subway", GLOBAL_REGION, 0.11, "kg CO2e/mile", "Average subway/metro emissions per passenger mile"),
    // Flights, kg CO2e per passenger mile
    (FactorCategory::Flight, "medium", GLOBAL_REGION, 0.22, "kg CO2e/mile", "Medium-haul flight emissions per passenger mile"),
    (FactorCategory::Flight, "short", GLOBAL_REGION, 0.28, "kg CO2e/mile", "Short-haul flight emissions per passenger mile"),
    (FactorCategory::Flight, "long", GLOBAL_REGION, 0.18, "kg CO2e/mile", "Long-haul flight emissions per passenger mile"),
    (FactorCategory::Flight, "rf_factor", GLOBAL_REGION, 1.9, "multiplier", "Radiative forcing factor for high-altitude emissions"),
    // Food, tonnes CO2e per person per year
    (FactorCategory::Food, "average", GLOBAL_REGION, 1.7, "tonnes CO2e/year", "Average food carbon footprint per person per year"),
    (FactorCategory::Food, "meat_heavy", GLOBAL_REGION, 2.5, "tonnes CO2e/year", "Meat-heavy diet carbon footprint per person per year"),
    (FactorCategory::Food, "vegetarian", GLOBAL_REGION, 1.2, "tonnes CO2e/year", "Vegetarian diet carbon footprint per person per year"),
    (FactorCategory::Food, "vegan", GLOBAL_REGION, 0.8, "tonnes CO2e/year", "Vegan diet carbon footprint per person per year"),
    // Home type multipliers
    (FactorCategory::Home, "house", GLOBAL_REGION, 1.0, "multiplier", "Base factor for house energy use"),
    (FactorCategory::Home, "apartment", GLOBAL_REGION, 0.75, "multiplier", "Adjustment factor for apartment/condo energy use"),
    (FactorCategory::Home, "other", GLOBAL_REGION, 0.9, "multiplier", "Adjustment factor for other home types"),
];

static BUILTIN: Lazy<Vec<EmissionFactor>> = Lazy::new(|| {
    SEED.iter()
        .map(|(category, subcategory, region, value, unit, description)| {
            EmissionFactor::new(*category, *subcategory, *region, *value, *unit, SEED_YEAR)
                .with_description(*description)
        })
        .collect()
});

/// The builtin seed rows, in load order.
pub fn builtin_factors() -> Vec<EmissionFactor> {
    BUILTIN.clone()
}
