//! Builtin country catalog.
//!
//! Per-person averages are tonnes CO2e per year. `gl` is the worldwide
//! entry and `ot` lets users pick an unlisted country.

use once_cell::sync::Lazy;

use super::profile::Country;

/// (code, name, currency code, currency symbol, region, average footprint,
/// electricity, gas, transport, food)
type SeedRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
    f64,
    f64,
    f64,
);

const SEED: &[SeedRow] = &[
    ("us", "United States", "USD", "$", "North America", 16.1, 0.42, 5.3, 0.39, 1.7),
    ("ca", "Canada", "CAD", "C$", "North America", 15.4, 0.14, 5.3, 0.39, 1.7),
    ("mx", "Mexico", "MXN", "$", "North America", 3.7, 0.45, 5.3, 0.39, 1.4),
    ("uk", "United Kingdom", "GBP", "£", "Europe", 5.5, 0.23, 5.3, 0.32, 1.7),
    ("de", "Germany", "EUR", "€", "Europe", 9.4, 0.37, 5.3, 0.32, 1.7),
    ("fr", "France", "EUR", "€", "Europe", 5.0, 0.09, 5.3, 0.32, 1.7),
    ("it", "Italy", "EUR", "€", "Europe", 5.8, 0.33, 5.3, 0.32, 1.7),
    ("es", "Spain", "EUR", "€", "Europe", 5.4, 0.24, 5.3, 0.32, 1.7),
    ("in", "India", "INR", "₹", "Asia", 1.9, 0.82, 5.3, 0.35, 1.2),
    ("cn", "China", "CNY", "¥", "Asia", 7.4, 0.63, 5.3, 0.35, 1.3),
    ("jp", "Japan", "JPY", "¥", "Asia", 9.0, 0.47, 5.3, 0.33, 1.7),
    ("sg", "Singapore", "SGD", "S$", "Asia", 8.3, 0.41, 5.3, 0.33, 1.7),
    ("au", "Australia", "AUD", "A$", "Oceania", 15.4, 0.79, 5.3, 0.38, 1.7),
    ("nz", "New Zealand", "NZD", "NZ$", "Oceania", 7.7, 0.15, 5.3, 0.38, 1.7),
    ("za", "South Africa", "ZAR", "R", "Africa", 8.3, 0.92, 5.3, 0.36, 1.4),
    ("ng", "Nigeria", "NGN", "₦", "Africa", 0.5, 0.44, 5.3, 0.36, 1.2),
    ("eg", "Egypt", "EGP", "E£", "Africa", 2.5, 0.48, 5.3, 0.36, 1.3),
    ("br", "Brazil", "BRL", "R$", "South America", 2.2, 0.09, 5.3, 0.34, 1.6),
    ("ar", "Argentina", "ARS", "$", "South America", 4.5, 0.35, 5.3, 0.34, 1.7),
    ("cl", "Chile", "CLP", "$", "South America", 4.7, 0.42, 5.3, 0.34, 1.6),
    ("gl", "Global", "USD", "$", "Global", 4.8, 0.475, 5.3, 0.37, 1.7),
    ("ot", "Other", "USD", "$", "Custom", 4.8, 0.475, 5.3, 0.37, 1.7),
];

static BUILTIN: Lazy<Vec<Country>> = Lazy::new(|| {
    SEED.iter()
        .map(
            |(code, name, currency_code, currency_symbol, region, average, electricity, gas, transport, food)| {
                Country::new(*code, *name, *currency_code, *currency_symbol, *region)
                    .with_average_footprint(*average)
                    .with_factors(*electricity, *gas, *transport, *food)
            },
        )
        .collect()
});

/// The builtin catalog, in seed order.
pub fn builtin_countries() -> Vec<Country> {
    BUILTIN.clone()
}
