//! Country catalog entries.

use serde::{Deserialize, Serialize};

/// A selectable country.
///
/// Factors are informational; footprint calculations resolve factors
/// through the emission factor registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Lower-case two-letter code, e.g. `us`.
    pub code: String,
    pub name: String,
    pub currency_code: String,
    pub currency_symbol: String,
    /// Continent or grouping, e.g. `Europe`.
    pub region: String,
    /// Tonnes CO2e per person per year.
    pub average_footprint: Option<f64>,
    /// kg CO2e per kWh.
    pub electricity_factor: Option<f64>,
    /// kg CO2e per therm.
    pub gas_factor: Option<f64>,
    /// kg CO2e per mile.
    pub transport_factor: Option<f64>,
    /// Tonnes CO2e per person per year.
    pub food_factor: Option<f64>,
}

impl Country {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        currency_code: impl Into<String>,
        currency_symbol: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            code: normalize_country_code(&code.into()),
            name: name.into(),
            currency_code: currency_code.into(),
            currency_symbol: currency_symbol.into(),
            region: region.into(),
            average_footprint: None,
            electricity_factor: None,
            gas_factor: None,
            transport_factor: None,
            food_factor: None,
        }
    }

    pub fn with_average_footprint(mut self, tonnes: f64) -> Self {
        self.average_footprint = Some(tonnes);
        self
    }

    pub fn with_factors(mut self, electricity: f64, gas: f64, transport: f64, food: f64) -> Self {
        self.electricity_factor = Some(electricity);
        self.gas_factor = Some(gas);
        self.transport_factor = Some(transport);
        self.food_factor = Some(food);
        self
    }
}

/// Canonical form of a caller-supplied country code.
pub fn normalize_country_code(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}
