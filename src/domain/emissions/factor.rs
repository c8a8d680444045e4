//! Emission factor records and their categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Region key every category falls back to.
pub const GLOBAL_REGION: &str = "global";

/// Activity category an emission factor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    /// kg CO2e per kWh of grid electricity, keyed by region.
    Electricity,
    /// kg CO2e per therm.
    NaturalGas,
    /// kg CO2e per mile, keyed by car type.
    Car,
    /// kg CO2e per passenger mile.
    PublicTransport,
    /// kg CO2e per passenger mile by haul band, plus the radiative forcing multiplier.
    Flight,
    /// tonnes CO2e per person per year, keyed by diet.
    Food,
    /// Dimensionless multiplier keyed by home type.
    Home,
}

impl FactorCategory {
    pub const ALL: [FactorCategory; 7] = [
        FactorCategory::Electricity,
        FactorCategory::NaturalGas,
        FactorCategory::Car,
        FactorCategory::PublicTransport,
        FactorCategory::Flight,
        FactorCategory::Food,
        FactorCategory::Home,
    ];

    /// Storage name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorCategory::Electricity => "electricity",
            FactorCategory::NaturalGas => "natural_gas",
            FactorCategory::Car => "car",
            FactorCategory::PublicTransport => "public_transport",
            FactorCategory::Flight => "flight",
            FactorCategory::Food => "food",
            FactorCategory::Home => "home",
        }
    }

    /// Hardcoded last-resort value used when the snapshot has nothing for a
    /// lookup in this category.
    pub fn default_value(&self) -> Option<f64> {
        match self {
            FactorCategory::Electricity => Some(0.475),
            FactorCategory::NaturalGas => Some(5.3),
            FactorCategory::Car => Some(0.39),
            FactorCategory::Flight => Some(0.22),
            FactorCategory::Food => Some(1.7),
            FactorCategory::PublicTransport | FactorCategory::Home => None,
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FactorCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FactorCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let expected: Vec<&str> = FactorCategory::ALL.iter().map(|c| c.as_str()).collect();
                ValidationError::unknown_variant("category", s, &expected)
            })
    }
}

/// One row of the emission factor table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    pub category: FactorCategory,
    pub subcategory: String,
    /// Region code (e.g. `us`) or [`GLOBAL_REGION`].
    #[serde(alias = "country_code", alias = "countryCode")]
    pub region: String,
    pub value: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub year: i32,
}

impl EmissionFactor {
    /// Creates a factor with no description.
    pub fn new(
        category: FactorCategory,
        subcategory: impl Into<String>,
        region: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            category,
            subcategory: subcategory.into(),
            region: region.into(),
            value,
            unit: unit.into(),
            description: None,
            year,
        }
    }

    /// Attaches a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this row applies worldwide rather than to a single region.
    pub fn is_global(&self) -> bool {
        self.region == GLOBAL_REGION
    }
}

/// Whether `key` has the shape of a two-letter region code.
pub fn is_region_code(key: &str) -> bool {
    key.len() == 2 && key.chars().all(|c| c.is_ascii_alphabetic())
}
