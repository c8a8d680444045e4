//! Emission factor sources
//!
//! Implementations of the EmissionFactorStore port.
//!
//! ## Available Adapters
//!
//! - **BuiltinFactorStore** - The compiled-in seed table
//! - **YamlFactorStore** - A YAML seed file on disk
//!
//! The PostgreSQL store lives in `adapters::postgres`.

mod builtin_factor_store;
mod yaml_factor_store;

pub use builtin_factor_store::BuiltinFactorStore;
pub use yaml_factor_store::YamlFactorStore;

use crate::domain::emissions::FactorCategory;

/// Parses a stored category name, logging and skipping unknown ones.
pub(crate) fn parse_category(raw: &str, subcategory: &str) -> Option<FactorCategory> {
    match raw.trim().parse::<FactorCategory>() {
        Ok(category) => Some(category),
        Err(e) => {
            tracing::warn!(
                category = raw,
                subcategory = subcategory,
                "Skipping emission factor row: {}",
                e
            );
            None
        }
    }
}

/// Accepts finite, non-negative factor values, logging and skipping the rest.
pub(crate) fn usable_value(
    value: f64,
    category: FactorCategory,
    subcategory: &str,
    region: &str,
) -> Option<f64> {
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        tracing::warn!(
            category = %category,
            subcategory = subcategory,
            region = region,
            value = value,
            "Skipping emission factor row: value must be finite and non-negative"
        );
        None
    }
}
