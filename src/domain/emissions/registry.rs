//! Emission Factor Registry - immutable factor snapshot with fallback resolution.
//!
//! A registry is built once from a list of [`EmissionFactor`] rows and never
//! mutated afterwards. Reloading means building a new registry and swapping
//! it in at the application layer.
//!
//! # Resolution order
//!
//! 1. Exact `(category, key)` match.
//! 2. If `key` looks like a two-letter region code, `(category, "global")`.
//! 3. The category's hardcoded default ([`FactorCategory::default_value`]).
//! 4. `0.0`.
//!
//! # Indexing
//!
//! Regional rows are indexed under `(category, region)`. Global rows are
//! indexed under `(category, subcategory)`; the first global row of each
//! category (in load order) also answers `(category, "global")`.

use std::collections::{BTreeSet, HashMap};

use super::factor::{is_region_code, EmissionFactor, FactorCategory, GLOBAL_REGION};

/// Read-only access to factor values. Lookups never fail.
pub trait FactorLookup {
    fn lookup(&self, category: FactorCategory, key: &str) -> f64;
}

/// Which tier of the fallback chain produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionTier {
    Exact,
    GlobalFallback,
    CategoryDefault,
    Missing,
}

/// A resolved factor value and where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub value: f64,
    pub tier: ResolutionTier,
}

/// Immutable snapshot of emission factors.
#[derive(Debug, Clone, Default)]
pub struct EmissionFactorRegistry {
    index: HashMap<(FactorCategory, String), f64>,
    factors: Vec<EmissionFactor>,
}

impl EmissionFactorRegistry {
    /// Builds a snapshot from factor rows. Later rows with the same index
    /// key replace earlier ones, except for the `"global"` alias which keeps
    /// the first global row of the category.
    pub fn from_factors(factors: Vec<EmissionFactor>) -> Self {
        let mut index = HashMap::new();
        for factor in &factors {
            let region = factor.region.to_ascii_lowercase();
            if region == GLOBAL_REGION {
                index.insert(
                    (factor.category, factor.subcategory.to_ascii_lowercase()),
                    factor.value,
                );
                index
                    .entry((factor.category, GLOBAL_REGION.to_string()))
                    .or_insert(factor.value);
            } else {
                index.insert((factor.category, region), factor.value);
            }
        }
        Self { index, factors }
    }

    /// Resolves a factor through the full fallback chain.
    pub fn resolve(&self, category: FactorCategory, key: &str) -> Resolution {
        let key = key.trim().to_ascii_lowercase();

        if let Some(value) = self.index.get(&(category, key.clone())) {
            return Resolution {
                value: *value,
                tier: ResolutionTier::Exact,
            };
        }

        if is_region_code(&key) {
            if let Some(value) = self.index.get(&(category, GLOBAL_REGION.to_string())) {
                return Resolution {
                    value: *value,
                    tier: ResolutionTier::GlobalFallback,
                };
            }
        }

        match category.default_value() {
            Some(value) => Resolution {
                value,
                tier: ResolutionTier::CategoryDefault,
            },
            None => Resolution {
                value: 0.0,
                tier: ResolutionTier::Missing,
            },
        }
    }

    /// All rows the snapshot was built from, in load order.
    pub fn factors(&self) -> &[EmissionFactor] {
        &self.factors
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Categories that have rows but no global row to fall back on.
    pub fn missing_global_categories(&self) -> Vec<FactorCategory> {
        let present: BTreeSet<FactorCategory> = self.factors.iter().map(|f| f.category).collect();
        present
            .into_iter()
            .filter(|c| !self.index.contains_key(&(*c, GLOBAL_REGION.to_string())))
            .collect()
    }
}

impl FactorLookup for EmissionFactorRegistry {
    fn lookup(&self, category: FactorCategory, key: &str) -> f64 {
        self.resolve(category, key).value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emissions::builtin_factors;

    fn registry() -> EmissionFactorRegistry {
        EmissionFactorRegistry::from_factors(builtin_factors())
    }

    #[test]
    fn exact_regional_match() {
        let r = registry().resolve(FactorCategory::Electricity, "us");
        assert_eq!(r.tier, ResolutionTier::Exact);
        assert_eq!(r.value, 0.42);
    }

    #[test]
    fn exact_subcategory_match() {
        let reg = registry();
        assert_eq!(reg.lookup(FactorCategory::Car, "suv"), 0.57);
        assert_eq!(reg.lookup(FactorCategory::Home, "apartment"), 0.75);
        assert_eq!(reg.lookup(FactorCategory::Flight, "rf_factor"), 1.9);
    }

    #[test]
    fn unknown_region_code_degrades_to_global() {
        let r = registry().resolve(FactorCategory::Electricity, "br");
        assert_eq!(r.tier, ResolutionTier::GlobalFallback);
        assert_eq!(r.value, 0.475);
    }

    #[test]
    fn global_alias_uses_first_global_row() {
        let reg = registry();
        assert_eq!(reg.lookup(FactorCategory::NaturalGas, "global"), 5.3);
        assert_eq!(reg.lookup(FactorCategory::PublicTransport, "global"), 0.16);
        assert_eq!(reg.lookup(FactorCategory::Food, "global"), 1.7);
    }

    #[test]
    fn lookup_is_case_insensitive_on_key() {
        assert_eq!(registry().lookup(FactorCategory::Electricity, "UK"), 0.23);
    }

    #[test]
    fn non_region_miss_uses_category_default() {
        let r = registry().resolve(FactorCategory::Car, "minivan");
        assert_eq!(r.tier, ResolutionTier::CategoryDefault);
        assert_eq!(r.value, 0.39);
    }

    #[test]
    fn empty_registry_uses_category_defaults_then_zero() {
        let reg = EmissionFactorRegistry::default();
        assert_eq!(reg.lookup(FactorCategory::Electricity, "us"), 0.475);
        assert_eq!(reg.lookup(FactorCategory::NaturalGas, "global"), 5.3);
        assert_eq!(reg.lookup(FactorCategory::Car, "sedan"), 0.39);
        assert_eq!(reg.lookup(FactorCategory::Flight, "short"), 0.22);
        assert_eq!(reg.lookup(FactorCategory::Food, "average"), 1.7);

        let missing = reg.resolve(FactorCategory::Home, "house");
        assert_eq!(missing.tier, ResolutionTier::Missing);
        assert_eq!(missing.value, 0.0);
    }

    #[test]
    fn builtin_seed_has_global_row_for_every_category() {
        assert!(registry().missing_global_categories().is_empty());
    }

    #[test]
    fn regional_only_category_is_reported() {
        let reg = EmissionFactorRegistry::from_factors(vec![EmissionFactor::new(
            FactorCategory::Electricity,
            "grid",
            "us",
            0.42,
            "kg CO2e/kWh",
            2023,
        )]);
        assert_eq!(reg.missing_global_categories(), vec![FactorCategory::Electricity]);
        // Region miss with no global row falls through to the category constant.
        assert_eq!(reg.lookup(FactorCategory::Electricity, "de"), 0.475);
    }

    #[test]
    fn later_rows_override_earlier_ones() {
        let reg = EmissionFactorRegistry::from_factors(vec![
            EmissionFactor::new(FactorCategory::Car, "sedan", "global", 0.39, "kg CO2e/mile", 2022),
            EmissionFactor::new(FactorCategory::Car, "sedan", "global", 0.35, "kg CO2e/mile", 2023),
        ]);
        assert_eq!(reg.lookup(FactorCategory::Car, "sedan"), 0.35);
        assert_eq!(reg.len(), 2);
    }
}
