//! Builtin factor store backed by the compiled-in seed table.

use async_trait::async_trait;

use crate::domain::emissions::{builtin_factors, EmissionFactor};
use crate::domain::foundation::DomainError;
use crate::ports::EmissionFactorStore;

/// Serves the builtin seed rows. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFactorStore;

impl BuiltinFactorStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmissionFactorStore for BuiltinFactorStore {
    async fn load_all(&self) -> Result<Vec<EmissionFactor>, DomainError> {
        Ok(builtin_factors())
    }

    fn source_name(&self) -> &'static str {
        "builtin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emissions::{EmissionFactorRegistry, FactorCategory, FactorLookup};

    #[tokio::test]
    async fn loads_seed_with_global_rows_everywhere() {
        let factors = BuiltinFactorStore::new().load_all().await.unwrap();
        let registry = EmissionFactorRegistry::from_factors(factors);
        assert!(registry.missing_global_categories().is_empty());
        assert_eq!(registry.lookup(FactorCategory::Electricity, "us"), 0.42);
    }
}
