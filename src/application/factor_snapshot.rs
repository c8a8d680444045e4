//! FactorSnapshot - copy-on-write holder for the active factor registry.
//!
//! Calculations take an `Arc` to the registry that is current when they
//! start and keep it until they finish. A reload builds a complete new
//! registry off to the side and swaps the pointer; readers never observe a
//! partially loaded table.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::domain::emissions::{EmissionFactorRegistry, FactorCategory};
use crate::domain::foundation::DomainError;
use crate::ports::EmissionFactorStore;

/// Outcome of a (re)load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub source: &'static str,
    pub factor_count: usize,
    pub missing_global: Vec<FactorCategory>,
}

/// Shared, swappable registry snapshot.
#[derive(Debug)]
pub struct FactorSnapshot {
    current: RwLock<Arc<EmissionFactorRegistry>>,
}

impl FactorSnapshot {
    pub fn new(registry: EmissionFactorRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// Loads the initial snapshot from a store.
    pub async fn load(store: &dyn EmissionFactorStore) -> Result<Self, DomainError> {
        let (registry, summary) = build(store).await?;
        log_summary(&summary);
        Ok(Self::new(registry))
    }

    /// The registry in effect right now.
    pub fn current(&self) -> Arc<EmissionFactorRegistry> {
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Rebuilds the registry from `store` and swaps it in.
    ///
    /// On error the previous snapshot stays in effect.
    pub async fn reload(&self, store: &dyn EmissionFactorStore) -> Result<SnapshotSummary, DomainError> {
        let (registry, summary) = build(store).await?;
        {
            let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = Arc::new(registry);
        }
        log_summary(&summary);
        Ok(summary)
    }
}

async fn build(
    store: &dyn EmissionFactorStore,
) -> Result<(EmissionFactorRegistry, SnapshotSummary), DomainError> {
    let factors = store.load_all().await?;
    let registry = EmissionFactorRegistry::from_factors(factors);
    let summary = SnapshotSummary {
        source: store.source_name(),
        factor_count: registry.len(),
        missing_global: registry.missing_global_categories(),
    };
    Ok((registry, summary))
}

fn log_summary(summary: &SnapshotSummary) {
    if summary.factor_count == 0 {
        warn!(
            source = summary.source,
            "Emission factor source is empty; every lookup will use category defaults"
        );
    }
    for category in &summary.missing_global {
        warn!(
            source = summary.source,
            category = %category,
            "No global emission factor for category; regional lookups cannot fall back"
        );
    }
    info!(
        source = summary.source,
        factors = summary.factor_count,
        "Emission factor snapshot loaded"
    );
}
