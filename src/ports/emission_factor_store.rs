//! Emission factor store port.
//!
//! Source of factor rows for building a registry snapshot. All rows are
//! fetched up front so the calculator itself never awaits a lookup.

use crate::domain::emissions::EmissionFactor;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Port for loading emission factor rows.
#[async_trait]
pub trait EmissionFactorStore: Send + Sync {
    /// Load every factor row in source order.
    ///
    /// Order matters: the first global row of a category becomes that
    /// category's `"global"` fallback.
    ///
    /// # Errors
    ///
    /// - `FactorSourceError` if the source cannot be read or parsed
    /// - `DatabaseError` on query failure
    async fn load_all(&self) -> Result<Vec<EmissionFactor>, DomainError>;

    /// Short name used in logs.
    fn source_name(&self) -> &'static str;
}
