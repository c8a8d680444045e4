//! Country store port.
//!
//! Read-only access to the country catalog.

use crate::domain::country::Country;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Port for reading the country catalog.
#[async_trait]
pub trait CountryStore: Send + Sync {
    /// All countries, ordered by name.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on query failure
    async fn list_all(&self) -> Result<Vec<Country>, DomainError>;

    /// Finds a country by its lower-case code.
    ///
    /// Returns `None` if no country has that code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, DomainError>;
}
