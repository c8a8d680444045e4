//! GetCountryHandler - Query handler for a single country.

use std::sync::Arc;

use crate::domain::country::{normalize_country_code, Country};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::CountryStore;

/// Query to get a country by code.
#[derive(Debug, Clone)]
pub struct GetCountryQuery {
    pub code: String,
}

/// Handler for retrieving a country.
pub struct GetCountryHandler {
    store: Arc<dyn CountryStore>,
}

impl GetCountryHandler {
    pub fn new(store: Arc<dyn CountryStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if the code is blank
    /// - `CountryNotFound` if no country has the code
    pub async fn handle(&self, query: GetCountryQuery) -> Result<Country, DomainError> {
        let code = normalize_country_code(&query.code);
        if code.is_empty() {
            return Err(ValidationError::empty_field("code").into());
        }

        let found = self.store.find_by_code(&code).await?;
        found.ok_or_else(|| {
            DomainError::new(
                ErrorCode::CountryNotFound,
                format!("Country not found: {}", code),
            )
            .with_detail("code", code)
        })
    }
}
