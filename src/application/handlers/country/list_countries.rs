//! ListCountriesHandler - Query handler for the country catalog.

use std::sync::Arc;

use crate::domain::country::Country;
use crate::domain::foundation::DomainError;
use crate::ports::CountryStore;

/// Handler for listing every country, ordered by name.
pub struct ListCountriesHandler {
    store: Arc<dyn CountryStore>,
}

impl ListCountriesHandler {
    pub fn new(store: Arc<dyn CountryStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Country>, DomainError> {
        self.store.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::BuiltinCountryStore;

    #[tokio::test]
    async fn lists_builtin_catalog() {
        let handler = ListCountriesHandler::new(Arc::new(BuiltinCountryStore::new()));
        let countries = handler.handle().await.unwrap();
        assert_eq!(countries.len(), 22);
        assert!(countries.iter().any(|c| c.code == "gl"));
    }
}
