//! Builtin country store backed by the compiled-in catalog.

use async_trait::async_trait;

use crate::domain::country::{builtin_countries, normalize_country_code, Country};
use crate::domain::foundation::DomainError;
use crate::ports::CountryStore;

/// Serves the builtin catalog. Never fails.
#[derive(Debug, Clone)]
pub struct BuiltinCountryStore {
    countries: Vec<Country>,
}

impl BuiltinCountryStore {
    pub fn new() -> Self {
        let mut countries = builtin_countries();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { countries }
    }
}

impl Default for BuiltinCountryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CountryStore for BuiltinCountryStore {
    async fn list_all(&self) -> Result<Vec<Country>, DomainError> {
        Ok(self.countries.clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, DomainError> {
        let code = normalize_country_code(code);
        Ok(self.countries.iter().find(|c| c.code == code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_countries_by_name() {
        let countries = BuiltinCountryStore::new().list_all().await.unwrap();
        let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"Argentina"));
    }

    #[tokio::test]
    async fn finds_by_code_ignoring_case() {
        let store = BuiltinCountryStore::new();
        let found = store.find_by_code("DE").await.unwrap().unwrap();
        assert_eq!(found.name, "Germany");
    }

    #[tokio::test]
    async fn unknown_code_is_none() {
        assert!(BuiltinCountryStore::new().find_by_code("zz").await.unwrap().is_none());
    }
}
