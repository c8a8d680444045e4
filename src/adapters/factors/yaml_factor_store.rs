//! YAML Factor Store
//!
//! Reads factor rows from a YAML seed file shaped like:
//!
//! ```yaml
//! factors:
//!   - category: electricity
//!     subcategory: grid
//!     region: global
//!     value: 0.475
//!     unit: kg CO2e/kWh
//!     year: 2023
//! ```
//!
//! Rows with an unknown category, or a value that is negative or not a
//! finite number, are skipped with a warning. The file is
//! read on every `load_all`, so edits are picked up by a snapshot reload.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{parse_category, usable_value};
use crate::domain::emissions::EmissionFactor;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::EmissionFactorStore;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    factors: Vec<SeedRow>,
}

#[derive(Debug, Deserialize)]
struct SeedRow {
    category: String,
    subcategory: String,
    #[serde(alias = "country_code", alias = "countryCode")]
    region: String,
    value: f64,
    unit: String,
    #[serde(default)]
    description: Option<String>,
    year: i32,
}

impl SeedRow {
    fn into_factor(self) -> Option<EmissionFactor> {
        let category = parse_category(&self.category, &self.subcategory)?;
        let value = usable_value(self.value, category, &self.subcategory, &self.region)?;
        let factor = EmissionFactor::new(
            category,
            self.subcategory,
            self.region,
            value,
            self.unit,
            self.year,
        );
        Some(match self.description {
            Some(description) => factor.with_description(description),
            None => factor,
        })
    }
}

/// Factor store reading a YAML seed file
#[derive(Debug, Clone)]
pub struct YamlFactorStore {
    path: PathBuf,
}

impl YamlFactorStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses seed file contents.
    pub fn parse(contents: &str) -> Result<Vec<EmissionFactor>, DomainError> {
        let file: SeedFile = serde_yaml::from_str(contents).map_err(|e| {
            DomainError::new(
                ErrorCode::FactorSourceError,
                format!("Invalid emission factor seed file: {}", e),
            )
        })?;

        Ok(file
            .factors
            .into_iter()
            .filter_map(SeedRow::into_factor)
            .collect())
    }
}

#[async_trait]
impl EmissionFactorStore for YamlFactorStore {
    async fn load_all(&self) -> Result<Vec<EmissionFactor>, DomainError> {
        let contents = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::new(
                ErrorCode::FactorSourceError,
                format!("Failed to read {}: {}", self.path.display(), e),
            )
            .with_detail("path", self.path.display().to_string())
        })?;

        let factors = Self::parse(&contents)?;
        tracing::debug!(
            path = %self.path.display(),
            rows = factors.len(),
            "Parsed emission factor seed file"
        );
        Ok(factors)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
