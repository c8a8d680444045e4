//! Emission factor source selection

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the factor snapshot is loaded from.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FactorSourceKind {
    /// Compiled-in seed table
    #[default]
    Builtin,
    /// YAML seed file at `factors.path`
    File,
    /// `emission_factors` table in the configured database
    Postgres,
}

impl FactorSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorSourceKind::Builtin => "builtin",
            FactorSourceKind::File => "file",
            FactorSourceKind::Postgres => "postgres",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactorSourceConfig {
    #[serde(default)]
    pub source: FactorSourceKind,

    pub path: Option<PathBuf>,
}

impl FactorSourceConfig {
    /// Checks the section on its own; the database requirement of the
    /// postgres source is checked by `AppConfig::validate`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.source == FactorSourceKind::File
            && self.path.as_ref().map_or(true, |p| p.as_os_str().is_empty())
        {
            return Err(ValidationError::MissingRequired("FACTORS__PATH"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_source_defaults() {
        let config = FactorSourceConfig::default();
        assert_eq!(config.source, FactorSourceKind::Builtin);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_file_source_requires_path() {
        let config = FactorSourceConfig {
            source: FactorSourceKind::File,
            path: None,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("FACTORS__PATH"))
        );

        let config = FactorSourceConfig {
            source: FactorSourceKind::File,
            path: Some(PathBuf::from("config/factors.yaml")),
        };
        assert!(config.validate().is_ok());
    }
}
