//! Application configuration
//!
//! Settings come from environment variables (and a `.env` file in
//! development) via the `config` and `dotenvy` crates. Variables use the
//! `ECOTRACKER` prefix with `__` between nesting levels:
//!
//! - `ECOTRACKER__SERVER__PORT=8080` -> `server.port = 8080`
//! - `ECOTRACKER__DATABASE__URL=...` -> `database.url = ...`
//! - `ECOTRACKER__FACTORS__SOURCE=file` -> `factors.source = file`
//!
//! ```no_run
//! use ecotracker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod factors;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use factors::{FactorSourceConfig, FactorSourceKind};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL connection; absent means in-memory submissions
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub factors: FactorSourceConfig,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` when a value cannot be parsed into
    /// its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ECOTRACKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Loads and validates in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every section plus the cross-section rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.factors.validate()?;
        if self.factors.source == FactorSourceKind::Postgres && self.database.is_none() {
            return Err(ValidationError::FactorSourceNeedsDatabase(
                FactorSourceKind::Postgres.as_str(),
            ));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
