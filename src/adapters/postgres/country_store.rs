//! PostgreSQL implementation of CountryStore.
//!
//! Reads the `countries` catalog seeded by migration.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::country::{normalize_country_code, Country};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CountryStore;

/// PostgreSQL implementation of CountryStore.
#[derive(Clone)]
pub struct PostgresCountryStore {
    pool: PgPool,
}

impl PostgresCountryStore {
    /// Creates a new PostgresCountryStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT code, name, currency_code, currency_symbol, region, average_footprint,
           electricity_factor, gas_factor, transport_factor, food_factor
    FROM countries
"#;

#[async_trait]
impl CountryStore for PostgresCountryStore {
    async fn list_all(&self) -> Result<Vec<Country>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY name", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to list countries: {}", e),
                )
            })?;

        rows.into_iter().map(row_to_country).collect()
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Country>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE code = $1", SELECT_COLUMNS))
            .bind(normalize_country_code(code))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to find country: {}", e),
                )
            })?;

        row.map(row_to_country).transpose()
    }
}

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to get {}: {}", column, e),
    )
}

fn row_to_country(row: sqlx::postgres::PgRow) -> Result<Country, DomainError> {
    let get_text = |column: &str| -> Result<String, DomainError> {
        row.try_get::<String, _>(column)
            .map_err(|e| column_error(column, e))
    };
    let get_number = |column: &str| -> Result<Option<f64>, DomainError> {
        row.try_get::<Option<f64>, _>(column)
            .map_err(|e| column_error(column, e))
    };

    let mut country = Country::new(
        get_text("code")?,
        get_text("name")?,
        get_text("currency_code")?,
        get_text("currency_symbol")?,
        get_text("region")?,
    );
    country.average_footprint = get_number("average_footprint")?;
    country.electricity_factor = get_number("electricity_factor")?;
    country.gas_factor = get_number("gas_factor")?;
    country.transport_factor = get_number("transport_factor")?;
    country.food_factor = get_number("food_factor")?;
    Ok(country)
}
