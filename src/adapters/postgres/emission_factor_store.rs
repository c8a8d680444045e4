//! PostgreSQL implementation of EmissionFactorStore.
//!
//! Reads the `emission_factors` table in insertion order. Rows with an
//! unknown category or an unusable value are skipped with a warning.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::adapters::factors::{parse_category, usable_value};
use crate::domain::emissions::EmissionFactor;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::EmissionFactorStore;

/// PostgreSQL implementation of EmissionFactorStore.
#[derive(Clone)]
pub struct PostgresEmissionFactorStore {
    pool: PgPool,
}

impl PostgresEmissionFactorStore {
    /// Creates a new PostgresEmissionFactorStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmissionFactorStore for PostgresEmissionFactorStore {
    async fn load_all(&self) -> Result<Vec<EmissionFactor>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT category, subcategory, country_code, value, unit, description, year
            FROM emission_factors
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to load emission factors: {}", e),
            )
        })?;

        let mut factors = Vec::with_capacity(rows.len());
        for row in rows {
            if let Some(factor) = row_to_factor(row)? {
                factors.push(factor);
            }
        }
        Ok(factors)
    }

    fn source_name(&self) -> &'static str {
        "postgres"
    }
}

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to get {}: {}", column, e),
    )
}

fn row_to_factor(row: sqlx::postgres::PgRow) -> Result<Option<EmissionFactor>, DomainError> {
    let category: String = row.try_get("category").map_err(|e| column_error("category", e))?;
    let subcategory: String = row
        .try_get("subcategory")
        .map_err(|e| column_error("subcategory", e))?;

    let Some(category) = parse_category(&category, &subcategory) else {
        return Ok(None);
    };

    let region: String = row
        .try_get("country_code")
        .map_err(|e| column_error("country_code", e))?;
    let value: f64 = row.try_get("value").map_err(|e| column_error("value", e))?;
    let Some(value) = usable_value(value, category, &subcategory, &region) else {
        return Ok(None);
    };
    let unit: String = row.try_get("unit").map_err(|e| column_error("unit", e))?;
    let description: Option<String> = row
        .try_get("description")
        .map_err(|e| column_error("description", e))?;
    let year: i32 = row.try_get("year").map_err(|e| column_error("year", e))?;

    let factor = EmissionFactor::new(category, subcategory, region, value, unit, year);
    Ok(Some(match description {
        Some(description) => factor.with_description(description),
        None => factor,
    }))
}
