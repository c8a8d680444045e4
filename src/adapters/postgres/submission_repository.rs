//! PostgreSQL implementation of SubmissionRepository.
//!
//! Persists submission records to `footprint_submissions`. The survey and
//! the recommendations are stored as JSONB; the footprint figures get their
//! own columns for reporting queries.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::footprint::FootprintResult;
use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId, Timestamp};
use crate::domain::recommendation::Recommendation;
use crate::domain::submission::SubmissionRecord;
use crate::domain::survey::SurveyInput;
use crate::ports::SubmissionRepository;

/// PostgreSQL implementation of SubmissionRepository.
#[derive(Clone)]
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    /// Creates a new PostgresSubmissionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, survey, total_emissions, home_emissions, transport_emissions,
           food_emissions, recommendations, created_at
    FROM footprint_submissions
"#;

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), DomainError> {
        let survey = record.survey();
        let result = record.result();

        sqlx::query(
            r#"
            INSERT INTO footprint_submissions (
                id, calculation_type, location, survey,
                total_emissions, home_emissions, transport_emissions, food_emissions,
                recommendations, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(record.id().as_uuid())
        .bind(survey.calculation_type.as_str())
        .bind(survey.location.as_str())
        .bind(Json(survey))
        .bind(result.total_emissions)
        .bind(result.home_emissions)
        .bind(result.transport_emissions)
        .bind(result.food_emissions)
        .bind(Json(record.recommendations()))
        .bind(record.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .map(|db| db.is_unique_violation())
                .unwrap_or(false);
            if duplicate {
                DomainError::new(
                    ErrorCode::SubmissionAlreadyExists,
                    format!("Submission already exists: {}", record.id()),
                )
                .with_detail("submission_id", record.id().to_string())
            } else {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to insert submission: {}", e),
                )
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch submission: {}", e),
                )
            })?;

        row.map(row_to_record).transpose()
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<SubmissionRecord>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} ORDER BY created_at DESC LIMIT $1",
            SELECT_COLUMNS
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list submissions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_record).collect()
    }
}

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to get {}: {}", column, e),
    )
}

fn row_to_record(row: sqlx::postgres::PgRow) -> Result<SubmissionRecord, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| column_error("id", e))?;
    let Json(survey): Json<SurveyInput> =
        row.try_get("survey").map_err(|e| column_error("survey", e))?;
    let Json(recommendations): Json<Vec<Recommendation>> = row
        .try_get("recommendations")
        .map_err(|e| column_error("recommendations", e))?;

    let result = FootprintResult::new(
        row.try_get("total_emissions")
            .map_err(|e| column_error("total_emissions", e))?,
        row.try_get("home_emissions")
            .map_err(|e| column_error("home_emissions", e))?,
        row.try_get("transport_emissions")
            .map_err(|e| column_error("transport_emissions", e))?,
        row.try_get("food_emissions")
            .map_err(|e| column_error("food_emissions", e))?,
    );

    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| column_error("created_at", e))?;

    Ok(SubmissionRecord::reconstitute(
        SubmissionId::from_uuid(id),
        survey,
        result,
        recommendations,
        Timestamp::from_datetime(created_at),
    ))
}
