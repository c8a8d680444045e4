//! Submission repository port.
//!
//! Write-once record store for completed calculations. Records are never
//! updated or deleted through this port.

use crate::domain::foundation::{DomainError, SubmissionId};
use crate::domain::submission::SubmissionRecord;
use async_trait::async_trait;

/// Repository port for submission records.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Save a new record.
    ///
    /// # Errors
    ///
    /// - `SubmissionAlreadyExists` if a record with this id was saved before
    /// - `DatabaseError` on persistence failure
    async fn save(&self, record: &SubmissionRecord) -> Result<(), DomainError>;

    /// Find a record by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, DomainError>;

    /// Most recent records first, at most `limit`.
    async fn list_recent(&self, limit: u32) -> Result<Vec<SubmissionRecord>, DomainError>;
}
