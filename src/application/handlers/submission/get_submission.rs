//! GetSubmissionHandler - Query handler for a single submission record.

use std::sync::Arc;

use crate::domain::foundation::SubmissionId;
use crate::domain::submission::{SubmissionError, SubmissionRecord};
use crate::ports::SubmissionRepository;

/// Query to get a submission by ID.
#[derive(Debug, Clone)]
pub struct GetSubmissionQuery {
    pub submission_id: SubmissionId,
}

/// Handler for retrieving submission records.
pub struct GetSubmissionHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl GetSubmissionHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSubmissionQuery) -> Result<SubmissionRecord, SubmissionError> {
        self.repository
            .find_by_id(&query.submission_id)
            .await?
            .ok_or_else(|| SubmissionError::not_found(query.submission_id))
    }
}
