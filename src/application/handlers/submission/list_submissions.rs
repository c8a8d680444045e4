//! ListSubmissionsHandler - Query handler for recent submissions.

use std::sync::Arc;

use crate::domain::submission::{SubmissionError, SubmissionRecord};
use crate::ports::SubmissionRepository;

/// Page size when the caller does not give one.
pub const DEFAULT_LIST_LIMIT: u32 = 20;

/// Largest page a caller may request.
pub const MAX_LIST_LIMIT: u32 = 100;

/// Query for the most recent submissions.
#[derive(Debug, Clone, Default)]
pub struct ListSubmissionsQuery {
    pub limit: Option<u32>,
}

impl ListSubmissionsQuery {
    /// Effective limit: default when absent, capped at the maximum.
    pub fn effective_limit(&self) -> Result<u32, SubmissionError> {
        match self.limit {
            None => Ok(DEFAULT_LIST_LIMIT),
            Some(0) => Err(SubmissionError::validation("limit", "must be at least 1")),
            Some(n) => Ok(n.min(MAX_LIST_LIMIT)),
        }
    }
}

/// Handler for listing submissions, newest first.
pub struct ListSubmissionsHandler {
    repository: Arc<dyn SubmissionRepository>,
}

impl ListSubmissionsHandler {
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListSubmissionsQuery,
    ) -> Result<Vec<SubmissionRecord>, SubmissionError> {
        let limit = query.effective_limit()?;
        Ok(self.repository.list_recent(limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySubmissionRepository;
    use crate::domain::footprint::FootprintResult;
    use crate::domain::survey::SurveyInput;

    #[test]
    fn limit_defaults_and_caps() {
        assert_eq!(ListSubmissionsQuery::default().effective_limit().unwrap(), 20);
        assert_eq!(
            ListSubmissionsQuery { limit: Some(500) }.effective_limit().unwrap(),
            100
        );
        assert_eq!(ListSubmissionsQuery { limit: Some(7) }.effective_limit().unwrap(), 7);
        assert!(ListSubmissionsQuery { limit: Some(0) }.effective_limit().is_err());
    }

    #[tokio::test]
    async fn lists_saved_records() {
        let repo = Arc::new(InMemorySubmissionRepository::new());
        for _ in 0..3 {
            let record = SubmissionRecord::new(SurveyInput::default(), FootprintResult::default());
            repo.save(&record).await.unwrap();
        }

        let handler = ListSubmissionsHandler::new(repo);
        let listed = handler
            .handle(ListSubmissionsQuery { limit: Some(2) })
            .await
            .unwrap();
        assert_eq!(listed.len(), 2);
    }
}
