//! In-Memory Submission Repository
//!
//! Keeps submission records in a process-local map. Used when no database
//! is configured and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId};
use crate::domain::submission::SubmissionRecord;
use crate::ports::SubmissionRepository;

/// In-memory store for submission records
#[derive(Debug, Clone)]
pub struct InMemorySubmissionRepository {
    records: Arc<RwLock<HashMap<SubmissionId, SubmissionRecord>>>,
}

impl InMemorySubmissionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl Default for InMemorySubmissionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id()) {
            return Err(DomainError::new(
                ErrorCode::SubmissionAlreadyExists,
                format!("Submission already exists: {}", record.id()),
            )
            .with_detail("submission_id", record.id().to_string()));
        }
        records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, DomainError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<SubmissionRecord>, DomainError> {
        let records = self.records.read().await;
        let mut all: Vec<SubmissionRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        all.truncate(limit as usize);
        Ok(all)
    }
}
