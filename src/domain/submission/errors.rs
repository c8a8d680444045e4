//! Submission-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId, ValidationError};

/// Errors from calculating, storing, or fetching submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Submission was not found.
    NotFound(SubmissionId),
    /// A record with this id was already saved.
    AlreadyExists(SubmissionId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl SubmissionError {
    pub fn not_found(id: SubmissionId) -> Self {
        SubmissionError::NotFound(id)
    }
    pub fn already_exists(id: SubmissionId) -> Self {
        SubmissionError::AlreadyExists(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SubmissionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SubmissionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmissionError::NotFound(_) => ErrorCode::SubmissionNotFound,
            SubmissionError::AlreadyExists(_) => ErrorCode::SubmissionAlreadyExists,
            SubmissionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SubmissionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SubmissionError::NotFound(id) => format!("Submission not found: {}", id),
            SubmissionError::AlreadyExists(id) => format!("Submission already exists: {}", id),
            SubmissionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SubmissionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SubmissionError {}

impl From<ValidationError> for SubmissionError {
    fn from(err: ValidationError) -> Self {
        SubmissionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SubmissionError {
    fn from(err: DomainError) -> Self {
        let id = err
            .details
            .get("submission_id")
            .and_then(|raw| raw.parse::<SubmissionId>().ok());

        match (err.code, id) {
            (ErrorCode::SubmissionNotFound, Some(id)) => SubmissionError::NotFound(id),
            (ErrorCode::SubmissionAlreadyExists, Some(id)) => SubmissionError::AlreadyExists(id),
            (ErrorCode::ValidationFailed, _) => SubmissionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => SubmissionError::Infrastructure(err.to_string()),
        }
    }
}
