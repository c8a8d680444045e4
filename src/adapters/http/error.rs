//! Shared HTTP error envelope and error-to-status mapping.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::submission::SubmissionError;

/// Error response body: `{code, message, details?}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            details: Some(serde_json::json!({ "field": field })),
            ..Self::new(ErrorCode::ValidationFailed, message)
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            details: Some(serde_json::json!({ "id": id })),
            ..Self::new(
                ErrorCode::SubmissionNotFound,
                format!("{} not found: {}", resource_type, id),
            )
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

pub(crate) fn error_response(status: StatusCode, body: ErrorResponse) -> Response {
    (status, Json(body)).into_response()
}

pub(crate) fn handle_validation_error(error: ValidationError) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorResponse::validation(error.field(), error.to_string()),
    )
}

pub(crate) fn handle_json_rejection(rejection: JsonRejection) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorResponse::bad_request(format!("Invalid request body: {}", rejection.body_text())),
    )
}

pub(crate) fn handle_query_rejection(rejection: QueryRejection) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        ErrorResponse::bad_request(format!("Invalid query string: {}", rejection.body_text())),
    )
}

pub(crate) fn handle_submission_error(error: SubmissionError) -> Response {
    match error {
        SubmissionError::NotFound(id) => error_response(
            StatusCode::NOT_FOUND,
            ErrorResponse::not_found("Submission", &id.to_string()),
        ),
        SubmissionError::AlreadyExists(id) => error_response(
            StatusCode::CONFLICT,
            ErrorResponse {
                details: Some(serde_json::json!({ "id": id.to_string() })),
                ..ErrorResponse::new(
                    ErrorCode::SubmissionAlreadyExists,
                    format!("Submission already exists: {}", id),
                )
            },
        ),
        SubmissionError::ValidationFailed { field, message } => error_response(
            StatusCode::BAD_REQUEST,
            ErrorResponse::validation(&field, message),
        ),
        SubmissionError::Infrastructure(msg) => {
            tracing::error!("Submission request failed: {}", msg);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(ErrorCode::DatabaseError, "Storage is unavailable"),
            )
        }
    }
}

pub(crate) fn handle_domain_error(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::SubmissionNotFound | ErrorCode::CountryNotFound => StatusCode::NOT_FOUND,
        ErrorCode::SubmissionAlreadyExists => StatusCode::CONFLICT,
        ErrorCode::DatabaseError
        | ErrorCode::FactorSourceError
        | ErrorCode::SerializationError
        | ErrorCode::InternalError => {
            tracing::error!("Request failed: {}", error);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, ErrorResponse::from(&error))
}
