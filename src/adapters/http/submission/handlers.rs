//! HTTP handlers for submission endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    error_response, handle_query_rejection, handle_submission_error, ErrorResponse,
};
use crate::application::handlers::submission::{
    GetSubmissionHandler, GetSubmissionQuery, ListSubmissionsHandler, ListSubmissionsQuery,
};
use crate::domain::foundation::SubmissionId;

use super::dto::{ListSubmissionsParams, SubmissionListResponse, SubmissionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SubmissionHandlers {
    get_handler: Arc<GetSubmissionHandler>,
    list_handler: Arc<ListSubmissionsHandler>,
}

impl SubmissionHandlers {
    pub fn new(get_handler: Arc<GetSubmissionHandler>, list_handler: Arc<ListSubmissionsHandler>) -> Self {
        Self {
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/submissions/:id - Get a submission record
pub async fn get_submission(
    State(handlers): State<SubmissionHandlers>,
    Path(submission_id): Path<String>,
) -> Response {
    let submission_id = match submission_id.parse::<SubmissionId>() {
        Ok(id) => id,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation("id", "Invalid submission ID"),
            )
        }
    };

    match handlers
        .get_handler
        .handle(GetSubmissionQuery { submission_id })
        .await
    {
        Ok(record) => (StatusCode::OK, Json(SubmissionResponse::from(&record))).into_response(),
        Err(e) => handle_submission_error(e),
    }
}

/// GET /api/submissions - List recent submissions
pub async fn list_submissions(
    State(handlers): State<SubmissionHandlers>,
    params: Result<Query<ListSubmissionsParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return handle_query_rejection(rejection),
    };

    match handlers
        .list_handler
        .handle(ListSubmissionsQuery {
            limit: params.limit,
        })
        .await
    {
        Ok(records) => {
            let response = SubmissionListResponse::from(records.as_slice());
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_submission_error(e),
    }
}
