//! HTTP routes for submission endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_submission, list_submissions, SubmissionHandlers};

/// Creates the submission router, mounted under `/api`.
pub fn submission_routes(handlers: SubmissionHandlers) -> Router {
    Router::new()
        .route("/submissions", get(list_submissions))
        .route("/submissions/:id", get(get_submission))
        .with_state(handlers)
}
