//! HTTP adapter for submission endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListSubmissionsParams, SubmissionListResponse, SubmissionResponse};
pub use handlers::SubmissionHandlers;
pub use routes::submission_routes;
