//! Submission query handlers.

mod get_submission;
mod list_submissions;

pub use get_submission::{GetSubmissionHandler, GetSubmissionQuery};
pub use list_submissions::{
    ListSubmissionsHandler, ListSubmissionsQuery, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
