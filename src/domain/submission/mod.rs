//! Submission module - persisted calculation records.

mod errors;
mod record;

pub use errors::SubmissionError;
pub use record::SubmissionRecord;
