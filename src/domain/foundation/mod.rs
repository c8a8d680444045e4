//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types used across the
//! emissions, footprint, recommendation and submission modules.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SubmissionId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
