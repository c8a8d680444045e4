//! Storage Adapters
//!
//! In-process implementations of the SubmissionRepository and
//! CountryStore ports.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemorySubmissionRepository;
//!
//! let repo = InMemorySubmissionRepository::new();
//! ```

mod builtin_country_store;
mod in_memory_submission_repository;

pub use builtin_country_store::BuiltinCountryStore;
pub use in_memory_submission_repository::InMemorySubmissionRepository;
