//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod country;
pub mod footprint;
pub mod submission;

pub use country::{GetCountryHandler, GetCountryQuery, ListCountriesHandler};
pub use footprint::{
    AssessFootprintCommand, AssessFootprintHandler, AssessFootprintResult,
    CalculateFootprintCommand, CalculateFootprintHandler, CalculateFootprintResult,
    GenerateRecommendationsHandler, GenerateRecommendationsQuery,
};
pub use submission::{
    GetSubmissionHandler, GetSubmissionQuery, ListSubmissionsHandler, ListSubmissionsQuery,
    DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
