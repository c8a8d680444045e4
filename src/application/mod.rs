//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers record submissions; query handlers only read.

mod factor_snapshot;
pub mod handlers;

pub use factor_snapshot::{FactorSnapshot, SnapshotSummary};
pub use handlers::{
    AssessFootprintCommand, AssessFootprintHandler, AssessFootprintResult,
    CalculateFootprintCommand, CalculateFootprintHandler, CalculateFootprintResult,
    GenerateRecommendationsHandler, GenerateRecommendationsQuery, GetCountryHandler,
    GetCountryQuery, GetSubmissionHandler, GetSubmissionQuery, ListCountriesHandler,
    ListSubmissionsHandler, ListSubmissionsQuery,
};
