//! HTTP adapter for footprint endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CalculateFootprintResponse, RecommendationsRequest, RecommendationsResponse, SurveyPayload,
};
pub use handlers::FootprintHandlers;
pub use routes::footprint_routes;
