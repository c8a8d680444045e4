//! HTTP routes for footprint endpoints.

use axum::{routing::post, Router};

use super::handlers::{
    assess_footprint, calculate_footprint, generate_recommendations, FootprintHandlers,
};

/// Creates the footprint router, mounted under `/api`.
pub fn footprint_routes(handlers: FootprintHandlers) -> Router {
    Router::new()
        .route("/calculate-footprint", post(calculate_footprint))
        .route("/recommendations", post(generate_recommendations))
        .route("/assessments", post(assess_footprint))
        .with_state(handlers)
}
