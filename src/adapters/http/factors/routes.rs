//! HTTP routes for emission factor endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_factors, reload_factors, FactorHandlers};

/// Creates the emission factor router, mounted under `/api`.
pub fn factor_routes(handlers: FactorHandlers) -> Router {
    Router::new()
        .route("/emission-factors", get(list_factors))
        .route("/emission-factors/reload", post(reload_factors))
        .with_state(handlers)
}
