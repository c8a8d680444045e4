//! HTTP routes for the country catalog.

use axum::{routing::get, Router};

use super::handlers::{get_country, list_countries, CountryHandlers};

/// Creates the country router, mounted under `/api`.
pub fn country_routes(handlers: CountryHandlers) -> Router {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/:code", get(get_country))
        .with_state(handlers)
}
