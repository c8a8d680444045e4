//! HTTP handlers for country endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::adapters::http::error::handle_domain_error;
use crate::application::{GetCountryHandler, GetCountryQuery, ListCountriesHandler};
use crate::domain::country::Country;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CountryHandlers {
    list_handler: Arc<ListCountriesHandler>,
    get_handler: Arc<GetCountryHandler>,
}

impl CountryHandlers {
    pub fn new(list_handler: Arc<ListCountriesHandler>, get_handler: Arc<GetCountryHandler>) -> Self {
        Self {
            list_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct CountryListResponse {
    pub countries: Vec<Country>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryResponse {
    pub country: Country,
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/countries - List the catalog, ordered by name
pub async fn list_countries(State(handlers): State<CountryHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(countries) => (StatusCode::OK, Json(CountryListResponse { countries })).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/countries/:code - Get one country
pub async fn get_country(
    State(handlers): State<CountryHandlers>,
    Path(code): Path<String>,
) -> Response {
    match handlers.get_handler.handle(GetCountryQuery { code }).await {
        Ok(country) => (StatusCode::OK, Json(CountryResponse { country })).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
