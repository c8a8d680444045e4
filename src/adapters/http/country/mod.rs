//! HTTP adapter for the country catalog.

mod handlers;
mod routes;

pub use handlers::{CountryHandlers, CountryListResponse, CountryResponse};
pub use routes::country_routes;
