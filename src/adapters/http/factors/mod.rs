//! HTTP adapter for emission factor endpoints.

mod handlers;
mod routes;

pub use handlers::{FactorHandlers, FactorListResponse, ReloadResponse};
pub use routes::factor_routes;
