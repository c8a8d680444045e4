//! HTTP adapters - REST API implementations.
//!
//! Each area has its own dto/handlers/routes module; `router` stitches them
//! together under `/api`.

pub mod country;
mod error;
pub mod factors;
pub mod footprint;
mod router;
pub mod submission;

pub use error::ErrorResponse;
pub use router::{app_router, HealthResponse};
