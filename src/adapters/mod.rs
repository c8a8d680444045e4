//! Adapters - Implementations of port interfaces.
//!
//! - `factors` - Builtin and YAML emission factor sources
//! - `http` - axum REST surface
//! - `postgres` - sqlx-backed factor store, country store and submission repository
//! - `storage` - In-memory submission repository and builtin country catalog

pub mod factors;
pub mod http;
pub mod postgres;
pub mod storage;

pub use factors::{BuiltinFactorStore, YamlFactorStore};
pub use http::app_router;
pub use postgres::{
    connect_pool, PostgresCountryStore, PostgresEmissionFactorStore, PostgresSubmissionRepository,
};
pub use storage::{BuiltinCountryStore, InMemorySubmissionRepository};
