//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresCountryStore` - Reads the `countries` catalog
//! - `PostgresEmissionFactorStore` - Reads the `emission_factors` table
//! - `PostgresSubmissionRepository` - Write-once `footprint_submissions` store
//! - `connect_pool` - Pool construction plus embedded migrations

mod country_store;
mod emission_factor_store;
mod pool;
mod submission_repository;

pub use country_store::PostgresCountryStore;
pub use emission_factor_store::PostgresEmissionFactorStore;
pub use pool::connect_pool;
pub use submission_repository::PostgresSubmissionRepository;
