//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CountryStore` - Read-only country catalog
//! - `EmissionFactorStore` - Source of emission factor rows
//! - `SubmissionRepository` - Write-once store for submission records

mod country_store;
mod emission_factor_store;
mod submission_repository;

pub use country_store::CountryStore;
pub use emission_factor_store::EmissionFactorStore;
pub use submission_repository::SubmissionRepository;
