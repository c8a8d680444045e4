//! EcoTracker - carbon footprint estimation service
//!
//! Turns a lifestyle survey into annual CO2-equivalent emissions (tonnes)
//! split across home energy, transport and food, then proposes
//! category-specific reductions.
//!
//! Layout:
//! - `domain` - factor registry, calculator, recommendation engine
//! - `ports` - storage seams for factors and submissions
//! - `application` - command/query handlers
//! - `adapters` - HTTP, PostgreSQL, YAML and in-memory implementations
//! - `config` - environment-driven settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
