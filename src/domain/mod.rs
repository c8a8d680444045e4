//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `country` - Catalog of selectable countries
//! - `emissions` - Emission factors and the fallback-resolving registry
//! - `survey` - Typed survey answers and their validation
//! - `footprint` - Pure footprint calculation and presentation insights
//! - `recommendation` - Rule-based reduction advice
//! - `submission` - Records of completed calculations

pub mod country;
pub mod emissions;
pub mod footprint;
pub mod foundation;
pub mod recommendation;
pub mod submission;
pub mod survey;
