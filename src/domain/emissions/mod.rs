//! Emissions module - emission factor data and the factor registry.
//!
//! # Components
//!
//! - `EmissionFactor` / `FactorCategory` - one row of the factor table
//! - `EmissionFactorRegistry` - immutable snapshot with a fallback chain that
//!   never fails a lookup
//! - `builtin_factors` - seed rows used when no external source is configured

mod builtin;
mod factor;
mod registry;

pub use builtin::builtin_factors;
pub use factor::{is_region_code, EmissionFactor, FactorCategory, GLOBAL_REGION};
pub use registry::{EmissionFactorRegistry, FactorLookup, Resolution, ResolutionTier};
