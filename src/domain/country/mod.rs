//! Country module - the catalog of countries offered for location selection.
//!
//! - `Country` - one catalog entry with its per-person average and
//!   headline emission factors
//! - `builtin_countries` - seed catalog used when no database is configured

mod builtin;
mod profile;

pub use builtin::builtin_countries;
pub use profile::{normalize_country_code, Country};
