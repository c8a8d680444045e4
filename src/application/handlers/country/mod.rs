//! Country catalog query handlers.

mod get_country;
mod list_countries;

pub use get_country::{GetCountryHandler, GetCountryQuery};
pub use list_countries::ListCountriesHandler;
