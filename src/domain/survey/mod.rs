//! Survey module - typed survey answers and the location value object.

mod input;
mod location;
mod macros;

pub use input::{
    CalculationType, CarType, HomeProfile, HomeType, HomeUnit, IncomeRange, PrimaryTransport,
    SurveyInput, TransportProfile, GREEN_ENERGY_SOURCE,
};
pub use location::Location;
