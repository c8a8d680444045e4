//! Flight emission allocation.
//!
//! Every flight is a round trip, scaled by the radiative forcing factor for
//! high-altitude effects. When flying is the primary mode the caller's
//! average distance drives the band distances; otherwise fixed standard
//! distances are used.

use crate::domain::emissions::{FactorCategory, FactorLookup};
use crate::domain::survey::TransportProfile;

/// Standard one-way distance for a short-haul flight, miles.
pub const SHORT_HAUL_MILES: f64 = 500.0;

/// Standard one-way distance for a long-haul flight, miles.
pub const LONG_HAUL_MILES: f64 = 2500.0;

/// Boundary between short and long haul, miles.
pub const HAUL_BOUNDARY_MILES: f64 = 1000.0;

/// Upper edge of the medium band, miles.
pub const MEDIUM_BAND_MAX_MILES: f64 = 2000.0;

/// Share of short and long flights re-allocated to the medium band.
pub const MEDIUM_BAND_SHARE: f64 = 0.3;

/// Per-band factors resolved once per calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightFactors {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
    pub radiative_forcing: f64,
}

impl FlightFactors {
    pub fn resolve(factors: &impl FactorLookup) -> Self {
        Self {
            short: factors.lookup(FactorCategory::Flight, "short"),
            medium: factors.lookup(FactorCategory::Flight, "medium"),
            long: factors.lookup(FactorCategory::Flight, "long"),
            radiative_forcing: factors.lookup(FactorCategory::Flight, "rf_factor"),
        }
    }

    /// Tonnes CO2e per year for `count` round trips of `miles` each.
    fn round_trips(&self, count: f64, factor: f64, miles: f64) -> f64 {
        count * factor * miles * 2.0 * self.radiative_forcing / 1000.0
    }
}

/// Emissions when flying is the primary mode of transport.
///
/// Short flights use the average distance unless it exceeds the haul
/// boundary; long flights use it unless it falls below. An average inside
/// `[1000, 2000]` adds a medium-band estimate on top of both.
pub fn primary_flight_emissions(transport: &TransportProfile, factors: &FlightFactors) -> f64 {
    let short_count = transport.short_flight_count();
    let long_count = transport.long_flight_count();
    let average = transport.avg_flight_distance.filter(|d| *d > 0.0);

    let mut total = 0.0;

    if short_count > 0 {
        let miles = match average {
            Some(d) if d <= HAUL_BOUNDARY_MILES => d,
            _ => SHORT_HAUL_MILES,
        };
        total += factors.round_trips(f64::from(short_count), factors.short, miles);
    }

    if let Some(d) = average {
        if (HAUL_BOUNDARY_MILES..=MEDIUM_BAND_MAX_MILES).contains(&d) {
            let medium_count = medium_band_count(short_count, long_count);
            if medium_count > 0.0 {
                total += factors.round_trips(medium_count, factors.medium, d);
            }
        }
    }

    if long_count > 0 {
        let miles = match average {
            Some(d) if d >= HAUL_BOUNDARY_MILES => d,
            _ => LONG_HAUL_MILES,
        };
        total += factors.round_trips(f64::from(long_count), factors.long, miles);
    }

    total
}

/// Emissions for flights taken alongside a ground-based primary mode.
pub fn secondary_flight_emissions(transport: &TransportProfile, factors: &FlightFactors) -> f64 {
    let short = factors.round_trips(
        f64::from(transport.short_flight_count()),
        factors.short,
        SHORT_HAUL_MILES,
    );
    let long = factors.round_trips(
        f64::from(transport.long_flight_count()),
        factors.long,
        LONG_HAUL_MILES,
    );
    short + long
}

/// Number of flights attributed to the medium band. Overlaps with the
/// short and long counts.
pub fn medium_band_count(short_flights: u32, long_flights: u32) -> f64 {
    (MEDIUM_BAND_SHARE * f64::from(short_flights) + MEDIUM_BAND_SHARE * f64::from(long_flights))
        .round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emissions::{builtin_factors, EmissionFactorRegistry};

    fn factors() -> FlightFactors {
        FlightFactors::resolve(&EmissionFactorRegistry::from_factors(builtin_factors()))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn resolves_seeded_band_factors() {
        let f = factors();
        assert_eq!(f.short, 0.28);
        assert_eq!(f.medium, 0.22);
        assert_eq!(f.long, 0.18);
        assert_eq!(f.radiative_forcing, 1.9);
    }

    #[test]
    fn short_flights_at_average_distance() {
        let transport = TransportProfile {
            short_flights: Some(3),
            avg_flight_distance: Some(500.0),
            ..Default::default()
        };
        // 3 * 0.28 * 500 * 2 * 1.9 / 1000
        assert!(approx(primary_flight_emissions(&transport, &factors()), 1.596));
    }

    #[test]
    fn long_average_is_overridden_for_short_flights() {
        let transport = TransportProfile {
            short_flights: Some(1),
            avg_flight_distance: Some(3000.0),
            ..Default::default()
        };
        let expected = 0.28 * SHORT_HAUL_MILES * 2.0 * 1.9 / 1000.0;
        assert!(approx(primary_flight_emissions(&transport, &factors()), expected));
    }

    #[test]
    fn short_average_is_overridden_for_long_flights() {
        let transport = TransportProfile {
            long_flights: Some(2),
            avg_flight_distance: Some(400.0),
            ..Default::default()
        };
        let expected = 2.0 * 0.18 * LONG_HAUL_MILES * 2.0 * 1.9 / 1000.0;
        assert!(approx(primary_flight_emissions(&transport, &factors()), expected));
    }

    #[test]
    fn absent_average_uses_standard_distances() {
        let transport = TransportProfile {
            short_flights: Some(1),
            long_flights: Some(1),
            ..Default::default()
        };
        let f = factors();
        let expected = (0.28 * 500.0 + 0.18 * 2500.0) * 2.0 * 1.9 / 1000.0;
        assert!(approx(primary_flight_emissions(&transport, &f), expected));
        assert!(approx(secondary_flight_emissions(&transport, &f), expected));
    }

    #[test]
    fn medium_band_adds_estimate_on_top() {
        let transport = TransportProfile {
            short_flights: Some(4),
            long_flights: Some(2),
            avg_flight_distance: Some(1500.0),
            ..Default::default()
        };
        // short: average > 1000 so 500 mi; long: 1500 mi; medium: round(1.2 + 0.6) = 2
        let short = 4.0 * 0.28 * 500.0 * 2.0 * 1.9 / 1000.0;
        let medium = 2.0 * 0.22 * 1500.0 * 2.0 * 1.9 / 1000.0;
        let long = 2.0 * 0.18 * 1500.0 * 2.0 * 1.9 / 1000.0;
        assert!(approx(
            primary_flight_emissions(&transport, &factors()),
            short + medium + long
        ));
    }

    #[test]
    fn medium_band_edges_are_inclusive() {
        let at = |distance: f64| TransportProfile {
            short_flights: Some(4),
            long_flights: Some(2),
            avg_flight_distance: Some(distance),
            ..Default::default()
        };
        let f = factors();

        // 1000 mi: short flights keep the average, medium band applies
        let short = 4.0 * 0.28 * 1000.0 * 2.0 * 1.9 / 1000.0;
        let medium = 2.0 * 0.22 * 1000.0 * 2.0 * 1.9 / 1000.0;
        let long = 2.0 * 0.18 * 1000.0 * 2.0 * 1.9 / 1000.0;
        assert!(approx(short + medium + long, 7.296));
        assert!(approx(primary_flight_emissions(&at(1000.0), &f), 7.296));

        // 2000 mi: short flights fall back to 500 mi, medium band still applies
        assert!(approx(primary_flight_emissions(&at(2000.0), &f), 8.208));

        // just past 2000 mi: no medium allocation
        let short = 4.0 * 0.28 * SHORT_HAUL_MILES * 2.0 * 1.9 / 1000.0;
        let long = 2.0 * 0.18 * 2000.5 * 2.0 * 1.9 / 1000.0;
        assert!(approx(primary_flight_emissions(&at(2000.5), &f), short + long));
    }

    #[test]
    fn medium_band_count_rounds() {
        assert_eq!(medium_band_count(0, 0), 0.0);
        assert_eq!(medium_band_count(1, 0), 0.0);
        assert_eq!(medium_band_count(2, 0), 1.0);
        assert_eq!(medium_band_count(4, 2), 2.0);
    }

    #[test]
    fn secondary_ignores_average_distance() {
        let transport = TransportProfile {
            long_flights: Some(1),
            avg_flight_distance: Some(1500.0),
            ..Default::default()
        };
        let expected = 0.18 * LONG_HAUL_MILES * 2.0 * 1.9 / 1000.0;
        assert!(approx(secondary_flight_emissions(&transport, &factors()), expected));
    }
}
