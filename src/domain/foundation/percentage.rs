//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number share between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Share of `part` in `whole`, rounded to the nearest whole percent and
    /// clamped to 0..=100.
    ///
    /// A zero (or non-positive) whole yields 0% rather than dividing.
    pub fn from_ratio(part: f64, whole: f64) -> Self {
        if whole <= 0.0 || !whole.is_finite() || !part.is_finite() {
            return Self::ZERO;
        }
        let pct = (part / whole * 100.0).round();
        Self(pct.clamp(0.0, 100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(101).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn from_ratio_rounds_to_nearest_percent() {
        assert_eq!(Percentage::from_ratio(8.1, 14.5).value(), 56);
        assert_eq!(Percentage::from_ratio(1.0, 3.0).value(), 33);
        assert_eq!(Percentage::from_ratio(2.0, 3.0).value(), 67);
    }

    #[test]
    fn from_ratio_zero_whole_is_zero() {
        assert_eq!(Percentage::from_ratio(5.0, 0.0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(0.0, 0.0), Percentage::ZERO);
    }

    #[test]
    fn from_ratio_clamps_overflowing_share() {
        assert_eq!(Percentage::from_ratio(10.0, 4.0), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_displays_and_serializes() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(serde_json::to_string(&Percentage::new(42)).unwrap(), "42");
    }
}
