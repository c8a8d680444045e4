//! Location value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::emissions::GLOBAL_REGION;
use crate::domain::foundation::ValidationError;

const MAX_LENGTH: usize = 20;

/// Region code selecting region-specific emission factors.
///
/// Stored lower-case. A missing or blank location becomes `"global"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    /// The worldwide fallback location.
    pub fn global() -> Self {
        Self(GLOBAL_REGION.to_string())
    }

    /// Parses a caller-supplied location, defaulting absent or blank input to
    /// `"global"`.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Ok(Self::global());
        }
        Self::new(trimmed)
    }

    /// Creates a location from a non-empty code.
    pub fn new(code: &str) -> Result<Self, ValidationError> {
        let code = code.trim().to_ascii_lowercase();
        if code.is_empty() {
            return Err(ValidationError::empty_field("location"));
        }
        if code.len() > MAX_LENGTH {
            return Err(ValidationError::invalid_format(
                "location",
                format!("must be at most {} characters", MAX_LENGTH),
            ));
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::invalid_format(
                "location",
                "only letters, digits, '_' and '-' are allowed",
            ));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_global(&self) -> bool {
        self.0 == GLOBAL_REGION
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::global()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Location {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Location::parse(Some(&value))
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_defaults_to_global() {
        assert!(Location::parse(None).unwrap().is_global());
        assert!(Location::parse(Some("   ")).unwrap().is_global());
    }

    #[test]
    fn codes_are_lowercased() {
        assert_eq!(Location::parse(Some(" US ")).unwrap().as_str(), "us");
    }

    #[test]
    fn rejects_bad_characters() {
        let err = Location::parse(Some("us; drop table")).unwrap_err();
        assert_eq!(err.field(), "location");
    }

    #[test]
    fn rejects_overlong_codes() {
        assert!(Location::parse(Some("abcdefghijklmnopqrstuvwxyz")).is_err());
    }

    #[test]
    fn accepts_non_region_codes() {
        assert_eq!(Location::parse(Some("other")).unwrap().as_str(), "other");
    }

    #[test]
    fn serde_round_trip_validates() {
        let loc: Location = serde_json::from_str("\"CA\"").unwrap();
        assert_eq!(loc.as_str(), "ca");
        assert_eq!(serde_json::to_string(&loc).unwrap(), "\"ca\"");
        assert!(serde_json::from_str::<Location>("\"a b\"").is_err());
    }
}
