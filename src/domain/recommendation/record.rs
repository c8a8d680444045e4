//! Recommendation record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Area of life a recommendation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationCategory {
    Home,
    Transport,
    Food,
    General,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Home => "home",
            RecommendationCategory::Transport => "transport",
            RecommendationCategory::Food => "food",
            RecommendationCategory::General => "general",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reduction tip with its estimated annual saving in tonnes CO2e.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub icon_name: String,
    pub potential_reduction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_wire_shape() {
        let rec = Recommendation {
            id: "rec5".to_string(),
            category: RecommendationCategory::Food,
            title: "t".to_string(),
            description: "d".to_string(),
            icon_name: "restaurant-line".to_string(),
            potential_reduction: 0.3,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["category"], "food");
        assert_eq!(json["iconName"], "restaurant-line");
        assert_eq!(json["potentialReduction"], 0.3);
    }
}
