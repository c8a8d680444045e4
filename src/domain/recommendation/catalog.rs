//! Fixed recommendation texts.

use super::record::{Recommendation, RecommendationCategory};

/// A static recommendation definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationTemplate {
    pub id: &'static str,
    pub category: RecommendationCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub icon_name: &'static str,
    pub potential_reduction: f64,
}

impl RecommendationTemplate {
    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            id: self.id.to_string(),
            category: self.category,
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon_name: self.icon_name.to_string(),
            potential_reduction: self.potential_reduction,
        }
    }
}

pub const THERMOSTAT: RecommendationTemplate = RecommendationTemplate {
    id: "rec1",
    category: RecommendationCategory::Home,
    title: "Optimize Home Heating & Cooling",
    description: "Installing a programmable thermostat and adjusting your temperature by just 1-2 degrees can save up to 10% on your annual energy bill and reduce emissions.",
    icon_name: "home-smile-line",
    potential_reduction: 0.5,
};

pub const RENEWABLE_ENERGY: RecommendationTemplate = RecommendationTemplate {
    id: "rec2",
    category: RecommendationCategory::Home,
    title: "Switch to Renewable Energy",
    description: "Many utility companies offer green energy options. Switching to a renewable energy plan could eliminate most of your electricity-related emissions.",
    icon_name: "plug-line",
    potential_reduction: 1.2,
};

pub const CARPOOL_OR_TRANSIT: RecommendationTemplate = RecommendationTemplate {
    id: "rec3",
    category: RecommendationCategory::Transport,
    title: "Consider Carpooling or Public Transit",
    description: "Based on your location and commute distance, carpooling with colleagues or taking public transit twice a week could significantly reduce your transportation emissions.",
    icon_name: "car-line",
    potential_reduction: 0.7,
};

pub const ALTERNATIVE_TRANSPORT: RecommendationTemplate = RecommendationTemplate {
    id: "rec3a",
    category: RecommendationCategory::Transport,
    title: "Consider Alternative Transport Modes",
    description: "For domestic travel under 500 miles, trains or buses typically have 1/5 the carbon footprint of flying. For necessary flights, choose direct routes to reduce emissions by avoiding multiple takeoffs.",
    icon_name: "train-line",
    potential_reduction: 1.5,
};

pub const CONSOLIDATE_TRAVEL: RecommendationTemplate = RecommendationTemplate {
    id: "rec3b",
    category: RecommendationCategory::Transport,
    title: "Consolidate Business Travel",
    description: "As a frequent flyer, consider consolidating business trips to reduce total flights. Each takeoff and landing contributes significantly to emissions, so fewer, longer trips are better than frequent short ones.",
    icon_name: "briefcase-4-line",
    potential_reduction: 1.2,
};

pub const OFFSET_LONG_HAUL: RecommendationTemplate = RecommendationTemplate {
    id: "rec4a",
    category: RecommendationCategory::Transport,
    title: "Offset Long-Haul Flight Emissions",
    description: "Long-haul flights contribute significantly to your carbon footprint. Consider high-quality carbon offsetting programs for essential travel, which fund renewable energy, forest conservation, or carbon capture projects.",
    icon_name: "flight-takeoff-line",
    potential_reduction: 0.8,
};

pub const REDUCE_SHORT_HAUL: RecommendationTemplate = RecommendationTemplate {
    id: "rec4b",
    category: RecommendationCategory::Transport,
    title: "Reduce Short-Haul Flights",
    description: "Short flights are actually less efficient per mile than longer ones because takeoff requires significant fuel. Consider trains, buses or carpooling for shorter trips under 500 miles when possible.",
    icon_name: "road-map-line",
    potential_reduction: 0.6,
};

pub const REDUCE_FOOD_WASTE: RecommendationTemplate = RecommendationTemplate {
    id: "rec5",
    category: RecommendationCategory::Food,
    title: "Reduce Food Waste",
    description: "Plan meals, store food properly, and compost scraps to reduce the emissions associated with food production and waste.",
    icon_name: "restaurant-line",
    potential_reduction: 0.3,
};

pub const PLANT_RICH_DIET: RecommendationTemplate = RecommendationTemplate {
    id: "rec6",
    category: RecommendationCategory::Food,
    title: "Adopt a Plant-Rich Diet",
    description: "Reducing meat consumption, especially beef and lamb, can significantly lower your dietary carbon footprint.",
    icon_name: "plant-line",
    potential_reduction: 0.5,
};

/// Every template, in rule evaluation order.
pub const ALL_TEMPLATES: [RecommendationTemplate; 9] = [
    THERMOSTAT,
    RENEWABLE_ENERGY,
    CARPOOL_OR_TRANSIT,
    ALTERNATIVE_TRANSPORT,
    CONSOLIDATE_TRAVEL,
    OFFSET_LONG_HAUL,
    REDUCE_SHORT_HAUL,
    REDUCE_FOOD_WASTE,
    PLANT_RICH_DIET,
];
