//! Read-only pricing reference data
//!
//! Shared across concurrent sessions; nothing here is mutated at runtime.

use crate::domain::{CostCategory, ItemCategory};

/// Cost-of-living multipliers for known destinations, matched by substring
pub const DESTINATION_COST_MULTIPLIERS: &[(&str, f64)] = &[
    // High cost cities
    ("new york", 1.3),
    ("san francisco", 1.4),
    ("london", 1.2),
    ("paris", 1.2),
    ("tokyo", 1.3),
    ("zurich", 1.5),
    ("singapore", 1.2),
    // Medium cost cities
    ("chicago", 1.1),
    ("seattle", 1.1),
    ("berlin", 1.0),
    ("amsterdam", 1.1),
    ("sydney", 1.2),
    // Lower cost cities
    ("bangkok", 0.6),
    ("budapest", 0.7),
    ("prague", 0.8),
    ("mexico city", 0.7),
    ("mumbai", 0.5),
];

/// Multiplier for a destination, 1.0 when unmatched
pub fn destination_multiplier(destination: &str) -> f64 {
    let wanted = destination.to_lowercase();
    DESTINATION_COST_MULTIPLIERS
        .iter()
        .find(|(city, _)| wanted.contains(city))
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(1.0)
}

/// Default per-person cost in USD for a category when an item has no price
pub fn default_category_cost(category: ItemCategory) -> f64 {
    match category {
        ItemCategory::Cultural => 15.0,
        ItemCategory::Sightseeing => 10.0,
        ItemCategory::Outdoor => 5.0,
        ItemCategory::Entertainment => 25.0,
        ItemCategory::Shopping => 0.0,
        ItemCategory::Dining => 25.0,
        ItemCategory::Accommodation => 80.0,
        ItemCategory::Transport => 15.0,
    }
}

/// Which breakdown category an item's cost accrues to
pub fn cost_category_for(category: ItemCategory) -> CostCategory {
    match category {
        ItemCategory::Dining => CostCategory::Dining,
        ItemCategory::Cultural | ItemCategory::Sightseeing => CostCategory::Attractions,
        ItemCategory::Entertainment => CostCategory::Entertainment,
        ItemCategory::Shopping => CostCategory::Shopping,
        ItemCategory::Transport => CostCategory::Transport,
        ItemCategory::Outdoor | ItemCategory::Accommodation => CostCategory::Activities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_multiplier_substring_match() {
        assert_eq!(destination_multiplier("Bangkok"), 0.6);
        assert_eq!(destination_multiplier("Bangkok, Thailand"), 0.6);
        assert_eq!(destination_multiplier("Greater Tokyo Area"), 1.3);
    }

    #[test]
    fn test_destination_multiplier_default() {
        assert_eq!(destination_multiplier("Ulaanbaatar"), 1.0);
        assert_eq!(destination_multiplier(""), 1.0);
    }

    #[test]
    fn test_category_defaults() {
        assert_eq!(default_category_cost(ItemCategory::Cultural), 15.0);
        assert_eq!(default_category_cost(ItemCategory::Shopping), 0.0);
        assert_eq!(default_category_cost(ItemCategory::Transport), 15.0);
    }

    #[test]
    fn test_cost_category_mapping() {
        assert_eq!(cost_category_for(ItemCategory::Sightseeing), CostCategory::Attractions);
        assert_eq!(cost_category_for(ItemCategory::Cultural), CostCategory::Attractions);
        assert_eq!(cost_category_for(ItemCategory::Outdoor), CostCategory::Activities);
        assert_eq!(cost_category_for(ItemCategory::Dining), CostCategory::Dining);
    }
}
