//! Meal-slot suitability, themes, and day notes
//!
//! Keyword heuristics for assigning restaurants to breakfast/lunch/dinner
//! slots, plus the theme and special-consideration generators.

use crate::domain::{Candidate, DayForecast, DayPlan, ItemCategory};

/// Keywords that mark a venue as breakfast-suitable
const BREAKFAST_KEYWORDS: &[&str] = &["cafe", "bakery", "breakfast", "coffee", "brunch"];

/// The three meal slots of a day, in schedule order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];
}

/// Whether a restaurant works for breakfast
pub fn is_breakfast_suitable(candidate: &Candidate) -> bool {
    let name = candidate.name.to_lowercase();
    let cuisine = candidate.cuisine.as_deref().unwrap_or("").to_lowercase();
    BREAKFAST_KEYWORDS.iter().any(|kw| name.contains(kw) || cuisine.contains(kw))
}

/// Whether a restaurant works for lunch
///
/// Most venues do; pure breakfast places are excluded unless they are cafes.
pub fn is_lunch_suitable(candidate: &Candidate) -> bool {
    if is_breakfast_suitable(candidate) {
        return candidate.name.to_lowercase().contains("cafe");
    }
    true
}

/// Whether a restaurant works for dinner
///
/// Cheap bakery-style venues are excluded; anything else works.
pub fn is_dinner_suitable(candidate: &Candidate) -> bool {
    let cuisine = candidate.cuisine.as_deref().unwrap_or("").to_lowercase();
    if cuisine == "bakery" && candidate.price_level.unwrap_or(2) <= 1 {
        return false;
    }
    true
}

/// Whether a restaurant fits a given slot
pub fn is_slot_suitable(candidate: &Candidate, slot: MealSlot) -> bool {
    match slot {
        MealSlot::Breakfast => is_breakfast_suitable(candidate),
        MealSlot::Lunch => is_lunch_suitable(candidate),
        MealSlot::Dinner => is_dinner_suitable(candidate),
    }
}

/// Theme label for a day from the majority category of its items
pub fn theme_for(items: &[&Candidate], adverse_weather: bool) -> String {
    if items.is_empty() {
        return "City Exploration".to_string();
    }

    let mut counts: std::collections::HashMap<ItemCategory, usize> = std::collections::HashMap::new();
    for item in items {
        *counts.entry(item.category).or_insert(0) += 1;
    }

    let dominant = counts
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(category, _)| category);

    let theme = match dominant {
        Some(ItemCategory::Cultural) => "Cultural Immersion",
        Some(ItemCategory::Sightseeing) => "City Highlights",
        Some(ItemCategory::Outdoor) => "Nature & Adventure",
        Some(ItemCategory::Entertainment) => "Entertainment & Fun",
        Some(ItemCategory::Shopping) => "Shopping & Local Markets",
        Some(ItemCategory::Dining) => "Culinary Discovery",
        _ => "City Exploration",
    };

    // A rained-out day should not advertise the outdoors
    if adverse_weather && (theme.contains("Nature") || theme.contains("Adventure")) {
        return "Indoor Exploration".to_string();
    }

    theme.to_string()
}

/// Advisory notes for a constructed day, joined with "; "
pub fn special_considerations(day: &DayPlan, forecast: &DayForecast, high_cost_threshold: f64) -> Option<String> {
    let mut notes = Vec::new();

    if forecast.is_adverse() {
        notes.push("Weather may affect outdoor activities - indoor alternatives recommended".to_string());
    }

    let outdoor_count = day.items.iter().filter(|i| i.category == ItemCategory::Outdoor).count();
    if outdoor_count > 2 {
        notes.push("Day includes multiple outdoor activities - consider weather and energy levels".to_string());
    }

    if day.dining_count() < 2 {
        notes.push("Limited dining options planned - consider additional meal stops".to_string());
    }

    if day.total_cost > high_cost_threshold {
        notes.push(format!(
            "High-cost day (${:.0}) - consider budget implications",
            day.total_cost
        ));
    }

    if notes.is_empty() { None } else { Some(notes.join("; ")) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CandidateSource;

    fn restaurant(name: &str, cuisine: Option<&str>, price_level: Option<u8>) -> Candidate {
        let mut c = Candidate::new(
            name.to_lowercase().replace(' ', "-"),
            name,
            CandidateSource::Restaurant,
            ItemCategory::Dining,
        );
        c.cuisine = cuisine.map(String::from);
        c.price_level = price_level;
        c
    }

    #[test]
    fn test_breakfast_suitability() {
        assert!(is_breakfast_suitable(&restaurant("Corner Bakery", Some("bakery"), Some(1))));
        assert!(is_breakfast_suitable(&restaurant("Morning Coffee House", None, None)));
        assert!(!is_breakfast_suitable(&restaurant("Riverside Grill", None, Some(3))));
    }

    #[test]
    fn test_lunch_excludes_pure_bakeries_but_not_cafes() {
        assert!(!is_lunch_suitable(&restaurant("Corner Bakery", Some("bakery"), Some(1))));
        assert!(is_lunch_suitable(&restaurant("Garden Cafe", None, Some(2))));
        assert!(is_lunch_suitable(&restaurant("Riverside Grill", None, Some(3))));
    }

    #[test]
    fn test_dinner_excludes_cheap_bakeries() {
        assert!(!is_dinner_suitable(&restaurant("Corner Bakery", Some("bakery"), Some(1))));
        assert!(is_dinner_suitable(&restaurant("Artisan Bakery", Some("bakery"), Some(3))));
        assert!(is_dinner_suitable(&restaurant("Riverside Grill", None, Some(3))));
    }

    #[test]
    fn test_theme_majority_category() {
        let a = Candidate::new("a", "Palace", CandidateSource::Poi, ItemCategory::Cultural);
        let b = Candidate::new("b", "Temple", CandidateSource::Poi, ItemCategory::Cultural);
        let c = Candidate::new("c", "Park", CandidateSource::Activity, ItemCategory::Outdoor);

        assert_eq!(theme_for(&[&a, &b, &c], false), "Cultural Immersion");
        assert_eq!(theme_for(&[], false), "City Exploration");
    }

    #[test]
    fn test_theme_indoor_override() {
        let a = Candidate::new("a", "Park", CandidateSource::Activity, ItemCategory::Outdoor);
        let b = Candidate::new("b", "Trail", CandidateSource::Activity, ItemCategory::Outdoor);

        assert_eq!(theme_for(&[&a, &b], false), "Nature & Adventure");
        assert_eq!(theme_for(&[&a, &b], true), "Indoor Exploration");
    }
}
