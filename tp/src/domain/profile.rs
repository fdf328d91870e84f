//! Traveler profile types
//!
//! The profile drives scheduling density (pace), pricing (spend tier), and
//! the critic's alignment checks.

use serde::{Deserialize, Serialize};

/// Declared budget category for the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SpendTier {
    #[serde(rename = "budget")]
    Budget,
    #[default]
    #[serde(rename = "mid-range")]
    MidRange,
    #[serde(rename = "luxury")]
    Luxury,
}

impl SpendTier {
    /// Multiplier applied to baseline costs for this tier
    pub fn cost_multiplier(&self) -> f64 {
        match self {
            Self::Budget => 0.7,
            Self::MidRange => 1.0,
            Self::Luxury => 1.8,
        }
    }

    /// Expected per-person daily spend range (USD) for this tier
    pub fn expected_daily_range(&self) -> (f64, f64) {
        match self {
            Self::Budget => (40.0, 80.0),
            Self::MidRange => (80.0, 150.0),
            Self::Luxury => (150.0, 300.0),
        }
    }
}

impl std::fmt::Display for SpendTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budget => write!(f, "budget"),
            Self::MidRange => write!(f, "mid-range"),
            Self::Luxury => write!(f, "luxury"),
        }
    }
}

/// How densely a traveler wants their days packed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    Slow,
    #[default]
    Moderate,
    Fast,
}

impl std::fmt::Display for Pace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slow => write!(f, "slow"),
            Self::Moderate => write!(f, "moderate"),
            Self::Fast => write!(f, "fast"),
        }
    }
}

/// Broad travel-style tags used for profile alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    Cultural,
    Adventure,
    Relaxation,
    Foodie,
    Nightlife,
    Shopping,
    Family,
}

/// Traveler profile consumed by the critic and scheduler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerProfile {
    /// Declared spend tier
    pub spend_tier: SpendTier,

    /// Preferred daily pace
    pub pace: Pace,

    /// Travel-style tags
    #[serde(default)]
    pub travel_styles: Vec<TravelStyle>,

    /// Free-text interest keywords
    #[serde(default)]
    pub interests: Vec<String>,

    /// Number of people traveling together
    pub group_size: u32,

    /// Hard per-day spending cap in USD, if declared
    #[serde(default)]
    pub daily_budget_max: Option<f64>,
}

impl TravelerProfile {
    /// Create a profile with defaults for everything but group size
    pub fn new(group_size: u32) -> Self {
        Self {
            spend_tier: SpendTier::default(),
            pace: Pace::default(),
            travel_styles: Vec::new(),
            interests: Vec::new(),
            group_size: group_size.max(1),
            daily_budget_max: None,
        }
    }

    /// Builder method to set the spend tier
    pub fn with_tier(mut self, tier: SpendTier) -> Self {
        self.spend_tier = tier;
        self
    }

    /// Builder method to set the pace
    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    /// Builder method to set travel styles
    pub fn with_styles(mut self, styles: Vec<TravelStyle>) -> Self {
        self.travel_styles = styles;
        self
    }

    /// Builder method to set interest keywords
    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }

    /// Builder method to set the daily budget cap
    pub fn with_daily_budget(mut self, max: f64) -> Self {
        self.daily_budget_max = Some(max);
        self
    }
}

impl Default for TravelerProfile {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_multipliers() {
        assert_eq!(SpendTier::Budget.cost_multiplier(), 0.7);
        assert_eq!(SpendTier::MidRange.cost_multiplier(), 1.0);
        assert_eq!(SpendTier::Luxury.cost_multiplier(), 1.8);
    }

    #[test]
    fn test_tier_serde_uses_kebab_midrange() {
        let json = serde_json::to_string(&SpendTier::MidRange).unwrap();
        assert_eq!(json, "\"mid-range\"");

        let tier: SpendTier = serde_json::from_str("\"luxury\"").unwrap();
        assert_eq!(tier, SpendTier::Luxury);
    }

    #[test]
    fn test_pace_display() {
        assert_eq!(Pace::Slow.to_string(), "slow");
        assert_eq!(Pace::Moderate.to_string(), "moderate");
        assert_eq!(Pace::Fast.to_string(), "fast");
    }

    #[test]
    fn test_profile_group_size_floor() {
        let profile = TravelerProfile::new(0);
        assert_eq!(profile.group_size, 1);
    }

    #[test]
    fn test_profile_builder() {
        let profile = TravelerProfile::new(2)
            .with_tier(SpendTier::Budget)
            .with_pace(Pace::Fast)
            .with_interests(vec!["history".to_string()])
            .with_daily_budget(120.0);

        assert_eq!(profile.spend_tier, SpendTier::Budget);
        assert_eq!(profile.pace, Pace::Fast);
        assert_eq!(profile.daily_budget_max, Some(120.0));
    }
}
