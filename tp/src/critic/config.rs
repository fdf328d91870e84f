//! Critic configuration

use serde::{Deserialize, Serialize};

/// Quality thresholds for day critique
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CriticConfig {
    /// Minimum averaged score for approval
    #[serde(rename = "minimum-score")]
    pub minimum_score: f64,

    /// Maximum acceptable travel-time-to-activity-time ratio
    #[serde(rename = "max-travel-ratio")]
    pub max_travel_ratio: f64,

    /// Minimum acceptable item duration in minutes
    #[serde(rename = "min-activity-minutes")]
    pub min_activity_minutes: i64,

    /// Maximum acceptable item duration in minutes
    #[serde(rename = "max-activity-minutes")]
    pub max_activity_minutes: i64,

    /// Maximum acceptable day span in minutes
    #[serde(rename = "max-day-minutes")]
    pub max_day_minutes: i64,

    /// Minimum acceptable break between items, net of travel
    #[serde(rename = "min-break-minutes")]
    pub min_break_minutes: i64,

    /// Coordinate spread (degrees) above which a day counts as dispersed
    #[serde(rename = "max-coordinate-spread")]
    pub max_coordinate_spread: f64,
}

impl Default for CriticConfig {
    fn default() -> Self {
        Self {
            minimum_score: 70.0,
            max_travel_ratio: 0.4,
            min_activity_minutes: 30,
            max_activity_minutes: 240,
            max_day_minutes: 12 * 60,
            min_break_minutes: 15,
            max_coordinate_spread: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_quality_thresholds() {
        let config = CriticConfig::default();
        assert_eq!(config.minimum_score, 70.0);
        assert_eq!(config.max_travel_ratio, 0.4);
        assert_eq!(config.max_day_minutes, 720);
        assert_eq!(config.min_break_minutes, 15);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: CriticConfig = serde_yaml::from_str("minimum-score: 80").unwrap();
        assert_eq!(config.minimum_score, 80.0);
        assert_eq!(config.max_travel_ratio, 0.4);
    }
}
