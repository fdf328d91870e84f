//! Scheduler configuration

use serde::{Deserialize, Serialize};

use crate::domain::Pace;

/// Tunable constants for daily-schedule construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Non-dining items per day at slow pace
    #[serde(rename = "slow-pace-activities")]
    pub slow_pace_activities: usize,

    /// Non-dining items per day at moderate pace
    #[serde(rename = "moderate-pace-activities")]
    pub moderate_pace_activities: usize,

    /// Non-dining items per day at fast pace
    #[serde(rename = "fast-pace-activities")]
    pub fast_pace_activities: usize,

    /// Hour of day the first item starts (24h clock)
    #[serde(rename = "day-start-hour")]
    pub day_start_hour: u32,

    /// Fixed buffer between items, on top of travel time
    #[serde(rename = "buffer-minutes")]
    pub buffer_minutes: i64,

    /// Maximum items in the morning activity block
    #[serde(rename = "morning-block-size")]
    pub morning_block_size: usize,

    /// Maximum items in the afternoon activity block
    #[serde(rename = "afternoon-block-size")]
    pub afternoon_block_size: usize,

    /// Per-person day cost above which a high-cost note is attached
    #[serde(rename = "high-cost-threshold")]
    pub high_cost_threshold: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            slow_pace_activities: 3,
            moderate_pace_activities: 4,
            fast_pace_activities: 6,
            day_start_hour: 9,
            buffer_minutes: 30,
            morning_block_size: 2,
            afternoon_block_size: 2,
            high_cost_threshold: 100.0,
        }
    }
}

impl SchedulerConfig {
    /// Non-dining activity budget for a pace
    pub fn activity_budget(&self, pace: Pace) -> usize {
        match pace {
            Pace::Slow => self.slow_pace_activities,
            Pace::Moderate => self.moderate_pace_activities,
            Pace::Fast => self.fast_pace_activities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pace_budgets() {
        let config = SchedulerConfig::default();
        assert_eq!(config.activity_budget(Pace::Slow), 3);
        assert_eq!(config.activity_budget(Pace::Moderate), 4);
        assert_eq!(config.activity_budget(Pace::Fast), 6);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SchedulerConfig = serde_yaml::from_str("slow-pace-activities: 2").unwrap();
        assert_eq!(config.slow_pace_activities, 2);
        assert_eq!(config.moderate_pace_activities, 4);
        assert_eq!(config.buffer_minutes, 30);
    }
}
