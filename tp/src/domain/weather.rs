//! Per-day weather forecast slice

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Precipitation probability above which a day is treated as adverse
pub const ADVERSE_PRECIPITATION_THRESHOLD: f64 = 0.5;

/// Condition keywords that mark a day as adverse regardless of probability
const ADVERSE_CONDITIONS: &[&str] = &["rain", "storm", "snow"];

/// Forecast for a single calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayForecast {
    /// Calendar date this forecast covers
    pub date: NaiveDate,

    /// Condition keyword, e.g. "clear", "rain", "thunderstorm"
    pub condition: String,

    /// Probability of precipitation, 0.0..=1.0
    #[serde(default)]
    pub precipitation_probability: f64,

    /// Forecast high in Celsius
    #[serde(default)]
    pub high_c: Option<f64>,

    /// Forecast low in Celsius
    #[serde(default)]
    pub low_c: Option<f64>,
}

impl DayForecast {
    /// A neutral forecast used when weather data is unavailable
    pub fn unknown(date: NaiveDate) -> Self {
        Self {
            date,
            condition: String::new(),
            precipitation_probability: 0.0,
            high_c: None,
            low_c: None,
        }
    }

    /// Whether this day should steer scheduling toward indoor venues
    pub fn is_adverse(&self) -> bool {
        let condition = self.condition.to_lowercase();
        if ADVERSE_CONDITIONS.iter().any(|kw| condition.contains(kw)) {
            return true;
        }
        self.precipitation_probability > ADVERSE_PRECIPITATION_THRESHOLD
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        if self.condition.is_empty() {
            return "forecast unavailable".to_string();
        }
        match (self.high_c, self.low_c) {
            (Some(hi), Some(lo)) => format!("{}, {:.0}-{:.0}C", self.condition, lo, hi),
            _ => self.condition.clone(),
        }
    }
}
