//! TravelContext - the session's accumulating working set
//!
//! Each pipeline stage takes a context snapshot and returns an enriched
//! copy. Enrichment fields are append-only within a session; only the
//! proposed itinerary may be replaced wholesale during a revision cycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::budget::BudgetBreakdown;
use super::candidate::{Candidate, GeoPoint};
use super::day_plan::DayPlan;
use super::profile::TravelerProfile;
use super::weather::DayForecast;

/// A validated destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Canonical place name
    pub name: String,

    /// Coordinates of the destination center
    pub coordinates: GeoPoint,

    /// Country name
    #[serde(default)]
    pub country: Option<String>,

    /// City name when the destination resolves below country level
    #[serde(default)]
    pub city: Option<String>,
}

/// The session's accumulating working set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelContext {
    /// Destination as the traveler stated it
    pub destination: String,

    /// First day of the trip
    pub start_date: NaiveDate,

    /// Trip length in days
    pub duration_days: u32,

    /// Number of travelers
    pub travelers: u32,

    /// Traveler profile (tier, pace, styles, interests)
    pub profile: TravelerProfile,

    /// Food preference keywords
    #[serde(default)]
    pub food_preferences: Vec<String>,

    /// Activity preference keywords
    #[serde(default)]
    pub activity_preferences: Vec<String>,

    /// POI preference keywords
    #[serde(default)]
    pub poi_preferences: Vec<String>,

    // --- enrichment fields, populated progressively ---
    /// Validated location, set by the information-gathering phase
    #[serde(default)]
    pub location: Option<Location>,

    /// Per-day forecasts, set by the information-gathering phase
    #[serde(default)]
    pub weather: Vec<DayForecast>,

    /// Candidate POI pool
    #[serde(default)]
    pub pois: Vec<Candidate>,

    /// Candidate activity pool
    #[serde(default)]
    pub activities: Vec<Candidate>,

    /// Candidate restaurant pool
    #[serde(default)]
    pub restaurants: Vec<Candidate>,

    /// The proposed itinerary, one DayPlan per trip day
    #[serde(default)]
    pub itinerary: Option<Vec<DayPlan>>,

    /// Priced breakdown, set once the itinerary is approved
    #[serde(default)]
    pub budget: Option<BudgetBreakdown>,
}

impl TravelContext {
    /// Create a context with empty enrichment fields
    pub fn new(
        destination: impl Into<String>,
        start_date: NaiveDate,
        duration_days: u32,
        travelers: u32,
        profile: TravelerProfile,
    ) -> Self {
        Self {
            destination: destination.into(),
            start_date,
            duration_days: duration_days.max(1),
            travelers: travelers.max(1),
            profile,
            food_preferences: Vec::new(),
            activity_preferences: Vec::new(),
            poi_preferences: Vec::new(),
            location: None,
            weather: Vec::new(),
            pois: Vec::new(),
            activities: Vec::new(),
            restaurants: Vec::new(),
            itinerary: None,
            budget: None,
        }
    }

    /// Calendar date of a 1-based day index
    pub fn date_of_day(&self, day_index: u32) -> NaiveDate {
        self.start_date + chrono::Duration::days(i64::from(day_index) - 1)
    }

    /// Forecast for a given date, if weather data covers it
    pub fn forecast_for(&self, date: NaiveDate) -> Option<&DayForecast> {
        self.weather.iter().find(|f| f.date == date)
    }

    /// All candidate pools combined (pois + activities + restaurants)
    pub fn candidate_count(&self) -> usize {
        self.pois.len() + self.activities.len() + self.restaurants.len()
    }

    /// Whether candidate discovery has populated any pool
    pub fn has_candidates(&self) -> bool {
        self.candidate_count() > 0
    }

    /// The itinerary, or a descriptive error naming the missing field
    pub fn require_itinerary(&self) -> Result<&[DayPlan], String> {
        self.itinerary
            .as_deref()
            .ok_or_else(|| "proposed itinerary is required in travel context".to_string())
    }

    /// The validated location, or a descriptive error naming the missing field
    pub fn require_location(&self) -> Result<&Location, String> {
        self.location
            .as_ref()
            .ok_or_else(|| "validated location is required in travel context".to_string())
    }
}
