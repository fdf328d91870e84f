//! DayPlan and ScheduledItem domain types
//!
//! A DayPlan is one calendar day of a proposed itinerary: an ordered,
//! time-slotted sequence of items plus aggregates. Well-formedness (no
//! overlaps, feasible gaps) is the critic's responsibility, not enforced
//! here.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::candidate::{GeoPoint, ItemCategory};
use super::weather::DayForecast;

/// Travel mode for the hop into an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    #[default]
    Walking,
    Driving,
    Transit,
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Walking => write!(f, "walking"),
            Self::Driving => write!(f, "driving"),
            Self::Transit => write!(f, "transit"),
        }
    }
}

/// Where a day stands in the critique/revision cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Not yet critiqued
    #[default]
    Pending,
    /// Critique passed
    Approved,
    /// Critique rejected; awaiting regeneration
    NeedsRevision,
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
            Self::NeedsRevision => write!(f, "needs_revision"),
        }
    }
}

/// One time-slotted entry in a day's schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledItem {
    /// Candidate identifier this item was scheduled from
    pub id: String,

    /// Display name
    pub name: String,

    /// Normalized category
    pub category: ItemCategory,

    /// Venue coordinates when known
    #[serde(default)]
    pub location: Option<GeoPoint>,

    /// Scheduled start
    pub start_time: NaiveDateTime,

    /// Scheduled end
    pub end_time: NaiveDateTime,

    /// Planned visit duration in minutes
    pub duration_minutes: i64,

    /// Estimated per-person cost in USD
    #[serde(default)]
    pub cost: Option<f64>,

    /// Aggregate rating carried over from the candidate
    #[serde(default)]
    pub rating: Option<f64>,

    /// Minutes of travel from the previous item; None for the day's first item
    #[serde(default)]
    pub travel_time_from_previous: Option<i64>,

    /// Mode for that hop; None for the day's first item
    #[serde(default)]
    pub travel_mode: Option<TravelMode>,

    /// Booking or reservation reference when one exists
    #[serde(default)]
    pub booking_reference: Option<String>,

    /// Free-text description carried over from the candidate
    #[serde(default)]
    pub description: Option<String>,
}

/// A single day's itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number, contiguous across the trip
    pub day_index: u32,

    /// Calendar date
    pub date: NaiveDate,

    /// Theme label, e.g. "Cultural Immersion"
    pub theme: String,

    /// Ordered scheduled items
    pub items: Vec<ScheduledItem>,

    /// Sum of per-person item costs in USD
    pub total_cost: f64,

    /// Sum of item durations in minutes
    pub total_duration_minutes: i64,

    /// Weather slice for this date
    #[serde(default)]
    pub weather: Option<DayForecast>,

    /// Generated advisory notes, e.g. "limited dining options"
    #[serde(default)]
    pub special_considerations: Option<String>,

    /// Approval status from the critique cycle
    pub status: ApprovalStatus,

    /// How many times this day has been regenerated
    pub revision_count: u32,
}

impl DayPlan {
    /// Create an empty day
    pub fn new(day_index: u32, date: NaiveDate, theme: impl Into<String>) -> Self {
        let theme = theme.into();
        debug!(day_index, %date, %theme, "DayPlan::new: called");
        Self {
            day_index,
            date,
            theme,
            items: Vec::new(),
            total_cost: 0.0,
            total_duration_minutes: 0,
            weather: None,
            special_considerations: None,
            status: ApprovalStatus::Pending,
            revision_count: 0,
        }
    }

    /// Append an item and fold it into the aggregates
    pub fn push_item(&mut self, item: ScheduledItem) {
        debug!(day_index = self.day_index, item = %item.name, "DayPlan::push_item: called");
        self.total_cost += item.cost.unwrap_or(0.0);
        self.total_duration_minutes += item.duration_minutes;
        self.items.push(item);
    }

    /// Whether the day has no scheduled items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items that are not dining stops
    pub fn activity_count(&self) -> usize {
        self.items.iter().filter(|i| i.category != ItemCategory::Dining).count()
    }

    /// Dining stops
    pub fn dining_count(&self) -> usize {
        self.items.iter().filter(|i| i.category == ItemCategory::Dining).count()
    }

    /// Total minutes spent traveling between items
    pub fn total_travel_minutes(&self) -> i64 {
        self.items.iter().filter_map(|i| i.travel_time_from_previous).sum()
    }

    /// Update the approval status
    pub fn set_status(&mut self, status: ApprovalStatus) {
        debug!(day_index = self.day_index, ?status, "DayPlan::set_status: called");
        self.status = status;
    }

    /// Mark another regeneration of this day
    pub fn increment_revision(&mut self) {
        debug!(day_index = self.day_index, self.revision_count, "DayPlan::increment_revision: called");
        self.revision_count += 1;
    }
}
