//! Normalized candidate records
//!
//! Discovery collaborators produce loosely shaped POI, activity, and
//! restaurant records. They are normalized at ingestion into one canonical
//! [`Candidate`] shape so the scheduler and critic operate on a single stable
//! schema.

use serde::{Deserialize, Serialize};

/// Geographic coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Category of an item on an itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Sightseeing,
    Dining,
    Cultural,
    Outdoor,
    Entertainment,
    Shopping,
    Transport,
    Accommodation,
}

impl ItemCategory {
    /// Default visit duration in minutes when the record carries none
    pub fn default_duration_minutes(&self) -> i64 {
        match self {
            Self::Dining => 90,
            Self::Cultural => 120,
            Self::Sightseeing => 90,
            Self::Outdoor => 180,
            Self::Entertainment => 120,
            Self::Shopping => 90,
            Self::Transport => 30,
            Self::Accommodation => 30,
        }
    }

    /// Whether this category is typically indoors
    pub fn is_indoor(&self) -> bool {
        matches!(self, Self::Cultural | Self::Shopping | Self::Dining | Self::Entertainment)
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sightseeing => "sightseeing",
            Self::Dining => "dining",
            Self::Cultural => "cultural",
            Self::Outdoor => "outdoor",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Transport => "transport",
            Self::Accommodation => "accommodation",
        };
        write!(f, "{}", name)
    }
}

/// Which discovery pool produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    Poi,
    Activity,
    Restaurant,
}

/// One unscheduled item available for allocation into a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable identifier, unique within a planning session
    pub id: String,

    /// Display name of the venue or activity
    pub name: String,

    /// Which pool this came from
    pub source: CandidateSource,

    /// Normalized category
    pub category: ItemCategory,

    /// Venue coordinates when known
    #[serde(default)]
    pub location: Option<GeoPoint>,

    /// Aggregate rating, typically 1.0..=5.0
    #[serde(default)]
    pub rating: Option<f64>,

    /// Coarse price signal, 0 (free) ..= 4 (very expensive)
    #[serde(default)]
    pub price_level: Option<u8>,

    /// Explicit per-person cost in USD when the producer supplied one
    #[serde(default)]
    pub cost: Option<f64>,

    /// Explicit visit duration when the producer supplied one
    #[serde(default)]
    pub duration_minutes: Option<i64>,

    /// Cuisine keyword for restaurants, e.g. "bakery", "thai"
    #[serde(default)]
    pub cuisine: Option<String>,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
}

/// Keywords that mark a venue as indoor-compatible regardless of category
const INDOOR_KEYWORDS: &[&str] = &["museum", "gallery", "mall", "restaurant", "cafe", "theater", "cinema", "aquarium"];

impl Candidate {
    /// Create a minimal candidate; optional fields start empty
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        source: CandidateSource,
        category: ItemCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source,
            category,
            location: None,
            rating: None,
            price_level: None,
            cost: None,
            duration_minutes: None,
            cuisine: None,
            description: None,
        }
    }

    /// Builder method to set coordinates
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(GeoPoint::new(latitude, longitude));
        self
    }

    /// Builder method to set the rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Builder method to set the price level
    pub fn with_price_level(mut self, level: u8) -> Self {
        self.price_level = Some(level);
        self
    }

    /// Builder method to set an explicit cost
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Builder method to set an explicit duration
    pub fn with_duration(mut self, minutes: i64) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    /// Builder method to set the cuisine keyword
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Duration to schedule: explicit value or category default
    pub fn effective_duration_minutes(&self) -> i64 {
        self.duration_minutes.unwrap_or_else(|| self.category.default_duration_minutes())
    }

    /// Whether this venue works as an indoor alternative on a bad-weather day
    pub fn is_indoor_compatible(&self) -> bool {
        if self.category.is_indoor() {
            return true;
        }
        let name = self.name.to_lowercase();
        INDOOR_KEYWORDS.iter().any(|kw| name.contains(kw))
    }
}
