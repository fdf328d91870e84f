//! File-backed catalog collaborator
//!
//! Loads a destination catalog (location, forecast, candidate pools) from a
//! YAML file and serves it through the resolver and discovery contracts.
//! This is the adapter the CLI uses so the pipeline runs without network
//! providers; the wire formats of real providers stay out of scope.

use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Candidate, CandidateSource, DayForecast, GeoPoint, ItemCategory, Location};

use super::{CandidateDiscovery, CollaboratorError, LocationResolver};

/// Serialized catalog file shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// The destination this catalog covers
    pub location: CatalogLocation,

    /// Per-day forecast entries
    #[serde(default)]
    pub forecast: Vec<CatalogForecast>,

    /// POI candidates
    #[serde(default)]
    pub pois: Vec<CatalogEntry>,

    /// Activity candidates
    #[serde(default)]
    pub activities: Vec<CatalogEntry>,

    /// Restaurant candidates
    #[serde(default)]
    pub restaurants: Vec<CatalogEntry>,
}

/// Location block of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Forecast entry of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogForecast {
    pub date: NaiveDate,
    pub condition: String,
    #[serde(default, rename = "precipitation-probability")]
    pub precipitation_probability: f64,
    #[serde(default, rename = "high-c")]
    pub high_c: Option<f64>,
    #[serde(default, rename = "low-c")]
    pub low_c: Option<f64>,
}

/// One candidate entry of a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, rename = "price-level")]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default, rename = "duration-minutes")]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CatalogEntry {
    /// Normalize into the canonical candidate shape
    fn normalize(&self, source: CandidateSource, index: usize) -> Candidate {
        let id = self
            .id
            .clone()
            .unwrap_or_else(|| format!("{}-{}", slugify(&self.name), index));

        let mut candidate = Candidate::new(id, self.name.clone(), source, self.category);
        if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
            candidate.location = Some(GeoPoint::new(lat, lon));
        }
        candidate.rating = self.rating;
        candidate.price_level = self.price_level;
        candidate.cost = self.cost;
        candidate.duration_minutes = self.duration_minutes;
        candidate.cuisine = self.cuisine.clone();
        candidate.description = self.description.clone();
        candidate
    }

    /// Whether this entry matches any preference keyword
    fn matches_preferences(&self, preferences: &[String]) -> bool {
        let haystack = format!(
            "{} {} {}",
            self.name.to_lowercase(),
            self.cuisine.as_deref().unwrap_or("").to_lowercase(),
            self.description.as_deref().unwrap_or("").to_lowercase()
        );
        preferences.iter().any(|p| haystack.contains(&p.to_lowercase()))
    }
}

/// Catalog-backed resolver + discovery
pub struct FileCatalog {
    catalog: CatalogFile,
}

impl FileCatalog {
    /// Load a catalog from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CollaboratorError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "FileCatalog::load: called");
        let content = std::fs::read_to_string(path)?;
        let catalog: CatalogFile = serde_yaml::from_str(&content)?;
        info!(
            path = %path.display(),
            pois = catalog.pois.len(),
            activities = catalog.activities.len(),
            restaurants = catalog.restaurants.len(),
            "Loaded destination catalog"
        );
        Ok(Self { catalog })
    }

    /// Build directly from a parsed catalog (tests, embedding)
    pub fn from_catalog(catalog: CatalogFile) -> Self {
        Self { catalog }
    }

    /// Rank entries: preference matches first, then by rating descending
    fn ranked(&self, entries: &[CatalogEntry], source: CandidateSource, preferences: &[String]) -> Vec<Candidate> {
        let mut indexed: Vec<(usize, &CatalogEntry)> = entries.iter().enumerate().collect();
        indexed.sort_by(|(_, a), (_, b)| {
            let a_match = a.matches_preferences(preferences);
            let b_match = b.matches_preferences(preferences);
            b_match
                .cmp(&a_match)
                .then_with(|| {
                    b.rating
                        .unwrap_or(0.0)
                        .partial_cmp(&a.rating.unwrap_or(0.0))
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });
        indexed
            .into_iter()
            .map(|(index, entry)| entry.normalize(source, index))
            .collect()
    }
}

#[async_trait]
impl LocationResolver for FileCatalog {
    async fn resolve(&self, destination: &str) -> Result<Location, CollaboratorError> {
        let wanted = destination.to_lowercase();
        let name = self.catalog.location.name.to_lowercase();
        if !name.contains(&wanted) && !wanted.contains(&name) {
            return Err(CollaboratorError::LocationNotFound(format!(
                "catalog covers '{}', not '{}'",
                self.catalog.location.name, destination
            )));
        }

        Ok(Location {
            name: self.catalog.location.name.clone(),
            coordinates: GeoPoint::new(self.catalog.location.latitude, self.catalog.location.longitude),
            country: self.catalog.location.country.clone(),
            city: self.catalog.location.city.clone(),
        })
    }

    async fn forecast(
        &self,
        _location: &Location,
        start: NaiveDate,
        days: u32,
    ) -> Result<Vec<DayForecast>, CollaboratorError> {
        // Missing dates degrade to an unknown forecast rather than failing
        Ok((0..days)
            .map(|offset| {
                let date = start + chrono::Duration::days(i64::from(offset));
                self.catalog
                    .forecast
                    .iter()
                    .find(|f| f.date == date)
                    .map(|f| DayForecast {
                        date,
                        condition: f.condition.clone(),
                        precipitation_probability: f.precipitation_probability,
                        high_c: f.high_c,
                        low_c: f.low_c,
                    })
                    .unwrap_or_else(|| DayForecast::unknown(date))
            })
            .collect())
    }
}

#[async_trait]
impl CandidateDiscovery for FileCatalog {
    async fn discover_pois(
        &self,
        _location: &Location,
        preferences: &[String],
    ) -> Result<Vec<Candidate>, CollaboratorError> {
        Ok(self.ranked(&self.catalog.pois, CandidateSource::Poi, preferences))
    }

    async fn discover_activities(
        &self,
        _location: &Location,
        preferences: &[String],
    ) -> Result<Vec<Candidate>, CollaboratorError> {
        Ok(self.ranked(&self.catalog.activities, CandidateSource::Activity, preferences))
    }

    async fn discover_restaurants(
        &self,
        _location: &Location,
        preferences: &[String],
    ) -> Result<Vec<Candidate>, CollaboratorError> {
        Ok(self.ranked(&self.catalog.restaurants, CandidateSource::Restaurant, preferences))
    }
}

/// Slugify a name for use as a candidate id
fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CatalogFile {
        serde_yaml::from_str(
            r#"
location:
  name: Bangkok
  latitude: 13.7563
  longitude: 100.5018
  country: Thailand
forecast:
  - date: 2026-05-01
    condition: Clear
  - date: 2026-05-02
    condition: Rain
    precipitation-probability: 0.8
pois:
  - name: Grand Palace
    category: cultural
    rating: 4.8
    cost: 15
  - name: Wat Arun
    category: cultural
    rating: 4.7
activities:
  - name: Chao Phraya Boat Tour
    category: outdoor
    rating: 4.5
restaurants:
  - name: Corner Bakery
    category: dining
    cuisine: bakery
    price-level: 1
    rating: 4.2
  - name: Riverside Grill
    category: dining
    price-level: 3
    rating: 4.6
"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_resolve_matches_catalog_destination() {
        let catalog = FileCatalog::from_catalog(catalog());
        let location = catalog.resolve("bangkok").await.unwrap();
        assert_eq!(location.name, "Bangkok");
        assert!((location.coordinates.latitude - 13.7563).abs() < 1e-9);

        let err = catalog.resolve("Paris").await.unwrap_err();
        assert!(matches!(err, CollaboratorError::LocationNotFound(_)));
    }

    #[tokio::test]
    async fn test_forecast_fills_missing_dates() {
        let catalog = FileCatalog::from_catalog(catalog());
        let location = catalog.resolve("Bangkok").await.unwrap();
        let start = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();

        let forecast = catalog.forecast(&location, start, 3).await.unwrap();
        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast[0].condition, "Clear");
        assert!(forecast[1].is_adverse());
        assert_eq!(forecast[2].condition, "", "missing day degrades to unknown");
    }

    #[tokio::test]
    async fn test_discovery_ranks_by_rating() {
        let catalog = FileCatalog::from_catalog(catalog());
        let location = catalog.resolve("Bangkok").await.unwrap();

        let restaurants = catalog.discover_restaurants(&location, &[]).await.unwrap();
        assert_eq!(restaurants[0].name, "Riverside Grill");
        assert_eq!(restaurants[1].name, "Corner Bakery");
    }

    #[tokio::test]
    async fn test_discovery_preference_matches_rank_first() {
        let catalog = FileCatalog::from_catalog(catalog());
        let location = catalog.resolve("Bangkok").await.unwrap();

        let prefs = vec!["bakery".to_string()];
        let restaurants = catalog.discover_restaurants(&location, &prefs).await.unwrap();
        assert_eq!(restaurants[0].name, "Corner Bakery");
    }

    #[test]
    fn test_entry_normalization_generates_ids() {
        let entries = catalog();
        let candidate = entries.pois[0].normalize(CandidateSource::Poi, 0);
        assert_eq!(candidate.id, "grand-palace-0");
        assert_eq!(candidate.category, ItemCategory::Cultural);
        assert_eq!(candidate.cost, Some(15.0));
    }
}
