//! LocationResolver trait definition

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{DayForecast, Location};

use super::CollaboratorError;

/// Resolves a destination string and fetches its forecast
///
/// Implemented by the mapping/weather boundary. The planning engine only
/// depends on this contract; retries and provider wire formats belong to
/// the implementation.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Validate a destination string into a concrete location
    async fn resolve(&self, destination: &str) -> Result<Location, CollaboratorError>;

    /// Per-day forecast for a date range starting at `start`
    async fn forecast(
        &self,
        location: &Location,
        start: NaiveDate,
        days: u32,
    ) -> Result<Vec<DayForecast>, CollaboratorError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::domain::GeoPoint;

    /// Mock resolver returning a fixed location and clear weather
    pub struct MockLocationResolver {
        pub location: Location,
        pub fail_resolve: bool,
    }

    impl MockLocationResolver {
        pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
            Self {
                location: Location {
                    name: name.to_string(),
                    coordinates: GeoPoint::new(latitude, longitude),
                    country: None,
                    city: Some(name.to_string()),
                },
                fail_resolve: false,
            }
        }

        pub fn failing(name: &str) -> Self {
            let mut mock = Self::new(name, 0.0, 0.0);
            mock.fail_resolve = true;
            mock
        }
    }

    #[async_trait]
    impl LocationResolver for MockLocationResolver {
        async fn resolve(&self, destination: &str) -> Result<Location, CollaboratorError> {
            if self.fail_resolve {
                return Err(CollaboratorError::LocationNotFound(destination.to_string()));
            }
            Ok(self.location.clone())
        }

        async fn forecast(
            &self,
            _location: &Location,
            start: NaiveDate,
            days: u32,
        ) -> Result<Vec<DayForecast>, CollaboratorError> {
            Ok((0..days)
                .map(|offset| {
                    let mut forecast = DayForecast::unknown(start + chrono::Duration::days(i64::from(offset)));
                    forecast.condition = "Clear".to_string();
                    forecast
                })
                .collect())
        }
    }
}
