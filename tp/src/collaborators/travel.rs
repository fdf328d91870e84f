//! Travel-time estimation
//!
//! The scheduler's timing algorithm depends on always receiving a number,
//! so this trait is infallible by contract: implementations return a
//! deterministic fallback when the underlying provider cannot answer.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{GeoPoint, TravelMode};

/// Fallback hop duration when coordinates are missing
pub const FALLBACK_TRAVEL_MINUTES: i64 = 30;

/// Estimates travel time between two points for a mode
#[async_trait]
pub trait TravelTimeEstimator: Send + Sync {
    /// Minutes to travel from `from` to `to`; never fails
    async fn estimate_minutes(&self, from: Option<GeoPoint>, to: Option<GeoPoint>, mode: TravelMode) -> i64;
}

/// Offline estimator using great-circle distance at mode speed
///
/// Falls back to a fixed duration when either endpoint lacks coordinates.
pub struct HaversineEstimator {
    fallback_minutes: i64,
}

impl HaversineEstimator {
    pub fn new() -> Self {
        Self {
            fallback_minutes: FALLBACK_TRAVEL_MINUTES,
        }
    }

    pub fn with_fallback(fallback_minutes: i64) -> Self {
        Self { fallback_minutes }
    }

    /// Assumed speed in km/h for a travel mode
    fn speed_kmh(mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Walking => 4.5,
            TravelMode::Driving => 30.0,
            TravelMode::Transit => 20.0,
        }
    }

    /// Great-circle distance in kilometers
    fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;
        let lat_a = a.latitude.to_radians();
        let lat_b = b.latitude.to_radians();
        let d_lat = (b.latitude - a.latitude).to_radians();
        let d_lon = (b.longitude - a.longitude).to_radians();

        let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TravelTimeEstimator for HaversineEstimator {
    async fn estimate_minutes(&self, from: Option<GeoPoint>, to: Option<GeoPoint>, mode: TravelMode) -> i64 {
        let (Some(from), Some(to)) = (from, to) else {
            debug!(fallback = self.fallback_minutes, "HaversineEstimator: missing coordinates, using fallback");
            return self.fallback_minutes;
        };

        let km = Self::haversine_km(from, to);
        let minutes = (km / Self::speed_kmh(mode) * 60.0).round() as i64;
        // A hop is never instantaneous: account for getting in and out
        minutes.max(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fallback_when_coordinates_missing() {
        let estimator = HaversineEstimator::new();
        let minutes = estimator.estimate_minutes(None, None, TravelMode::Walking).await;
        assert_eq!(minutes, FALLBACK_TRAVEL_MINUTES);

        let minutes = estimator
            .estimate_minutes(Some(GeoPoint::new(13.75, 100.5)), None, TravelMode::Walking)
            .await;
        assert_eq!(minutes, FALLBACK_TRAVEL_MINUTES);
    }

    #[tokio::test]
    async fn test_zero_distance_has_minimum_hop() {
        let estimator = HaversineEstimator::new();
        let point = GeoPoint::new(13.75, 100.5);
        let minutes = estimator.estimate_minutes(Some(point), Some(point), TravelMode::Walking).await;
        assert_eq!(minutes, 5);
    }

    #[tokio::test]
    async fn test_driving_faster_than_walking() {
        let estimator = HaversineEstimator::new();
        let a = GeoPoint::new(13.75, 100.50);
        let b = GeoPoint::new(13.80, 100.55);

        let walking = estimator.estimate_minutes(Some(a), Some(b), TravelMode::Walking).await;
        let driving = estimator.estimate_minutes(Some(a), Some(b), TravelMode::Driving).await;
        assert!(driving < walking, "driving {driving} should beat walking {walking}");
    }

    #[tokio::test]
    async fn test_deterministic() {
        let estimator = HaversineEstimator::new();
        let a = GeoPoint::new(13.75, 100.50);
        let b = GeoPoint::new(13.80, 100.55);

        let first = estimator.estimate_minutes(Some(a), Some(b), TravelMode::Walking).await;
        let second = estimator.estimate_minutes(Some(a), Some(b), TravelMode::Walking).await;
        assert_eq!(first, second);
    }
}
