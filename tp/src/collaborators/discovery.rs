//! CandidateDiscovery trait definition

use async_trait::async_trait;

use crate::domain::{Candidate, Location};

use super::CollaboratorError;

/// Discovers candidate pools around a resolved location
///
/// Returned lists are expected to be ranked best-first; the scheduler's
/// greedy allocation gives earlier entries priority.
#[async_trait]
pub trait CandidateDiscovery: Send + Sync {
    /// Points of interest matching the given preference keywords
    async fn discover_pois(
        &self,
        location: &Location,
        preferences: &[String],
    ) -> Result<Vec<Candidate>, CollaboratorError>;

    /// Activities matching the given preference keywords
    async fn discover_activities(
        &self,
        location: &Location,
        preferences: &[String],
    ) -> Result<Vec<Candidate>, CollaboratorError>;

    /// Restaurants matching the given preference keywords
    async fn discover_restaurants(
        &self,
        location: &Location,
        preferences: &[String],
    ) -> Result<Vec<Candidate>, CollaboratorError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Mock discovery backed by fixed candidate lists
    #[derive(Default)]
    pub struct MockDiscovery {
        pub pois: Vec<Candidate>,
        pub activities: Vec<Candidate>,
        pub restaurants: Vec<Candidate>,
        pub fail: bool,
    }

    impl MockDiscovery {
        pub fn new(pois: Vec<Candidate>, activities: Vec<Candidate>, restaurants: Vec<Candidate>) -> Self {
            Self {
                pois,
                activities,
                restaurants,
                fail: false,
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl CandidateDiscovery for MockDiscovery {
        async fn discover_pois(
            &self,
            _location: &Location,
            _preferences: &[String],
        ) -> Result<Vec<Candidate>, CollaboratorError> {
            if self.fail {
                return Err(CollaboratorError::DiscoveryFailed("mock failure".to_string()));
            }
            Ok(self.pois.clone())
        }

        async fn discover_activities(
            &self,
            _location: &Location,
            _preferences: &[String],
        ) -> Result<Vec<Candidate>, CollaboratorError> {
            if self.fail {
                return Err(CollaboratorError::DiscoveryFailed("mock failure".to_string()));
            }
            Ok(self.activities.clone())
        }

        async fn discover_restaurants(
            &self,
            _location: &Location,
            _preferences: &[String],
        ) -> Result<Vec<Candidate>, CollaboratorError> {
            if self.fail {
                return Err(CollaboratorError::DiscoveryFailed("mock failure".to_string()));
            }
            Ok(self.restaurants.clone())
        }
    }
}
