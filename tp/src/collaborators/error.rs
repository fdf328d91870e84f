//! Collaborator error type

use thiserror::Error;

/// Errors surfaced by external collaborators
///
/// The planning engine treats every variant the same way: the invoking
/// phase fails and the orchestrator moves the session to the error state.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("Destination could not be resolved: {0}")]
    LocationNotFound(String),

    #[error("Weather data unavailable: {0}")]
    WeatherUnavailable(String),

    #[error("Candidate discovery failed: {0}")]
    DiscoveryFailed(String),

    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
