//! Collaborator contracts
//!
//! The planning engine's only suspension points are calls through these
//! traits. Implementations own retries and provider wire formats; a failed
//! call is reported to the orchestrator as a stage failure.

mod catalog;
mod discovery;
mod error;
mod location;
mod sink;
mod travel;

pub use catalog::{CatalogEntry, CatalogFile, CatalogForecast, CatalogLocation, FileCatalog};
pub use discovery::CandidateDiscovery;
pub use error::CollaboratorError;
pub use location::LocationResolver;
pub use sink::{JsonSink, NullSink, ResultSink};
pub use travel::{FALLBACK_TRAVEL_MINUTES, HaversineEstimator, TravelTimeEstimator};

#[cfg(test)]
pub use discovery::mock::MockDiscovery;
#[cfg(test)]
pub use location::mock::MockLocationResolver;
#[cfg(test)]
pub use sink::mock::RecordingSink;
