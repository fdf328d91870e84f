//! TripDaemon - multi-day travel itinerary planning engine
//!
//! A four-stage pipeline turns a candidate pool plus a traveler profile
//! into an approved, time-sequenced, costed itinerary:
//!
//! - [`workflow`] - state machine sequencing the phases, one session per
//!   trip request, with a bounded critique/revision loop
//! - [`scheduler`] - greedy daily-schedule construction over candidate
//!   pools, respecting pace, weather, and meal-variety rules
//! - [`critic`] - five-dimension quality scoring with an approve/reject
//!   gate; the authority on whether a day is acceptable
//! - [`budget`] - destination- and tier-adjusted pricing of the approved
//!   plan
//!
//! External concerns (mapping, weather, discovery providers, output
//! rendering) sit behind the [`collaborators`] traits; the engine itself
//! performs no blocking I/O.

pub mod budget;
pub mod cli;
pub mod collaborators;
pub mod config;
pub mod critic;
pub mod domain;
pub mod events;
pub mod scheduler;
pub mod workflow;

// Re-export commonly used types
pub use budget::{BudgetConfig, BudgetEstimator};
pub use collaborators::{
    CandidateDiscovery, CollaboratorError, FileCatalog, HaversineEstimator, JsonSink, LocationResolver, NullSink,
    ResultSink, TravelTimeEstimator,
};
pub use config::{Config, WorkflowConfig};
pub use critic::{CriticConfig, QualityCritic};
pub use domain::{
    ApprovalStatus, BudgetBreakdown, Candidate, CandidateSource, CritiqueResult, DayForecast, DayPlan, GeoPoint,
    Issue, IssueKind, ItemCategory, Location, Pace, PlanningSession, ScheduledItem, SessionStatus, Severity,
    SpendTier, TravelContext, TravelMode, TravelStyle, TravelerProfile, WorkflowPhase,
};
pub use events::{EventBus, EventEmitter, PlanEvent, create_event_bus};
pub use scheduler::{ItineraryScheduler, ScheduleError, SchedulerConfig};
pub use workflow::{PlanRequest, PlanningOutcome, StageError, WorkflowOrchestrator, WorkflowStatistics};
