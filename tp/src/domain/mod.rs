//! Domain types for tripdaemon
//!
//! Core domain types: TravelContext, Candidate, DayPlan, CritiqueResult,
//! BudgetBreakdown, PlanningSession. Stages exchange these by value; only
//! the orchestrator mutates a session record.

mod budget;
mod candidate;
mod context;
mod critique;
mod day_plan;
mod profile;
mod session;
mod weather;

pub use budget::{
    BudgetBreakdown, BudgetInsights, CategoryTotals, CostCategory, CostLine, DayBudget, TierComparison,
};
pub use candidate::{Candidate, CandidateSource, GeoPoint, ItemCategory};
pub use context::{Location, TravelContext};
pub use critique::{CritiqueResult, Issue, IssueKind, Severity};
pub use day_plan::{ApprovalStatus, DayPlan, ScheduledItem, TravelMode};
pub use profile::{Pace, SpendTier, TravelStyle, TravelerProfile};
pub use session::{PlanningSession, SessionStatus, WorkflowPhase};
pub use weather::{ADVERSE_PRECIPITATION_THRESHOLD, DayForecast};
