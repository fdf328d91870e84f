//! PlanningSession domain type
//!
//! Tracks one trip request through the workflow state machine. Sessions are
//! created when a planning request starts, mutated only by the orchestrator
//! between phases, and discarded on completion, cancellation, or reset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::context::TravelContext;

/// Workflow state machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    /// Resolving location, weather, and candidate pools
    #[default]
    GatheringInfo,
    /// Scheduler is building the itinerary
    GeneratingPlan,
    /// Critic is scoring the proposed days
    Reviewing,
    /// Regenerating after a failed critique
    Revising,
    /// Pricing the approved itinerary
    EstimatingBudget,
    /// Handing the enriched context to the output boundary
    FormattingOutput,
    /// Workflow finished successfully
    Completed,
    /// Terminal failure
    Error,
}

impl WorkflowPhase {
    /// Whether no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

impl std::fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::GatheringInfo => "gathering_info",
            Self::GeneratingPlan => "generating_plan",
            Self::Reviewing => "reviewing",
            Self::Revising => "revising",
            Self::EstimatingBudget => "estimating_budget",
            Self::FormattingOutput => "formatting_output",
            Self::Completed => "completed",
            Self::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// One planning request's lifecycle record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningSession {
    /// Unique identifier: trip-{user}-{uuidv7}
    pub id: String,

    /// Owning user
    pub user_id: String,

    /// Current workflow phase
    pub phase: WorkflowPhase,

    /// The session's working set; None until gathering starts
    pub context: Option<TravelContext>,

    /// Completed critique/revision cycles
    pub revision_cycles: u32,

    /// Last error message (if any)
    pub error_message: Option<String>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl PlanningSession {
    /// Create a new session for a user with a timestamp-derived identifier
    pub fn new(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        debug!(%user_id, "PlanningSession::new: called");
        let now = Utc::now();
        Self {
            id: format!("trip-{}-{}", user_id, Uuid::now_v7()),
            user_id,
            phase: WorkflowPhase::default(),
            context: None,
            revision_cycles: 0,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Advance to a new phase
    pub fn set_phase(&mut self, phase: WorkflowPhase) {
        debug!(%self.id, %phase, "PlanningSession::set_phase: called");
        self.phase = phase;
        self.updated_at = Utc::now();
    }

    /// Replace the working set with a stage's enriched copy
    pub fn set_context(&mut self, context: TravelContext) {
        debug!(%self.id, "PlanningSession::set_context: called");
        self.context = Some(context);
        self.updated_at = Utc::now();
    }

    /// Record a terminal failure
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%self.id, %message, "PlanningSession::fail: called");
        self.error_message = Some(message);
        self.phase = WorkflowPhase::Error;
        self.updated_at = Utc::now();
    }

    /// Count one completed critique/revision cycle
    pub fn increment_revision_cycles(&mut self) {
        debug!(%self.id, self.revision_cycles, "PlanningSession::increment_revision_cycles: called");
        self.revision_cycles += 1;
        self.updated_at = Utc::now();
    }

    /// Whether the session has reached a terminal phase
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Whether the working set has been populated
    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }
}

/// Status snapshot returned by session queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    pub session_id: String,
    pub user_id: String,
    pub phase: WorkflowPhase,
    pub has_context: bool,
    pub revision_cycles: u32,
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&PlanningSession> for SessionStatus {
    fn from(session: &PlanningSession) -> Self {
        Self {
            session_id: session.id.clone(),
            user_id: session.user_id.clone(),
            phase: session.phase,
            has_context: session.has_context(),
            revision_cycles: session.revision_cycles,
            error_message: session.error_message.clone(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}
