//! Event types for planning activity streaming
//!
//! Everything observable about a session's progress: phase transitions,
//! per-day critiques, revision cycles, and terminal outcomes.

use serde::{Deserialize, Serialize};

use crate::domain::WorkflowPhase;

/// The vocabulary of planning activity
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlanEvent {
    /// A workflow phase has started
    PhaseStarted {
        session_id: String,
        phase: WorkflowPhase,
    },
    /// A workflow phase completed successfully
    PhaseCompleted {
        session_id: String,
        phase: WorkflowPhase,
    },
    /// The critic scored one day
    DayCritiqued {
        session_id: String,
        day_index: u32,
        score: f64,
        approved: bool,
    },
    /// A revision cycle is regenerating the itinerary
    RevisionStarted {
        session_id: String,
        cycle: u32,
        feedback: String,
    },
    /// The workflow finished; the context was handed to the sink
    WorkflowCompleted {
        session_id: String,
        total_cost: f64,
        warning: Option<String>,
    },
    /// The workflow failed terminally
    WorkflowFailed { session_id: String, message: String },
}

impl PlanEvent {
    /// Discriminant name, for filtering and logs
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::PhaseStarted { .. } => "PhaseStarted",
            Self::PhaseCompleted { .. } => "PhaseCompleted",
            Self::DayCritiqued { .. } => "DayCritiqued",
            Self::RevisionStarted { .. } => "RevisionStarted",
            Self::WorkflowCompleted { .. } => "WorkflowCompleted",
            Self::WorkflowFailed { .. } => "WorkflowFailed",
        }
    }

    /// Session this event belongs to
    pub fn session_id(&self) -> &str {
        match self {
            Self::PhaseStarted { session_id, .. }
            | Self::PhaseCompleted { session_id, .. }
            | Self::DayCritiqued { session_id, .. }
            | Self::RevisionStarted { session_id, .. }
            | Self::WorkflowCompleted { session_id, .. }
            | Self::WorkflowFailed { session_id, .. } => session_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_and_session_id() {
        let event = PlanEvent::DayCritiqued {
            session_id: "trip-u-1".to_string(),
            day_index: 2,
            score: 84.0,
            approved: true,
        };
        assert_eq!(event.event_type(), "DayCritiqued");
        assert_eq!(event.session_id(), "trip-u-1");
    }

    #[test]
    fn test_event_serde_tagging() {
        let event = PlanEvent::WorkflowFailed {
            session_id: "trip-u-1".to_string(),
            message: "boom".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"WorkflowFailed\""));
    }
}
