//! Workflow error taxonomy
//!
//! Input errors and collaborator errors are both terminal for the session;
//! the distinction is kept so callers can report causes precisely. A failed
//! critique is NOT an error - it is the designed trigger for the revision
//! loop.

use thiserror::Error;

use crate::collaborators::CollaboratorError;
use crate::scheduler::ScheduleError;

/// Terminal failure of a workflow phase
#[derive(Debug, Error)]
pub enum StageError {
    /// A required context field was never populated
    #[error("Missing context: {0}")]
    MissingContext(String),

    /// A downstream collaborator call failed
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    /// Schedule generation rejected its input
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

impl StageError {
    /// Stable error code for the result sink
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingContext(_) => "missing_context",
            Self::Collaborator(_) => "collaborator_failed",
            Self::Schedule(_) => "generation_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = StageError::MissingContext("weather".to_string());
        assert_eq!(err.code(), "missing_context");
        assert!(err.to_string().contains("weather"));

        let err = StageError::Schedule(ScheduleError::MissingCandidates);
        assert_eq!(err.code(), "generation_failed");
    }
}
