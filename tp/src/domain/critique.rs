//! Critique result types
//!
//! A CritiqueResult is the critic's verdict on a single day: an overall
//! score, the approval decision, and the issues that drove it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Issue importance, driving both score penalties and the approval gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Defect classes the critic can flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    // logical consistency
    TimeOverlap,
    InsufficientTravelTime,
    TooShortActivity,
    TooLongActivity,
    // budget alignment
    OverBudget,
    BudgetMismatch,
    // profile alignment
    StyleMismatch,
    PaceMismatch,
    InterestMismatch,
    GroupSizeConcern,
    // time feasibility
    DayTooLong,
    TooMuchTravel,
    InsufficientBreak,
    // activity quality
    LackOfVariety,
    LowRatedActivities,
    MissingDining,
    SpreadOutLocations,
}

/// One defect found during critique
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Defect class
    pub kind: IssueKind,

    /// Importance
    pub severity: Severity,

    /// Human-readable description
    pub description: String,

    /// Structured detail for logging and downstream inspection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl Issue {
    /// Create an issue without structured detail
    pub fn new(kind: IssueKind, severity: Severity, description: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            description: description.into(),
            detail: None,
        }
    }

    /// Builder method to attach structured detail
    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// The critic's verdict on one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CritiqueResult {
    /// Averaged sub-check score, 0..=100
    pub score: f64,

    /// Whether the day passed the approval gate
    pub approved: bool,

    /// Issues found, in check order
    pub issues: Vec<Issue>,

    /// Free-text improvement suggestions
    pub recommendations: Vec<String>,

    /// One-line summary
    pub summary: String,
}

impl CritiqueResult {
    /// Count issues at a given severity
    pub fn count_at(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Whether any high-severity issue was found
    pub fn has_high_severity(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::High)
    }
}
