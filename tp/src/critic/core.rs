//! QualityCritic - scores a day and decides approve/reject
//!
//! A pure function of (day, profile): no side effects, no retries, and
//! deterministic output. Degraded sub-checks are logged and folded into the
//! average rather than aborting the critique.

use tracing::{debug, warn};

use crate::domain::{CritiqueResult, DayPlan, Severity, TravelerProfile};

use super::checks::{self, CheckReport};
use super::config::CriticConfig;

/// Reviews proposed days against traveler constraints
pub struct QualityCritic {
    config: CriticConfig,
}

impl QualityCritic {
    pub fn new(config: CriticConfig) -> Self {
        Self { config }
    }

    /// Score one day across all five dimensions
    pub fn review(&self, day: &DayPlan, profile: &TravelerProfile) -> CritiqueResult {
        debug!(day_index = day.day_index, "QualityCritic::review: called");

        let reports = [
            checks::check_logical_consistency(day, &self.config),
            checks::check_budget_alignment(day, profile),
            checks::check_profile_alignment(day, profile),
            checks::check_time_feasibility(day, &self.config),
            checks::check_activity_quality(day, &self.config),
        ];

        for report in &reports {
            if report.degraded {
                warn!(
                    day_index = day.day_index,
                    check = %report.kind,
                    "Sub-check degraded to conservative default"
                );
            }
        }

        self.combine(day, &reports)
    }

    /// Fold sub-check reports into the overall verdict
    fn combine(&self, day: &DayPlan, reports: &[CheckReport]) -> CritiqueResult {
        let score = reports.iter().map(|r| r.score).sum::<f64>() / reports.len() as f64;

        let issues: Vec<_> = reports.iter().flat_map(|r| r.issues.iter().cloned()).collect();
        let recommendations: Vec<_> = reports
            .iter()
            .flat_map(|r| r.recommendations.iter().cloned())
            .collect();

        let high_count = issues.iter().filter(|i| i.severity == Severity::High).count();
        let approved = score >= self.config.minimum_score && high_count == 0;

        let summary = if approved {
            format!("Approved with score {:.1}. Ready for confirmation.", score)
        } else {
            let medium_count = issues.iter().filter(|i| i.severity == Severity::Medium).count();
            format!(
                "Not approved (score {:.1}). Found {} high-priority and {} medium-priority issues requiring revision.",
                score, high_count, medium_count
            )
        };

        debug!(day_index = day.day_index, score, approved, issues = issues.len(), "QualityCritic::combine");

        CritiqueResult {
            score,
            approved,
            issues,
            recommendations,
            summary,
        }
    }
}

impl Default for QualityCritic {
    fn default() -> Self {
        Self::new(CriticConfig::default())
    }
}
