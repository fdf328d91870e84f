//! WorkflowOrchestrator - the top-level state machine
//!
//! Drives a planning session through information gathering, schedule
//! generation, the bounded critique/revision loop, budget estimation, and
//! output. Each phase is a pure function of the current TravelContext; the
//! orchestrator's only job is to invoke stages, merge their enriched
//! results, and advance the phase. All failures outside the revision loop
//! are terminal for the session.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::budget::BudgetEstimator;
use crate::collaborators::{CandidateDiscovery, LocationResolver, ResultSink, TravelTimeEstimator};
use crate::config::Config;
use crate::critic::QualityCritic;
use crate::domain::{
    ApprovalStatus, CritiqueResult, DayPlan, Issue, PlanningSession, SessionStatus, Severity, TravelContext,
    TravelerProfile, WorkflowPhase,
};
use crate::events::{EventBus, EventEmitter};
use crate::scheduler::ItineraryScheduler;

use super::error::StageError;

/// A new trip planning request
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub user_id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub duration_days: u32,
    pub travelers: u32,
    pub profile: TravelerProfile,
    pub food_preferences: Vec<String>,
    pub activity_preferences: Vec<String>,
    pub poi_preferences: Vec<String>,
}

/// Result of a completed workflow
#[derive(Debug, Clone)]
pub struct PlanningOutcome {
    /// Session that produced this outcome
    pub session_id: String,

    /// Fully enriched context (itinerary + budget)
    pub context: TravelContext,

    /// Final critique per day, in day order
    pub critiques: Vec<CritiqueResult>,

    /// Revision cycles consumed
    pub revision_cycles: u32,

    /// Set when the revision loop was exhausted and the best candidate was
    /// force-accepted
    pub warning: Option<String>,

    /// Unresolved issues carried into the accepted plan
    pub outstanding_issues: Vec<Issue>,
}

/// Aggregate session statistics
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct WorkflowStatistics {
    pub total_sessions: usize,
    pub active_sessions: usize,
    pub completed_sessions: usize,
    pub error_sessions: usize,
    pub phase_counts: HashMap<String, usize>,
}

/// The best itinerary seen across revision cycles
struct BestCandidate {
    itinerary: Vec<DayPlan>,
    critiques: Vec<CritiqueResult>,
    mean_score: f64,
}

/// Top-level planning state machine
pub struct WorkflowOrchestrator {
    resolver: Arc<dyn LocationResolver>,
    discovery: Arc<dyn CandidateDiscovery>,
    scheduler: ItineraryScheduler,
    critic: QualityCritic,
    estimator: BudgetEstimator,
    sink: Arc<dyn ResultSink>,
    events: Arc<EventBus>,
    max_revision_cycles: u32,
    sessions: HashMap<String, PlanningSession>,
}

impl WorkflowOrchestrator {
    pub fn new(
        resolver: Arc<dyn LocationResolver>,
        discovery: Arc<dyn CandidateDiscovery>,
        travel: Arc<dyn TravelTimeEstimator>,
        sink: Arc<dyn ResultSink>,
        events: Arc<EventBus>,
        config: &Config,
    ) -> Self {
        Self {
            resolver,
            discovery,
            scheduler: ItineraryScheduler::new(travel, config.scheduler.clone()),
            critic: QualityCritic::new(config.critic.clone()),
            estimator: BudgetEstimator::new(config.budget.clone()),
            sink,
            events,
            max_revision_cycles: config.workflow.max_revision_cycles,
            sessions: HashMap::new(),
        }
    }

    /// Run one planning request to completion
    ///
    /// Creates a fresh session, drives it through every phase, and emits the
    /// outcome to the result sink. Terminal failures move the session to the
    /// error phase and are returned to the caller.
    pub async fn plan_trip(&mut self, request: PlanRequest) -> Result<PlanningOutcome, StageError> {
        let mut session = PlanningSession::new(request.user_id.clone());
        let emitter = self.events.emitter_for(session.id.clone());
        info!(session_id = %session.id, destination = %request.destination, "Starting planning workflow");

        // Phase 1: information gathering
        emitter.phase_started(WorkflowPhase::GatheringInfo);
        let ctx = match self.gather_information(&request).await {
            Ok(ctx) => ctx,
            Err(e) => return self.abort(session, &emitter, e).await,
        };
        session.set_context(ctx.clone());
        emitter.phase_completed(WorkflowPhase::GatheringInfo);

        // Phases 2-3: generation with the bounded critique/revision loop
        session.set_phase(WorkflowPhase::GeneratingPlan);
        emitter.phase_started(WorkflowPhase::GeneratingPlan);
        let (mut ctx, critiques, warning, outstanding_issues) =
            match self.generate_and_review(ctx, &mut session, &emitter).await {
                Ok(result) => result,
                Err(e) => return self.abort(session, &emitter, e).await,
            };
        emitter.phase_completed(WorkflowPhase::GeneratingPlan);

        // Phase 4: budget estimation
        session.set_phase(WorkflowPhase::EstimatingBudget);
        emitter.phase_started(WorkflowPhase::EstimatingBudget);
        let itinerary = match ctx.require_itinerary() {
            Ok(days) => days.to_vec(),
            Err(msg) => return self.abort(session, &emitter, StageError::MissingContext(msg)).await,
        };
        let breakdown = self.estimator.estimate(&itinerary, &ctx);
        let total_cost = breakdown.total_cost;
        ctx.budget = Some(breakdown);
        session.set_context(ctx.clone());
        emitter.phase_completed(WorkflowPhase::EstimatingBudget);

        // Phase 5: hand off to the output boundary
        session.set_phase(WorkflowPhase::FormattingOutput);
        emitter.phase_started(WorkflowPhase::FormattingOutput);
        self.sink.completed(&ctx).await;
        emitter.phase_completed(WorkflowPhase::FormattingOutput);

        session.set_phase(WorkflowPhase::Completed);
        emitter.workflow_completed(total_cost, warning.clone());
        info!(session_id = %session.id, total_cost, "Planning workflow completed");

        let outcome = PlanningOutcome {
            session_id: session.id.clone(),
            context: ctx,
            critiques,
            revision_cycles: session.revision_cycles,
            warning,
            outstanding_issues,
        };
        self.sessions.insert(session.id.clone(), session);
        Ok(outcome)
    }

    /// Phase 1: resolve location, fetch weather, discover candidate pools
    async fn gather_information(&self, request: &PlanRequest) -> Result<TravelContext, StageError> {
        let mut ctx = TravelContext::new(
            request.destination.clone(),
            request.start_date,
            request.duration_days,
            request.travelers,
            request.profile.clone(),
        );
        ctx.food_preferences = request.food_preferences.clone();
        ctx.activity_preferences = request.activity_preferences.clone();
        ctx.poi_preferences = request.poi_preferences.clone();

        let location = self.resolver.resolve(&ctx.destination).await?;
        debug!(location = %location.name, "Resolved destination");

        // Weather degrades gracefully: a plan without forecasts beats no plan
        match self.resolver.forecast(&location, ctx.start_date, ctx.duration_days).await {
            Ok(forecast) => ctx.weather = forecast,
            Err(e) => warn!(error = %e, "Weather unavailable, proceeding without forecasts"),
        }

        ctx.pois = self.discovery.discover_pois(&location, &ctx.poi_preferences).await?;
        ctx.activities = self
            .discovery
            .discover_activities(&location, &ctx.activity_preferences)
            .await?;
        ctx.restaurants = self
            .discovery
            .discover_restaurants(&location, &ctx.food_preferences)
            .await?;
        ctx.location = Some(location);

        info!(
            pois = ctx.pois.len(),
            activities = ctx.activities.len(),
            restaurants = ctx.restaurants.len(),
            "Information gathering complete"
        );
        Ok(ctx)
    }

    /// Phases 2-3: generate, critique, and revise until approved or the
    /// cycle bound is hit
    async fn generate_and_review(
        &self,
        mut ctx: TravelContext,
        session: &mut PlanningSession,
        emitter: &EventEmitter,
    ) -> Result<(TravelContext, Vec<CritiqueResult>, Option<String>, Vec<Issue>), StageError> {
        let mut best: Option<BestCandidate> = None;
        let mut feedback: Option<String> = None;
        let mut cycle: u32 = 0;

        loop {
            let mut itinerary = self.scheduler.generate(&ctx, feedback.as_deref(), cycle).await?;

            session.set_phase(WorkflowPhase::Reviewing);
            let critiques: Vec<CritiqueResult> = itinerary
                .iter()
                .map(|day| self.critic.review(day, &ctx.profile))
                .collect();
            for (day, critique) in itinerary.iter_mut().zip(critiques.iter()) {
                day.set_status(if critique.approved {
                    ApprovalStatus::Approved
                } else {
                    ApprovalStatus::NeedsRevision
                });
                emitter.day_critiqued(day.day_index, critique.score, critique.approved);
            }

            let mean_score = critiques.iter().map(|c| c.score).sum::<f64>() / critiques.len().max(1) as f64;
            let all_approved = critiques.iter().all(|c| c.approved);

            if best.as_ref().is_none_or(|b| mean_score > b.mean_score) {
                best = Some(BestCandidate {
                    itinerary: itinerary.clone(),
                    critiques: critiques.clone(),
                    mean_score,
                });
            }

            if all_approved {
                debug!(cycle, mean_score, "All days approved");
                ctx.itinerary = Some(itinerary);
                return Ok((ctx, critiques, None, Vec::new()));
            }

            if cycle >= self.max_revision_cycles {
                // Loop bound hit: force-accept the best candidate so the
                // workflow always terminates
                let best = best.expect("at least one candidate was generated");
                let outstanding: Vec<Issue> = best
                    .critiques
                    .iter()
                    .filter(|c| !c.approved)
                    .flat_map(|c| c.issues.iter().cloned())
                    .collect();
                let warning = format!(
                    "Maximum revisions ({}) reached, presenting best candidate (score {:.1})",
                    self.max_revision_cycles, best.mean_score
                );
                warn!(session_id = %session.id, %warning, "Revision loop exhausted");
                ctx.itinerary = Some(best.itinerary);
                return Ok((ctx, best.critiques, Some(warning), outstanding));
            }

            feedback = Some(revision_feedback(&critiques));
            session.set_phase(WorkflowPhase::Revising);
            session.increment_revision_cycles();
            cycle += 1;
            emitter.revision_started(cycle, feedback.as_deref().unwrap_or_default());
            debug!(cycle, mean_score, "Re-entering generation with feedback");
        }
    }

    /// Record a terminal failure on every surface: session, events, sink
    async fn abort(
        &mut self,
        mut session: PlanningSession,
        emitter: &EventEmitter,
        error: StageError,
    ) -> Result<PlanningOutcome, StageError> {
        let message = error.to_string();
        warn!(session_id = %session.id, %message, "Planning workflow failed");
        session.fail(message.clone());
        emitter.workflow_failed(&message);
        self.sink.failed(error.code(), &message).await;
        self.sessions.insert(session.id.clone(), session);
        Err(error)
    }

    // === Session management ===

    /// Status of a session by id
    pub fn session_status(&self, session_id: &str) -> Option<SessionStatus> {
        self.sessions.get(session_id).map(SessionStatus::from)
    }

    /// Most recently updated session for a user
    pub fn latest_session_for_user(&self, user_id: &str) -> Option<SessionStatus> {
        self.sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .max_by_key(|s| s.updated_at)
            .map(SessionStatus::from)
    }

    /// Cancel one session by id, discarding its record
    ///
    /// Returns false when the session is unknown. A phase that is already
    /// running holds the session exclusively and completes first; there is
    /// no cooperative cancellation signal.
    pub fn cancel_session(&mut self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id).is_some();
        if removed {
            info!(%session_id, "Cancelled session");
        }
        removed
    }

    /// Discard all of a user's sessions, returning how many were removed
    pub fn reset_user_sessions(&mut self, user_id: &str) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.user_id != user_id);
        let removed = before - self.sessions.len();
        info!(%user_id, removed, "Reset user sessions");
        removed
    }

    /// Aggregate statistics over all known sessions
    pub fn statistics(&self) -> WorkflowStatistics {
        let mut stats = WorkflowStatistics {
            total_sessions: self.sessions.len(),
            ..Default::default()
        };
        for session in self.sessions.values() {
            *stats.phase_counts.entry(session.phase.to_string()).or_insert(0) += 1;
            match session.phase {
                WorkflowPhase::Completed => stats.completed_sessions += 1,
                WorkflowPhase::Error => stats.error_sessions += 1,
                _ => stats.active_sessions += 1,
            }
        }
        stats
    }
}

/// Digest rejected-day issues into the free-text feedback channel
///
/// High-severity issues are prefixed "Critical:", medium "Issue:"; low
/// severity is omitted. This digest is the only information generation
/// sees about why a day was rejected.
fn revision_feedback(critiques: &[CritiqueResult]) -> String {
    let mut parts = Vec::new();
    for critique in critiques.iter().filter(|c| !c.approved) {
        for issue in &critique.issues {
            match issue.severity {
                Severity::High => parts.push(format!("Critical: {}", issue.description)),
                Severity::Medium => parts.push(format!("Issue: {}", issue.description)),
                Severity::Low => {}
            }
        }
    }
    if parts.is_empty() {
        "Please improve the itinerary quality".to_string()
    } else {
        parts.join("; ")
    }
}
