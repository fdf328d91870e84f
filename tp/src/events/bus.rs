//! Event bus - pub/sub for planning activity
//!
//! Tokio broadcast channel underneath: the orchestrator emits, consumers
//! (CLI progress display, loggers) subscribe. Fire-and-forget - events with
//! no subscribers are dropped.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::debug;

use crate::domain::WorkflowPhase;

use super::types::PlanEvent;

/// Default channel capacity (events)
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Central event bus for planning activity
pub struct EventBus {
    tx: broadcast::Sender<PlanEvent>,
}

impl EventBus {
    /// Create a new event bus with the given capacity
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "EventBus::new: creating event bus");
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Create a new event bus with default capacity
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Emit an event to all subscribers
    pub fn emit(&self, event: PlanEvent) {
        debug!(event_type = event.event_type(), session_id = event.session_id(), "EventBus::emit");
        // No subscribers is fine
        let _ = self.tx.send(event);
    }

    /// Subscribe to receive events emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<PlanEvent> {
        self.tx.subscribe()
    }

    /// Emitter handle bound to one session
    pub fn emitter_for(&self, session_id: impl Into<String>) -> EventEmitter {
        EventEmitter {
            tx: self.tx.clone(),
            session_id: session_id.into(),
        }
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

/// Create an event bus wrapped in an Arc for shared ownership
pub fn create_event_bus() -> Arc<EventBus> {
    Arc::new(EventBus::with_default_capacity())
}

/// Cheap-to-clone handle for emitting with a pre-set session id
#[derive(Clone)]
pub struct EventEmitter {
    tx: broadcast::Sender<PlanEvent>,
    session_id: String,
}

impl EventEmitter {
    /// Session this emitter is bound to
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Emit a raw event
    pub fn emit(&self, event: PlanEvent) {
        debug!(event_type = event.event_type(), "EventEmitter::emit");
        let _ = self.tx.send(event);
    }

    /// Emit a phase started event
    pub fn phase_started(&self, phase: WorkflowPhase) {
        self.emit(PlanEvent::PhaseStarted {
            session_id: self.session_id.clone(),
            phase,
        });
    }

    /// Emit a phase completed event
    pub fn phase_completed(&self, phase: WorkflowPhase) {
        self.emit(PlanEvent::PhaseCompleted {
            session_id: self.session_id.clone(),
            phase,
        });
    }

    /// Emit a day critiqued event
    pub fn day_critiqued(&self, day_index: u32, score: f64, approved: bool) {
        self.emit(PlanEvent::DayCritiqued {
            session_id: self.session_id.clone(),
            day_index,
            score,
            approved,
        });
    }

    /// Emit a revision started event
    pub fn revision_started(&self, cycle: u32, feedback: &str) {
        self.emit(PlanEvent::RevisionStarted {
            session_id: self.session_id.clone(),
            cycle,
            feedback: feedback.to_string(),
        });
    }

    /// Emit a workflow completed event
    pub fn workflow_completed(&self, total_cost: f64, warning: Option<String>) {
        self.emit(PlanEvent::WorkflowCompleted {
            session_id: self.session_id.clone(),
            total_cost,
            warning,
        });
    }

    /// Emit a workflow failed event
    pub fn workflow_failed(&self, message: &str) {
        self.emit(PlanEvent::WorkflowFailed {
            session_id: self.session_id.clone(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkflowPhase;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_event_bus_creation() {
        let bus = EventBus::new(16);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_emit_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.emit(PlanEvent::PhaseStarted {
            session_id: "trip-1".to_string(),
            phase: WorkflowPhase::GatheringInfo,
        });

        let event = rx.recv().await.unwrap();
        assert_eq!(event.session_id(), "trip-1");
        assert_eq!(event.event_type(), "PhaseStarted");
    }

    #[tokio::test]
    async fn test_emit_without_subscribers_does_not_panic() {
        let bus = EventBus::new(16);
        bus.emit(PlanEvent::WorkflowFailed {
            session_id: "trip-1".to_string(),
            message: "nobody listening".to_string(),
        });
    }

    #[tokio::test]
    async fn test_emitter_convenience_methods() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let emitter = bus.emitter_for("trip-2");

        emitter.phase_started(WorkflowPhase::GeneratingPlan);
        emitter.day_critiqued(1, 88.0, true);
        emitter.revision_started(1, "Issue: pace");
        emitter.workflow_completed(420.0, None);

        for _ in 0..4 {
            let event = rx.recv().await.unwrap();
            assert_eq!(event.session_id(), "trip-2");
        }
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.emitter_for("trip-3").workflow_failed("boom");

        assert_eq!(rx1.recv().await.unwrap().session_id(), "trip-3");
        assert_eq!(rx2.recv().await.unwrap().session_id(), "trip-3");
    }
}
