//! Result sink - the output boundary
//!
//! On success the orchestrator hands the fully enriched context to this
//! boundary; on failure an error code and message are emitted instead.
//! Rendering (markdown, HTTP responses) happens on the other side.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::TravelContext;

/// Receives planning outcomes at the output boundary
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Called once with the enriched context when a workflow completes
    async fn completed(&self, context: &TravelContext);

    /// Called once with a code and human-readable cause when a workflow fails
    async fn failed(&self, code: &str, message: &str);
}

/// Sink that discards outcomes (library embedding without an output layer)
pub struct NullSink;

#[async_trait]
impl ResultSink for NullSink {
    async fn completed(&self, context: &TravelContext) {
        debug!(destination = %context.destination, "NullSink::completed: discarding result");
    }

    async fn failed(&self, code: &str, message: &str) {
        debug!(%code, %message, "NullSink::failed: discarding failure");
    }
}

/// Sink that writes the outcome as a single JSON document to stdout
pub struct JsonSink;

#[async_trait]
impl ResultSink for JsonSink {
    async fn completed(&self, context: &TravelContext) {
        match serde_json::to_string_pretty(context) {
            Ok(json) => println!("{}", json),
            Err(e) => error!(error = %e, "JsonSink::completed: serialization failed"),
        }
    }

    async fn failed(&self, code: &str, message: &str) {
        println!("{}", serde_json::json!({ "error": code, "message": message }));
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Records everything emitted, for assertions
    #[derive(Default)]
    pub struct RecordingSink {
        pub completions: Mutex<Vec<String>>,
        pub failures: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ResultSink for RecordingSink {
        async fn completed(&self, context: &TravelContext) {
            self.completions.lock().unwrap().push(context.destination.clone());
        }

        async fn failed(&self, code: &str, message: &str) {
            self.failures
                .lock()
                .unwrap()
                .push((code.to_string(), message.to_string()));
        }
    }
}
