//! Quality critique
//!
//! Scores a single day's itinerary across five independent dimensions and
//! decides approve/reject. The critic is the authority on correctness; the
//! scheduler is only a heuristic producer.

mod checks;
mod config;
mod core;

pub use checks::{CheckKind, CheckReport};
pub use config::CriticConfig;
pub use core::QualityCritic;
