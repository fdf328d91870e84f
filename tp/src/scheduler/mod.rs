//! Itinerary scheduling
//!
//! Turns candidate pools into day-sequenced, time-slotted itineraries,
//! respecting pace, weather, and meal-variety rules.

mod config;
mod core;
mod slots;

pub use config::SchedulerConfig;
pub use core::{ItineraryScheduler, ScheduleError};
pub use slots::MealSlot;
