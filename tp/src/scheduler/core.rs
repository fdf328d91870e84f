//! ItineraryScheduler - turns candidate pools into day-sequenced plans
//!
//! A deliberately greedy allocator: earlier days take candidates first and
//! consumed items never reappear. The scheduler is a heuristic producer;
//! the critic is the authority on whether a day is acceptable.

use std::sync::Arc;

use chrono::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::collaborators::TravelTimeEstimator;
use crate::domain::{Candidate, DayForecast, DayPlan, ScheduledItem, TravelContext, TravelMode};

use super::config::SchedulerConfig;
use super::slots::{self, MealSlot};

/// Scheduler input errors
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("candidate pools are required in travel context")]
    MissingCandidates,
}

/// Hints parsed from the orchestrator's revision feedback digest
///
/// The digest is free text; these are best-effort keyword reads, not a
/// closed-loop fix of each flagged issue.
#[derive(Debug, Default, Clone, Copy)]
struct FeedbackHints {
    prefer_cheaper: bool,
    widen_buffer: bool,
}

impl FeedbackHints {
    fn parse(feedback: Option<&str>) -> Self {
        let Some(text) = feedback else {
            return Self::default();
        };
        let text = text.to_lowercase();
        let prefer_cheaper = ["budget", "cost", "expensive", "exceeds"]
            .iter()
            .any(|kw| text.contains(kw));
        let widen_buffer = ["overlap", "travel time", "insufficient", "break"]
            .iter()
            .any(|kw| text.contains(kw));
        Self {
            prefer_cheaper,
            widen_buffer,
        }
    }
}

/// Builds multi-day itineraries from a context's candidate pools
pub struct ItineraryScheduler {
    travel: Arc<dyn TravelTimeEstimator>,
    config: SchedulerConfig,
}

impl ItineraryScheduler {
    pub fn new(travel: Arc<dyn TravelTimeEstimator>, config: SchedulerConfig) -> Self {
        Self { travel, config }
    }

    /// Generate one DayPlan per trip day
    ///
    /// `feedback` is the orchestrator's revision digest (None on the first
    /// pass); `revision` is the current revision cycle, recorded on each day.
    pub async fn generate(
        &self,
        ctx: &TravelContext,
        feedback: Option<&str>,
        revision: u32,
    ) -> Result<Vec<DayPlan>, ScheduleError> {
        debug!(
            destination = %ctx.destination,
            days = ctx.duration_days,
            revision,
            "ItineraryScheduler::generate: called"
        );
        if !ctx.has_candidates() {
            return Err(ScheduleError::MissingCandidates);
        }

        let hints = FeedbackHints::parse(feedback);
        let buffer_minutes = self.config.buffer_minutes + if hints.widen_buffer { 15 } else { 0 };

        let mut pois = ctx.pois.clone();
        let mut activities = ctx.activities.clone();
        let mut restaurants = ctx.restaurants.clone();

        if hints.prefer_cheaper {
            debug!("ItineraryScheduler::generate: cost feedback, preferring cheaper candidates");
            sort_cheapest_first(&mut pois);
            sort_cheapest_first(&mut activities);
            sort_cheapest_first(&mut restaurants);
        } else if revision > 0 {
            // Plain "try again": advance the rotation so the regenerated
            // plan differs from the rejected one
            rotate_pool(&mut pois, revision as usize);
            rotate_pool(&mut activities, revision as usize);
        }

        let mut itinerary = Vec::with_capacity(ctx.duration_days as usize);
        for day_index in 1..=ctx.duration_days {
            let date = ctx.date_of_day(day_index);
            let forecast = ctx
                .forecast_for(date)
                .cloned()
                .unwrap_or_else(|| DayForecast::unknown(date));

            let day = self
                .build_day(
                    day_index,
                    &forecast,
                    ctx,
                    &mut pois,
                    &mut activities,
                    &mut restaurants,
                    buffer_minutes,
                    revision,
                )
                .await;
            itinerary.push(day);
        }

        info!(
            days = itinerary.len(),
            scheduled = itinerary.iter().map(|d| d.items.len()).sum::<usize>(),
            revision,
            "Generated itinerary"
        );
        Ok(itinerary)
    }

    /// Construct one day, consuming candidates from the shared pools
    #[allow(clippy::too_many_arguments)]
    async fn build_day(
        &self,
        day_index: u32,
        forecast: &DayForecast,
        ctx: &TravelContext,
        pois: &mut Vec<Candidate>,
        activities: &mut Vec<Candidate>,
        restaurants: &mut Vec<Candidate>,
        buffer_minutes: i64,
        revision: u32,
    ) -> DayPlan {
        let adverse = forecast.is_adverse();
        let budget = self.config.activity_budget(ctx.profile.pace);
        debug!(day_index, adverse, budget, "ItineraryScheduler::build_day: called");

        // Half the budget from each non-dining pool, indoor-first on bad days
        let mut selected_pois = take_candidates(pois, budget / 2, adverse);
        let mut selected_activities = take_candidates(activities, budget / 2, adverse);

        let meals = select_meals(restaurants);

        // Interleave: breakfast -> morning block -> lunch -> afternoon block -> dinner
        let mut ordered: Vec<Candidate> = Vec::new();
        let meal_for = |slot: MealSlot, ordered: &mut Vec<Candidate>| {
            if let Some(candidate) = meals.iter().find(|(s, _)| *s == slot).map(|(_, c)| c.clone()) {
                ordered.push(candidate);
            }
        };

        meal_for(MealSlot::Breakfast, &mut ordered);

        let mut non_dining: Vec<Candidate> = Vec::new();
        non_dining.append(&mut selected_pois);
        non_dining.append(&mut selected_activities);

        let morning_len = non_dining.len().min(self.config.morning_block_size);
        let mut morning: Vec<Candidate> = non_dining.drain(..morning_len).collect();
        let mut afternoon: Vec<Candidate> = non_dining
            .drain(..non_dining.len().min(self.config.afternoon_block_size))
            .collect();

        // Anything selected but not placed goes back to its pool
        for leftover in non_dining {
            match leftover.source {
                crate::domain::CandidateSource::Poi => pois.push(leftover),
                _ => activities.push(leftover),
            }
        }

        ordered.append(&mut morning);
        meal_for(MealSlot::Lunch, &mut ordered);
        ordered.append(&mut afternoon);
        meal_for(MealSlot::Dinner, &mut ordered);

        let theme = slots::theme_for(&ordered.iter().collect::<Vec<_>>(), adverse);
        let mut day = DayPlan::new(day_index, forecast.date, theme);
        day.revision_count = revision;

        // Sequential timing: start = previous end + travel + buffer
        let mut current = forecast
            .date
            .and_hms_opt(self.config.day_start_hour, 0, 0)
            .expect("valid day start hour");
        for candidate in ordered {
            let travel = if day.items.is_empty() {
                None
            } else {
                let prev = day.items.last().expect("non-empty");
                Some(
                    self.travel
                        .estimate_minutes(prev.location, candidate.location, TravelMode::Walking)
                        .await,
                )
            };

            let start = match travel {
                None => current,
                Some(minutes) => current + Duration::minutes(minutes + buffer_minutes),
            };
            let duration = candidate.effective_duration_minutes();
            let end = start + Duration::minutes(duration);

            day.push_item(ScheduledItem {
                id: candidate.id.clone(),
                name: candidate.name.clone(),
                category: candidate.category,
                location: candidate.location,
                start_time: start,
                end_time: end,
                duration_minutes: duration,
                cost: candidate.cost,
                rating: candidate.rating,
                travel_time_from_previous: travel,
                travel_mode: travel.map(|_| TravelMode::Walking),
                booking_reference: None,
                description: candidate.description.clone(),
            });
            current = end;
        }

        day.special_considerations = slots::special_considerations(&day, forecast, self.config.high_cost_threshold);
        day.weather = Some(forecast.clone());
        day
    }
}

/// Remove up to `count` candidates from a pool, indoor-compatible first when
/// `prefer_indoor` is set, topping up from the general pool when the indoor
/// supply runs short
fn take_candidates(pool: &mut Vec<Candidate>, count: usize, prefer_indoor: bool) -> Vec<Candidate> {
    let mut taken = Vec::new();
    if prefer_indoor {
        let mut i = 0;
        while taken.len() < count && i < pool.len() {
            if pool[i].is_indoor_compatible() {
                taken.push(pool.remove(i));
            } else {
                i += 1;
            }
        }
    }
    while taken.len() < count && !pool.is_empty() {
        taken.push(pool.remove(0));
    }
    taken
}

/// Pick one restaurant per meal slot, slot-suitable first, any unused as
/// fallback; each venue is used at most once
fn select_meals(restaurants: &mut Vec<Candidate>) -> Vec<(MealSlot, Candidate)> {
    let mut meals = Vec::new();
    for slot in MealSlot::ALL {
        if restaurants.is_empty() {
            break;
        }
        let index = restaurants
            .iter()
            .position(|r| slots::is_slot_suitable(r, slot))
            .unwrap_or(0);
        meals.push((slot, restaurants.remove(index)));
    }
    meals
}

/// Stable sort putting the cheapest candidates first
fn sort_cheapest_first(pool: &mut [Candidate]) {
    pool.sort_by(|a, b| {
        effective_cost(a)
            .partial_cmp(&effective_cost(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

fn effective_cost(candidate: &Candidate) -> f64 {
    candidate
        .cost
        .unwrap_or_else(|| f64::from(candidate.price_level.unwrap_or(2)) * 10.0)
}

fn rotate_pool(pool: &mut [Candidate], by: usize) {
    if !pool.is_empty() {
        pool.rotate_left(by % pool.len());
    }
}
