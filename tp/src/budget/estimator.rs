//! BudgetEstimator - prices an approved itinerary
//!
//! Pure arithmetic over the itinerary plus read-only reference tables:
//! destination and tier multipliers, per-traveler scaling, category
//! accumulation, and a synthesized local-transport line for days without
//! one. Advisory insights ride along with the numbers.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{
    BudgetBreakdown, BudgetInsights, CategoryTotals, CostCategory, CostLine, DayBudget, DayPlan, SpendTier,
    TierComparison, TravelContext,
};

use super::tables;

/// Budget estimation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Currency tag attached to every breakdown
    pub currency: String,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
        }
    }
}

/// Prices itineraries against traveler count, destination, and spend tier
pub struct BudgetEstimator {
    config: BudgetConfig,
}

impl BudgetEstimator {
    pub fn new(config: BudgetConfig) -> Self {
        Self { config }
    }

    /// Price a multi-day itinerary
    pub fn estimate(&self, itinerary: &[DayPlan], ctx: &TravelContext) -> BudgetBreakdown {
        let location_multiplier = tables::destination_multiplier(&ctx.destination);
        let tier_multiplier = ctx.profile.spend_tier.cost_multiplier();
        let travelers = ctx.travelers.max(1);
        debug!(
            destination = %ctx.destination,
            location_multiplier,
            tier_multiplier,
            travelers,
            "BudgetEstimator::estimate: called"
        );

        let mut daily = Vec::with_capacity(itinerary.len());
        let mut category_totals = CategoryTotals::default();

        for day in itinerary {
            let day_budget = self.price_day(day, travelers, location_multiplier, tier_multiplier);
            category_totals.merge(&day_budget.categories);
            daily.push(day_budget);
        }

        let total_cost: f64 = daily.iter().map(|d| d.total_cost).sum();
        let days = itinerary.len().max(1) as f64;
        let daily_average_per_person = total_cost / days / f64::from(travelers);

        let insights = self.generate_insights(ctx, total_cost, daily_average_per_person, &category_totals);

        info!(total_cost, daily_average_per_person, "Estimated trip budget");

        BudgetBreakdown {
            daily,
            category_totals,
            total_cost,
            daily_average_per_person,
            location_multiplier,
            tier_multiplier,
            currency: self.config.currency.clone(),
            calculated_at: Utc::now(),
            insights,
        }
    }

    /// Price one day's items, synthesizing transport when absent
    fn price_day(&self, day: &DayPlan, travelers: u32, location_multiplier: f64, tier_multiplier: f64) -> DayBudget {
        let mut categories = CategoryTotals::default();
        let mut lines = Vec::new();

        for item in &day.items {
            let base = match item.cost {
                Some(cost) if cost > 0.0 => cost,
                _ => tables::default_category_cost(item.category),
            };
            let cost_per_person = round2(base * location_multiplier * tier_multiplier);
            let total_cost = cost_per_person * f64::from(travelers);
            let category = tables::cost_category_for(item.category);

            categories.add(category, total_cost);
            lines.push(CostLine {
                name: item.name.clone(),
                category,
                cost_per_person,
                total_cost,
            });
        }

        // Every day carries a transport cost even when no transport item
        // was scheduled
        if categories.get(CostCategory::Transport) == 0.0 {
            let cost_per_person =
                round2(tables::default_category_cost(crate::domain::ItemCategory::Transport)
                    * location_multiplier
                    * tier_multiplier);
            let total_cost = cost_per_person * f64::from(travelers);
            categories.add(CostCategory::Transport, total_cost);
            lines.push(CostLine {
                name: "Local Transportation".to_string(),
                category: CostCategory::Transport,
                cost_per_person,
                total_cost,
            });
        }

        let total_cost = categories.total();
        DayBudget {
            day_index: day.day_index,
            date: day.date,
            theme: day.theme.clone(),
            categories,
            lines,
            total_cost,
            cost_per_person: total_cost / f64::from(travelers),
        }
    }

    /// Advisory warnings, recommendations, and tips
    fn generate_insights(
        &self,
        ctx: &TravelContext,
        total_cost: f64,
        daily_per_person: f64,
        category_totals: &CategoryTotals,
    ) -> BudgetInsights {
        let mut insights = BudgetInsights::default();
        let tier = ctx.profile.spend_tier;

        match tier {
            SpendTier::Budget if daily_per_person > 80.0 => {
                insights
                    .warnings
                    .push("Daily costs may exceed budget expectations - consider more economical options".to_string());
            }
            SpendTier::Luxury if daily_per_person < 150.0 => {
                insights
                    .recommendations
                    .push("Room for premium experiences within luxury budget".to_string());
            }
            _ => {}
        }

        if total_cost > 0.0 {
            let dining_share = category_totals.dining / total_cost * 100.0;
            if dining_share > 50.0 {
                insights
                    .warnings
                    .push("High proportion of budget on dining - consider mixing restaurant types".to_string());
            } else if dining_share < 25.0 {
                insights
                    .recommendations
                    .push("Budget allows for more diverse dining experiences".to_string());
            }

            let activity_share = (category_totals.attractions + category_totals.activities) / total_cost * 100.0;
            if activity_share < 30.0 {
                insights
                    .recommendations
                    .push("Consider adding more paid activities or attractions".to_string());
            }
        }

        if ctx.travelers > 4 {
            insights
                .tips
                .push("Look for group discounts at attractions and restaurants".to_string());
            insights
                .tips
                .push("Consider family-style dining to reduce costs".to_string());
        }

        let destination = ctx.destination.to_lowercase();
        if ["new york", "london", "paris", "tokyo"].iter().any(|c| destination.contains(c)) {
            insights
                .tips
                .push("High-cost city: consider lunch specials and happy hour deals".to_string());
            insights
                .tips
                .push("Many world-class museums offer free or discounted hours".to_string());
        }

        insights.tips.extend([
            "Book attraction tickets online for potential discounts".to_string(),
            "Use public transportation for cost-effective city travel".to_string(),
            "Consider picnic lunches in parks to save on meal costs".to_string(),
        ]);

        let expected_daily_range = tier.expected_daily_range();
        let (_, high) = expected_daily_range;
        let variance_percentage = if daily_per_person > high {
            round1((daily_per_person - high) / high * 100.0)
        } else {
            0.0
        };
        insights.comparison = Some(TierComparison {
            expected_daily_range,
            actual_daily_per_person: round2(daily_per_person),
            within_range: daily_per_person >= expected_daily_range.0 && daily_per_person <= expected_daily_range.1,
            variance_percentage,
        });

        insights
    }
}

impl Default for BudgetEstimator {
    fn default() -> Self {
        Self::new(BudgetConfig::default())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
