//! Budget breakdown types
//!
//! Produced by the estimator after an itinerary is approved. The numeric
//! invariant: trip total == sum of day totals == sum of each day's category
//! totals, within floating-point tolerance.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Cost categories in the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Dining,
    Attractions,
    Activities,
    Entertainment,
    Shopping,
    Transport,
}

impl CostCategory {
    /// All categories, in display order
    pub const ALL: [CostCategory; 6] = [
        Self::Dining,
        Self::Attractions,
        Self::Activities,
        Self::Entertainment,
        Self::Shopping,
        Self::Transport,
    ];
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Dining => "dining",
            Self::Attractions => "attractions",
            Self::Activities => "activities",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Transport => "transport",
        };
        write!(f, "{}", name)
    }
}

/// Per-category running totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub dining: f64,
    pub attractions: f64,
    pub activities: f64,
    pub entertainment: f64,
    pub shopping: f64,
    pub transport: f64,
}

impl CategoryTotals {
    /// Add an amount to one category
    pub fn add(&mut self, category: CostCategory, amount: f64) {
        match category {
            CostCategory::Dining => self.dining += amount,
            CostCategory::Attractions => self.attractions += amount,
            CostCategory::Activities => self.activities += amount,
            CostCategory::Entertainment => self.entertainment += amount,
            CostCategory::Shopping => self.shopping += amount,
            CostCategory::Transport => self.transport += amount,
        }
    }

    /// Read one category
    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Dining => self.dining,
            CostCategory::Attractions => self.attractions,
            CostCategory::Activities => self.activities,
            CostCategory::Entertainment => self.entertainment,
            CostCategory::Shopping => self.shopping,
            CostCategory::Transport => self.transport,
        }
    }

    /// Sum across all categories
    pub fn total(&self) -> f64 {
        CostCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Fold another set of totals into this one
    pub fn merge(&mut self, other: &CategoryTotals) {
        for category in CostCategory::ALL {
            self.add(category, other.get(category));
        }
    }
}

/// One priced line item within a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostLine {
    /// Item name, e.g. "Grand Palace" or "Local Transportation"
    pub name: String,

    /// Category the cost accrues to
    pub category: CostCategory,

    /// Cost per traveler after multipliers
    pub cost_per_person: f64,

    /// Cost for the whole group
    pub total_cost: f64,
}

/// Priced breakdown for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayBudget {
    /// 1-based day number
    pub day_index: u32,

    /// Calendar date
    pub date: NaiveDate,

    /// Theme carried over from the day plan
    pub theme: String,

    /// Per-category totals for the group
    pub categories: CategoryTotals,

    /// Priced line items
    pub lines: Vec<CostLine>,

    /// Group total for the day
    pub total_cost: f64,

    /// Per-traveler total for the day
    pub cost_per_person: f64,
}

/// Advisory output alongside the numeric breakdown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetInsights {
    /// Things that look wrong, e.g. spend above the tier's expected range
    pub warnings: Vec<String>,

    /// Suggested adjustments
    pub recommendations: Vec<String>,

    /// Fixed money-saving tips
    pub tips: Vec<String>,

    /// Comparison against the tier's expected daily range
    pub comparison: Option<TierComparison>,
}

/// How actual spend compares to the tier's expected per-person daily range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierComparison {
    /// Expected (low, high) per-person daily spend for the tier
    pub expected_daily_range: (f64, f64),

    /// Actual per-person daily spend
    pub actual_daily_per_person: f64,

    /// Whether actual falls inside the expected range
    pub within_range: bool,

    /// Percent above the range's high end; 0 when at or below it
    pub variance_percentage: f64,
}

/// Full priced breakdown for a trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    /// Per-day breakdowns, in day order
    pub daily: Vec<DayBudget>,

    /// Per-category totals across the trip
    pub category_totals: CategoryTotals,

    /// Group total for the trip
    pub total_cost: f64,

    /// Average spend per traveler per day
    pub daily_average_per_person: f64,

    /// Destination cost-of-living multiplier that was applied
    pub location_multiplier: f64,

    /// Spend-tier multiplier that was applied
    pub tier_multiplier: f64,

    /// Currency of every amount in this breakdown
    pub currency: String,

    /// When the estimate was computed
    pub calculated_at: DateTime<Utc>,

    /// Advisory insights
    pub insights: BudgetInsights,
}
