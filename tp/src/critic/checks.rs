//! The critic's sub-checks
//!
//! Each check scores a day out of 100 independently and reports the issues
//! that drove its penalties. A check that cannot run returns an explicit
//! degraded report instead of failing the critique; the caller logs it and
//! the zero score pulls the day toward rejection.

use crate::domain::{
    DayPlan, Issue, IssueKind, ItemCategory, Pace, Severity, SpendTier, TravelStyle, TravelerProfile,
};

use super::config::CriticConfig;

/// The five review dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    LogicalConsistency,
    BudgetAlignment,
    ProfileAlignment,
    TimeFeasibility,
    ActivityQuality,
}

impl CheckKind {
    /// What this check examines
    pub fn description(&self) -> &'static str {
        match self {
            Self::LogicalConsistency => "overlaps, travel-time feasibility, duration bands",
            Self::BudgetAlignment => "daily cap and tier/price coherence",
            Self::ProfileAlignment => "style, pace, interests, group size",
            Self::TimeFeasibility => "day span, travel ratio, breaks",
            Self::ActivityQuality => "variety, ratings, dining, dispersion",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::LogicalConsistency => "logical_consistency",
            Self::BudgetAlignment => "budget_alignment",
            Self::ProfileAlignment => "profile_alignment",
            Self::TimeFeasibility => "time_feasibility",
            Self::ActivityQuality => "activity_quality",
        };
        write!(f, "{}", name)
    }
}

/// One sub-check's scored result
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Which check produced this
    pub kind: CheckKind,

    /// Score out of 100, floored at 0
    pub score: f64,

    /// Issues found
    pub issues: Vec<Issue>,

    /// Improvement suggestions
    pub recommendations: Vec<String>,

    /// True when the check could not run and defaulted conservatively
    pub degraded: bool,
}

impl CheckReport {
    fn new(kind: CheckKind) -> Self {
        Self {
            kind,
            score: 100.0,
            issues: Vec::new(),
            recommendations: Vec::new(),
            degraded: false,
        }
    }

    /// Conservative zero-score report for a check that could not run
    pub fn degraded(kind: CheckKind, reason: &str) -> Self {
        Self {
            kind,
            score: 0.0,
            issues: Vec::new(),
            recommendations: vec![reason.to_string()],
            degraded: true,
        }
    }

    /// Record an issue and apply its score penalty
    fn flag(&mut self, issue: Issue, penalty: f64) {
        self.issues.push(issue);
        self.score = (self.score - penalty).max(0.0);
    }

    fn recommend(&mut self, text: &str) {
        self.recommendations.push(text.to_string());
    }
}

/// Estimated per-person cost for a category at a spend tier
///
/// Used when a scheduled item carries no explicit price. Categories without
/// a table entry are not counted.
fn estimated_cost(category: ItemCategory, tier: SpendTier) -> Option<f64> {
    let (budget, mid, luxury) = match category {
        ItemCategory::Dining => (15.0, 30.0, 80.0),
        ItemCategory::Sightseeing => (10.0, 20.0, 50.0),
        ItemCategory::Cultural => (12.0, 25.0, 60.0),
        ItemCategory::Entertainment => (20.0, 40.0, 100.0),
        ItemCategory::Shopping => (30.0, 100.0, 300.0),
        ItemCategory::Outdoor => (5.0, 15.0, 40.0),
        ItemCategory::Transport => (10.0, 20.0, 50.0),
        ItemCategory::Accommodation => return None,
    };
    Some(match tier {
        SpendTier::Budget => budget,
        SpendTier::MidRange => mid,
        SpendTier::Luxury => luxury,
    })
}

/// Check 1: logical consistency of the schedule
pub fn check_logical_consistency(day: &DayPlan, config: &CriticConfig) -> CheckReport {
    let mut report = CheckReport::new(CheckKind::LogicalConsistency);

    for pair in day.items.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);

        if current.end_time > next.start_time {
            report.flag(
                Issue::new(
                    IssueKind::TimeOverlap,
                    Severity::High,
                    format!("Activity '{}' overlaps with '{}'", current.name, next.name),
                )
                .with_detail(serde_json::json!({
                    "activities": [current.name, next.name],
                })),
                20.0,
            );
        }

        if let Some(expected) = next.travel_time_from_previous {
            let gap = (next.start_time - current.end_time).num_minutes();
            if gap < expected {
                report.flag(
                    Issue::new(
                        IssueKind::InsufficientTravelTime,
                        Severity::High,
                        format!("Insufficient travel time between '{}' and '{}'", current.name, next.name),
                    )
                    .with_detail(serde_json::json!({
                        "expected_minutes": expected,
                        "actual_minutes": gap,
                    })),
                    15.0,
                );
            }
        }
    }

    for item in &day.items {
        if item.duration_minutes < config.min_activity_minutes {
            report.flag(
                Issue::new(
                    IssueKind::TooShortActivity,
                    Severity::Medium,
                    format!("Activity '{}' is too short ({} minutes)", item.name, item.duration_minutes),
                ),
                10.0,
            );
        }
        if item.duration_minutes > config.max_activity_minutes {
            report.flag(
                Issue::new(
                    IssueKind::TooLongActivity,
                    Severity::Medium,
                    format!("Activity '{}' is too long ({} minutes)", item.name, item.duration_minutes),
                ),
                10.0,
            );
        }
    }

    if !report.issues.is_empty() {
        report.recommend("Adjust activity timing to eliminate overlaps");
        report.recommend("Ensure realistic travel times between activities");
    }
    report
}

/// Check 2: budget alignment against the traveler's declared cap and tier
pub fn check_budget_alignment(day: &DayPlan, profile: &TravelerProfile) -> CheckReport {
    let mut report = CheckReport::new(CheckKind::BudgetAlignment);
    let tier = profile.spend_tier;

    let estimated_total: f64 = day
        .items
        .iter()
        .map(|item| match item.cost {
            Some(cost) if cost > 0.0 => cost,
            _ => estimated_cost(item.category, tier).unwrap_or(0.0),
        })
        .sum();

    if let Some(daily_max) = profile.daily_budget_max
        && estimated_total > daily_max
    {
        let over_amount = estimated_total - daily_max;
        report.flag(
            Issue::new(
                IssueKind::OverBudget,
                Severity::High,
                format!(
                    "Estimated cost (${:.2}) exceeds daily budget (${:.2})",
                    estimated_total, daily_max
                ),
            )
            .with_detail(serde_json::json!({ "over_amount": over_amount })),
            30.0,
        );
    }

    // Tier/price coherence: cheap tier with pricey items, or the reverse
    let mut expensive_count = 0u32;
    for item in &day.items {
        let Some(mid_estimate) = estimated_cost(item.category, SpendTier::MidRange) else {
            continue;
        };
        match tier {
            SpendTier::Budget => {
                if item.cost.is_some_and(|c| c > mid_estimate) {
                    expensive_count += 1;
                }
            }
            SpendTier::Luxury => {
                if item.cost.is_some_and(|c| c > 0.0 && c < mid_estimate) {
                    report.flag(
                        Issue::new(
                            IssueKind::BudgetMismatch,
                            Severity::Medium,
                            format!("Activity '{}' may be too budget-oriented for luxury preference", item.name),
                        ),
                        10.0,
                    );
                }
            }
            SpendTier::MidRange => {}
        }
    }

    if expensive_count > 0 {
        report.flag(
            Issue::new(
                IssueKind::BudgetMismatch,
                Severity::Medium,
                format!("{} activities may be too expensive for budget preference", expensive_count),
            )
            .with_detail(serde_json::json!({ "count": expensive_count })),
            15.0,
        );
    }

    if !report.issues.is_empty() {
        report.recommend("Consider adjusting activity choices to match budget");
        report.recommend("Look for free or low-cost alternatives");
    }
    report
}

/// Check 3: alignment with the traveler's profile
pub fn check_profile_alignment(day: &DayPlan, profile: &TravelerProfile) -> CheckReport {
    let mut report = CheckReport::new(CheckKind::ProfileAlignment);

    let categories: Vec<ItemCategory> = day.items.iter().map(|i| i.category).collect();
    let item_count = day.items.len();

    if !profile.travel_styles.is_empty() {
        let style_match = profile.travel_styles.iter().any(|style| match style {
            TravelStyle::Cultural => categories.contains(&ItemCategory::Cultural),
            TravelStyle::Adventure => categories.contains(&ItemCategory::Outdoor),
            TravelStyle::Relaxation => item_count <= 3,
            TravelStyle::Foodie => categories.contains(&ItemCategory::Dining),
            TravelStyle::Nightlife => categories.contains(&ItemCategory::Entertainment),
            TravelStyle::Shopping => categories.contains(&ItemCategory::Shopping),
            TravelStyle::Family => true,
        });
        if !style_match {
            report.flag(
                Issue::new(
                    IssueKind::StyleMismatch,
                    Severity::Medium,
                    "Activities don't align with declared travel styles",
                ),
                20.0,
            );
        }
    }

    match profile.pace {
        Pace::Slow if item_count > 4 => {
            report.flag(
                Issue::new(
                    IssueKind::PaceMismatch,
                    Severity::Medium,
                    format!("Too many activities ({}) for slow pace preference", item_count),
                ),
                15.0,
            );
        }
        Pace::Fast if item_count < 5 => {
            report.flag(
                Issue::new(
                    IssueKind::PaceMismatch,
                    Severity::Low,
                    format!("Too few activities ({}) for fast pace preference", item_count),
                ),
                10.0,
            );
        }
        _ => {}
    }

    if !profile.interests.is_empty() {
        let interest_match = day.items.iter().any(|item| {
            let haystack = format!(
                "{} {}",
                item.name.to_lowercase(),
                item.description.as_deref().unwrap_or("").to_lowercase()
            );
            profile.interests.iter().any(|i| haystack.contains(&i.to_lowercase()))
        });
        if !interest_match {
            report.flag(
                Issue::new(
                    IssueKind::InterestMismatch,
                    Severity::Medium,
                    "Activities don't align with declared interests",
                ),
                15.0,
            );
        }
    }

    if profile.group_size > 4 {
        for item in &day.items {
            if item.category == ItemCategory::Dining && item.booking_reference.is_none() {
                report.flag(
                    Issue::new(
                        IssueKind::GroupSizeConcern,
                        Severity::Low,
                        format!(
                            "Large group ({}) may need reservations for '{}'",
                            profile.group_size, item.name
                        ),
                    ),
                    5.0,
                );
            }
        }
    }

    if !report.issues.is_empty() {
        report.recommend("Adjust activities to better match traveler preferences");
        report.recommend("Ensure activity count matches the preferred pace");
    }
    report
}

/// Check 4: time feasibility of the whole day
pub fn check_time_feasibility(day: &DayPlan, config: &CriticConfig) -> CheckReport {
    if day.items.is_empty() {
        return CheckReport::degraded(CheckKind::TimeFeasibility, "no scheduled items to assess");
    }

    let mut report = CheckReport::new(CheckKind::TimeFeasibility);

    let first = day.items.first().expect("non-empty");
    let last = day.items.last().expect("non-empty");
    let span_minutes = (last.end_time - first.start_time).num_minutes();
    if span_minutes > config.max_day_minutes {
        report.flag(
            Issue::new(
                IssueKind::DayTooLong,
                Severity::Medium,
                format!("Day is too long ({:.1} hours)", span_minutes as f64 / 60.0),
            ),
            15.0,
        );
    }

    let total_travel = day.total_travel_minutes();
    let total_activity: i64 = day.items.iter().map(|i| i.duration_minutes).sum();
    if total_activity > 0 {
        let ratio = total_travel as f64 / total_activity as f64;
        if ratio > config.max_travel_ratio {
            report.flag(
                Issue::new(
                    IssueKind::TooMuchTravel,
                    Severity::Medium,
                    format!("Too much time spent traveling ({:.1}%)", ratio * 100.0),
                )
                .with_detail(serde_json::json!({ "travel_ratio": ratio })),
                20.0,
            );
        }
    }

    for pair in day.items.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        let gap = (next.start_time - current.end_time).num_minutes();
        let travel = next.travel_time_from_previous.unwrap_or(0);
        let net_break = gap - travel;
        if net_break < config.min_break_minutes {
            report.flag(
                Issue::new(
                    IssueKind::InsufficientBreak,
                    Severity::Low,
                    format!("Insufficient break between '{}' and '{}'", current.name, next.name),
                )
                .with_detail(serde_json::json!({ "break_minutes": net_break })),
                5.0,
            );
        }
    }

    if !report.issues.is_empty() {
        report.recommend("Reduce the day's total span");
        report.recommend("Group nearby activities to cut travel time");
    }
    report
}

/// Check 5: quality of the selected activities
pub fn check_activity_quality(day: &DayPlan, config: &CriticConfig) -> CheckReport {
    let mut report = CheckReport::new(CheckKind::ActivityQuality);
    let items = &day.items;

    let unique_categories: std::collections::HashSet<ItemCategory> = items.iter().map(|i| i.category).collect();
    if items.len() > 2 && unique_categories.len() < 2 {
        report.flag(
            Issue::new(IssueKind::LackOfVariety, Severity::Low, "Itinerary lacks activity variety"),
            10.0,
        );
    }

    let low_rated: Vec<&str> = items
        .iter()
        .filter(|i| i.rating.is_some_and(|r| r < 3.0))
        .map(|i| i.name.as_str())
        .collect();
    if !low_rated.is_empty() {
        report.flag(
            Issue::new(
                IssueKind::LowRatedActivities,
                Severity::Medium,
                format!("Some activities have low ratings: {}", low_rated.join(", ")),
            ),
            15.0,
        );
    }

    if items.len() > 2 && day.dining_count() == 0 {
        report.flag(
            Issue::new(
                IssueKind::MissingDining,
                Severity::Medium,
                "No dining activities planned for the day",
            ),
            15.0,
        );
    }

    if items.len() > 3 {
        let coords: Vec<_> = items.iter().filter_map(|i| i.location).collect();
        if coords.len() > 1 {
            let lat_spread = spread(coords.iter().map(|c| c.latitude));
            let lon_spread = spread(coords.iter().map(|c| c.longitude));
            if lat_spread > config.max_coordinate_spread || lon_spread > config.max_coordinate_spread {
                report.flag(
                    Issue::new(
                        IssueKind::SpreadOutLocations,
                        Severity::Low,
                        "Activities are spread across distant locations",
                    )
                    .with_detail(serde_json::json!({
                        "lat_spread": lat_spread,
                        "lng_spread": lon_spread,
                    })),
                    10.0,
                );
            }
        }
    }

    if !report.issues.is_empty() {
        report.recommend("Add variety to activity types");
        report.recommend("Include dining options and group activities by location");
    }
    report
}

fn spread(values: impl Iterator<Item = f64>) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() { max - min } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::domain::{ApprovalStatus, ScheduledItem};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn item(name: &str, category: ItemCategory, start: NaiveDateTime, duration: i64) -> ScheduledItem {
        ScheduledItem {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            category,
            location: None,
            start_time: start,
            end_time: start + chrono::Duration::minutes(duration),
            duration_minutes: duration,
            cost: None,
            rating: None,
            travel_time_from_previous: None,
            travel_mode: None,
            booking_reference: None,
            description: None,
        }
    }

    fn day_with(items: Vec<ScheduledItem>) -> DayPlan {
        let mut day = DayPlan::new(1, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(), "Test");
        for i in items {
            day.push_item(i);
        }
        day.status = ApprovalStatus::Pending;
        day
    }

    #[test]
    fn test_overlap_is_high_severity_minus_twenty() {
        // Second activity starts 15 minutes before the first ends
        let day = day_with(vec![
            item("Palace", ItemCategory::Cultural, at(9, 0), 120),
            item("Temple", ItemCategory::Cultural, at(10, 45), 120),
        ]);

        let report = check_logical_consistency(&day, &CriticConfig::default());
        assert_eq!(report.score, 80.0);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::TimeOverlap);
        assert_eq!(report.issues[0].severity, Severity::High);
    }

    #[test]
    fn test_insufficient_travel_time() {
        let mut second = item("Temple", ItemCategory::Cultural, at(11, 10), 120);
        second.travel_time_from_previous = Some(30);
        // Gap is only 10 minutes against 30 minutes of declared travel
        let day = day_with(vec![item("Palace", ItemCategory::Cultural, at(9, 0), 120), second]);

        let report = check_logical_consistency(&day, &CriticConfig::default());
        assert!(
            report
                .issues
                .iter()
                .any(|i| i.kind == IssueKind::InsufficientTravelTime && i.severity == Severity::High)
        );
        assert_eq!(report.score, 85.0);
    }

    #[test]
    fn test_duration_band_violations() {
        let day = day_with(vec![
            item("Quick Stop", ItemCategory::Sightseeing, at(9, 0), 15),
            item("Marathon Tour", ItemCategory::Cultural, at(10, 0), 300),
        ]);

        let report = check_logical_consistency(&day, &CriticConfig::default());
        assert_eq!(report.score, 80.0);
        assert!(report.issues.iter().any(|i| i.kind == IssueKind::TooShortActivity));
        assert!(report.issues.iter().any(|i| i.kind == IssueKind::TooLongActivity));
    }

    #[test]
    fn test_over_budget_amount() {
        // $340 scheduled against a declared $250 cap
        let mut first = item("Fine Dining", ItemCategory::Dining, at(12, 0), 90);
        first.cost = Some(200.0);
        let mut second = item("Show", ItemCategory::Entertainment, at(19, 0), 120);
        second.cost = Some(140.0);
        let day = day_with(vec![first, second]);

        let profile = TravelerProfile::new(2).with_daily_budget(250.0);
        let report = check_budget_alignment(&day, &profile);

        let issue = report.issues.iter().find(|i| i.kind == IssueKind::OverBudget).unwrap();
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.detail.as_ref().unwrap()["over_amount"], 90.0);
        assert_eq!(report.score, 70.0);
    }

    #[test]
    fn test_budget_uses_category_estimates_when_cost_missing() {
        let day = day_with(vec![item("Palace", ItemCategory::Cultural, at(9, 0), 120)]);
        let profile = TravelerProfile::new(1).with_daily_budget(10.0);

        // Mid-range cultural estimate is $25, over the $10 cap
        let report = check_budget_alignment(&day, &profile);
        assert!(report.issues.iter().any(|i| i.kind == IssueKind::OverBudget));
    }

    #[test]
    fn test_style_mismatch() {
        let day = day_with(vec![
            item("Mall", ItemCategory::Shopping, at(9, 0), 90),
            item("Market", ItemCategory::Shopping, at(11, 0), 90),
            item("Outlet", ItemCategory::Shopping, at(13, 0), 90),
            item("Bazaar", ItemCategory::Shopping, at(15, 0), 90),
        ]);
        let profile = TravelerProfile::new(1).with_styles(vec![TravelStyle::Adventure]);

        let report = check_profile_alignment(&day, &profile);
        assert!(report.issues.iter().any(|i| i.kind == IssueKind::StyleMismatch));
    }

    #[test]
    fn test_pace_mismatch_slow() {
        let items = (0..5)
            .map(|i| item(&format!("Stop {}", i), ItemCategory::Sightseeing, at(9 + i, 0), 45))
            .collect();
        let day = day_with(items);
        let profile = TravelerProfile::new(1).with_pace(Pace::Slow);

        let report = check_profile_alignment(&day, &profile);
        let issue = report.issues.iter().find(|i| i.kind == IssueKind::PaceMismatch).unwrap();
        assert_eq!(issue.severity, Severity::Medium);
    }

    #[test]
    fn test_group_size_dining_without_reservation() {
        let day = day_with(vec![item("Bistro", ItemCategory::Dining, at(12, 0), 90)]);
        let profile = TravelerProfile::new(6);

        let report = check_profile_alignment(&day, &profile);
        let issue = report
            .issues
            .iter()
            .find(|i| i.kind == IssueKind::GroupSizeConcern)
            .unwrap();
        assert_eq!(issue.severity, Severity::Low);
        assert_eq!(report.score, 95.0);
    }

    #[test]
    fn test_time_feasibility_degrades_on_empty_day() {
        let day = day_with(vec![]);
        let report = check_time_feasibility(&day, &CriticConfig::default());
        assert!(report.degraded);
        assert_eq!(report.score, 0.0);
    }

    #[test]
    fn test_day_too_long() {
        let day = day_with(vec![
            item("Breakfast", ItemCategory::Dining, at(7, 0), 60),
            item("Late Show", ItemCategory::Entertainment, at(21, 0), 120),
        ]);

        let report = check_time_feasibility(&day, &CriticConfig::default());
        assert!(report.issues.iter().any(|i| i.kind == IssueKind::DayTooLong));
    }

    #[test]
    fn test_travel_ratio() {
        let mut second = item("Far Venue", ItemCategory::Sightseeing, at(11, 0), 60);
        second.travel_time_from_previous = Some(60);
        let day = day_with(vec![item("Start", ItemCategory::Sightseeing, at(9, 0), 60), second]);

        // 60 travel / 120 activity = 0.5 > 0.4
        let report = check_time_feasibility(&day, &CriticConfig::default());
        assert!(report.issues.iter().any(|i| i.kind == IssueKind::TooMuchTravel));
    }

    #[test]
    fn test_activity_quality_variety_and_dining() {
        let day = day_with(vec![
            item("Stop A", ItemCategory::Sightseeing, at(9, 0), 60),
            item("Stop B", ItemCategory::Sightseeing, at(11, 0), 60),
            item("Stop C", ItemCategory::Sightseeing, at(13, 0), 60),
        ]);

        let report = check_activity_quality(&day, &CriticConfig::default());
        assert!(report.issues.iter().any(|i| i.kind == IssueKind::LackOfVariety));
        assert!(report.issues.iter().any(|i| i.kind == IssueKind::MissingDining));
        assert_eq!(report.score, 75.0);
    }

    #[test]
    fn test_low_rated_activities() {
        let mut bad = item("Tourist Trap", ItemCategory::Sightseeing, at(9, 0), 60);
        bad.rating = Some(2.1);
        let mut good = item("Hidden Gem", ItemCategory::Cultural, at(11, 0), 60);
        good.rating = Some(4.9);
        let day = day_with(vec![bad, good]);

        let report = check_activity_quality(&day, &CriticConfig::default());
        let issue = report
            .issues
            .iter()
            .find(|i| i.kind == IssueKind::LowRatedActivities)
            .unwrap();
        assert!(issue.description.contains("Tourist Trap"));
        assert!(!issue.description.contains("Hidden Gem"));
    }

    #[test]
    fn test_dispersed_locations() {
        let mut items = Vec::new();
        for (i, lat) in [13.70, 13.72, 13.95, 13.71].iter().enumerate() {
            let mut it = item(&format!("Stop {}", i), ItemCategory::Sightseeing, at(9 + i as u32, 0), 45);
            it.location = Some(crate::domain::GeoPoint::new(*lat, 100.5));
            items.push(it);
        }
        let day = day_with(items);

        let report = check_activity_quality(&day, &CriticConfig::default());
        assert!(report.issues.iter().any(|i| i.kind == IssueKind::SpreadOutLocations));
    }
}
