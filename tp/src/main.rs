//! TripDaemon CLI entry point

use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::{debug, info};

use tripdaemon::cli::{Cli, Command, OutputFormat};
use tripdaemon::collaborators::{FileCatalog, HaversineEstimator, JsonSink, NullSink, ResultSink};
use tripdaemon::config::Config;
use tripdaemon::domain::{TravelerProfile, WorkflowPhase};
use tripdaemon::events::{PlanEvent, create_event_bus};
use tripdaemon::workflow::{PlanRequest, WorkflowOrchestrator};

fn setup_logging(cli_log_level: Option<&str>) -> Result<()> {
    let level = match cli_log_level.map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            other => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", other);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    // Logs go to stderr; stdout is reserved for plan output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    debug!(command = ?std::env::args().nth(1), "main: dispatching command");
    match cli.command {
        Command::Plan {
            catalog,
            destination,
            days,
            start_date,
            travelers,
            tier,
            pace,
            interest,
            daily_budget,
            user,
            format,
        } => {
            let start_date = start_date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let mut profile = TravelerProfile::new(travelers)
                .with_tier(tier.into())
                .with_pace(pace.into())
                .with_interests(interest);
            profile.daily_budget_max = daily_budget;

            let request = PlanRequest {
                user_id: user,
                destination,
                start_date,
                duration_days: days,
                travelers,
                profile,
                food_preferences: vec![],
                activity_preferences: vec![],
                poi_preferences: vec![],
            };

            cmd_plan(&config, &catalog, request, format).await
        }
        Command::Phases => {
            cmd_phases();
            Ok(())
        }
    }
}

/// Run the full planning pipeline against a catalog file
async fn cmd_plan(
    config: &Config,
    catalog_path: &std::path::Path,
    request: PlanRequest,
    format: OutputFormat,
) -> Result<()> {
    let catalog = Arc::new(FileCatalog::load(catalog_path).context("Failed to load destination catalog")?);

    let sink: Arc<dyn ResultSink> = match format {
        OutputFormat::Json => Arc::new(JsonSink),
        OutputFormat::Text => Arc::new(NullSink),
    };

    let events = create_event_bus();
    let mut progress = events.subscribe();
    let show_progress = format == OutputFormat::Text;
    let progress_task = tokio::spawn(async move {
        while let Ok(event) = progress.recv().await {
            if !show_progress {
                continue;
            }
            match event {
                PlanEvent::PhaseStarted { phase, .. } => {
                    eprintln!("{}", format!("  -> {}", phase).dimmed());
                }
                PlanEvent::DayCritiqued {
                    day_index,
                    score,
                    approved,
                    ..
                } => {
                    let verdict = if approved { "approved".green() } else { "rejected".red() };
                    eprintln!("{}", format!("     day {} scored {:.1} ({})", day_index, score, verdict).dimmed());
                }
                PlanEvent::RevisionStarted { cycle, .. } => {
                    eprintln!("{}", format!("     revision cycle {}", cycle).yellow());
                }
                _ => {}
            }
        }
    });

    let mut orchestrator = WorkflowOrchestrator::new(
        catalog.clone(),
        catalog,
        Arc::new(HaversineEstimator::new()),
        sink,
        events,
        config,
    );

    let outcome = orchestrator.plan_trip(request).await;
    progress_task.abort();

    let outcome = outcome.map_err(|e| eyre::eyre!("Planning failed: {}", e))?;
    info!(session_id = %outcome.session_id, "Plan ready");

    if format == OutputFormat::Text {
        print_summary(&outcome);
    }
    Ok(())
}

/// Human-readable plan summary
fn print_summary(outcome: &tripdaemon::workflow::PlanningOutcome) {
    let ctx = &outcome.context;
    println!();
    println!(
        "{} {} ({} days, {} travelers)",
        "Itinerary for".bold(),
        ctx.destination.bold().cyan(),
        ctx.duration_days,
        ctx.travelers
    );

    if let Some(warning) = &outcome.warning {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    let Some(itinerary) = &ctx.itinerary else {
        return;
    };
    for day in itinerary {
        println!();
        println!(
            "{} {} - {} [{}]",
            format!("Day {}", day.day_index).bold(),
            day.date,
            day.theme,
            day.status
        );
        if let Some(weather) = &day.weather {
            println!("  weather: {}", weather.summary());
        }
        for item in &day.items {
            let travel = item
                .travel_time_from_previous
                .map(|m| format!(" ({}m travel)", m))
                .unwrap_or_default();
            println!(
                "  {}-{}  {} [{}]{}",
                item.start_time.format("%H:%M"),
                item.end_time.format("%H:%M"),
                item.name,
                item.category,
                travel.dimmed()
            );
        }
        if let Some(notes) = &day.special_considerations {
            println!("  {} {}", "note:".yellow(), notes);
        }
    }

    if let Some(budget) = &ctx.budget {
        println!();
        println!("{}", "Budget".bold());
        println!(
            "  total: {} {}  (avg {:.2}/person/day)",
            format!("{:.2}", budget.total_cost).green().bold(),
            budget.currency,
            budget.daily_average_per_person
        );
        println!(
            "  multipliers: destination x{:.1}, tier x{:.1}",
            budget.location_multiplier, budget.tier_multiplier
        );
        for warning in &budget.insights.warnings {
            println!("  {} {}", "warning:".yellow(), warning);
        }
        for rec in &budget.insights.recommendations {
            println!("  {} {}", "tip:".cyan(), rec);
        }
    }
    println!();
}

/// Print the workflow phase sequence
fn cmd_phases() {
    let phases = [
        (WorkflowPhase::GatheringInfo, "resolve location, weather, candidate pools"),
        (WorkflowPhase::GeneratingPlan, "build day-by-day schedules"),
        (WorkflowPhase::Reviewing, "critic scores each day"),
        (WorkflowPhase::Revising, "regenerate with critique feedback (bounded)"),
        (WorkflowPhase::EstimatingBudget, "price the approved itinerary"),
        (WorkflowPhase::FormattingOutput, "hand off to the output boundary"),
        (WorkflowPhase::Completed, "terminal success"),
        (WorkflowPhase::Error, "terminal failure (reachable from any phase)"),
    ];
    for (phase, description) in phases {
        println!("{:<20} {}", phase.to_string().bold(), description);
    }
}
