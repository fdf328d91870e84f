//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::{Pace, SpendTier};

/// TripDaemon - travel itinerary planning engine
#[derive(Parser)]
#[command(name = "tp", about = "Multi-day travel itinerary planning engine", version)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plan a trip against a destination catalog file
    Plan {
        /// Destination catalog (YAML with location, forecast, and candidate pools)
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,

        /// Destination name
        destination: String,

        /// Trip length in days
        #[arg(short, long, default_value = "3")]
        days: u32,

        /// First day of the trip (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        start_date: Option<NaiveDate>,

        /// Number of travelers
        #[arg(short, long, default_value = "1")]
        travelers: u32,

        /// Spend tier
        #[arg(long, value_enum, default_value = "mid-range")]
        tier: TierArg,

        /// Daily pace
        #[arg(long, value_enum, default_value = "moderate")]
        pace: PaceArg,

        /// Interest keywords (repeatable)
        #[arg(short, long)]
        interest: Vec<String>,

        /// Hard per-day budget cap in USD
        #[arg(long)]
        daily_budget: Option<f64>,

        /// User identifier for the session
        #[arg(long, default_value = "cli-user")]
        user: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the workflow phases in order
    Phases,
}

/// Output format for plan results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full enriched context as JSON
    Json,
}

/// Spend tier argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TierArg {
    Budget,
    #[value(name = "mid-range")]
    MidRange,
    Luxury,
}

impl From<TierArg> for SpendTier {
    fn from(arg: TierArg) -> Self {
        match arg {
            TierArg::Budget => SpendTier::Budget,
            TierArg::MidRange => SpendTier::MidRange,
            TierArg::Luxury => SpendTier::Luxury,
        }
    }
}

/// Pace argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaceArg {
    Slow,
    Moderate,
    Fast,
}

impl From<PaceArg> for Pace {
    fn from(arg: PaceArg) -> Self {
        match arg {
            PaceArg::Slow => Pace::Slow,
            PaceArg::Moderate => Pace::Moderate,
            PaceArg::Fast => Pace::Fast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_plan_command_defaults() {
        let cli = Cli::parse_from(["tp", "plan", "--catalog", "bangkok.yml", "Bangkok"]);
        match cli.command {
            Command::Plan {
                days,
                travelers,
                tier,
                pace,
                format,
                ..
            } => {
                assert_eq!(days, 3);
                assert_eq!(travelers, 1);
                assert_eq!(tier, TierArg::MidRange);
                assert_eq!(pace, PaceArg::Moderate);
                assert_eq!(format, OutputFormat::Text);
            }
            _ => panic!("expected plan command"),
        }
    }

    #[test]
    fn test_tier_arg_conversion() {
        assert_eq!(SpendTier::from(TierArg::Budget), SpendTier::Budget);
        assert_eq!(SpendTier::from(TierArg::MidRange), SpendTier::MidRange);
        assert_eq!(SpendTier::from(TierArg::Luxury), SpendTier::Luxury);
    }
}
