//! Configuration types and loading
//!
//! YAML configuration with a fallback chain: explicit path, project-local
//! `.tripdaemon.yml`, user config under `~/.config/tripdaemon/`, then
//! defaults. Defaults carry the engine's documented constants.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::budget::BudgetConfig;
use crate::critic::CriticConfig;
use crate::scheduler::SchedulerConfig;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Workflow orchestration settings
    pub workflow: WorkflowConfig,

    /// Scheduler constants
    pub scheduler: SchedulerConfig,

    /// Critic thresholds
    pub critic: CriticConfig,

    /// Budget estimation settings
    pub budget: BudgetConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".tripdaemon.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tripdaemon").join("tripdaemon.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Validate configuration before use
    ///
    /// Call early in startup to fail fast with a clear message.
    pub fn validate(&self) -> Result<()> {
        if self.workflow.max_revision_cycles == 0 {
            return Err(eyre::eyre!("workflow.max-revision-cycles must be at least 1"));
        }
        if !(0.0..=100.0).contains(&self.critic.minimum_score) {
            tracing::warn!(
                minimum_score = self.critic.minimum_score,
                "critic.minimum-score outside 0-100; days may never be approved"
            );
        }
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Workflow orchestration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Maximum critique/revision cycles before force-accepting the best
    /// candidate
    #[serde(rename = "max-revision-cycles")]
    pub max_revision_cycles: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_revision_cycles: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.workflow.max_revision_cycles, 3);
        assert_eq!(config.critic.minimum_score, 70.0);
        assert_eq!(config.scheduler.moderate_pace_activities, 4);
        assert_eq!(config.budget.currency, "USD");
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
workflow:
  max-revision-cycles: 5

scheduler:
  buffer-minutes: 20
  fast-pace-activities: 8

critic:
  minimum-score: 75
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.workflow.max_revision_cycles, 5);
        assert_eq!(config.scheduler.buffer_minutes, 20);
        assert_eq!(config.scheduler.fast_pace_activities, 8);
        assert_eq!(config.critic.minimum_score, 75.0);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = "critic:\n  minimum-score: 60\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.critic.minimum_score, 60.0);
        assert_eq!(config.workflow.max_revision_cycles, 3);
        assert_eq!(config.scheduler.buffer_minutes, 30);
    }

    #[test]
    fn test_validate_rejects_zero_cycles() {
        let mut config = Config::default();
        config.workflow.max_revision_cycles = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
