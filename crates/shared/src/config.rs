//! Configuration types for the comp randomizer

use crate::agent::{AgentCatalog, AgentMode, LockedAgents};
use crate::error::CompError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tuning of the history-aware role scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecencyWeights {
    /// Upper bound (exclusive) of the random base score
    pub base_range: f64,

    /// How many past assignments can still cost points
    pub lookback: usize,

    /// Points deducted per unit of recency penalty
    pub penalty_scale: f64,
}

impl Default for RecencyWeights {
    fn default() -> Self {
        Self {
            base_range: 10.0,
            lookback: 4,
            penalty_scale: 3.0,
        }
    }
}

/// Randomizer configuration file (comprand.yaml / comprand.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomizerConfig {
    #[serde(default)]
    pub agent_mode: AgentMode,

    /// Role to double, or "Random"
    pub primary_role: Option<String>,

    #[serde(default)]
    pub locked_agents: LockedAgents,

    /// Where role history is kept between runs
    pub history_path: Option<PathBuf>,

    /// Entries kept per player (None = unbounded)
    #[serde(default = "default_history_limit")]
    pub history_limit: Option<usize>,

    /// Shuffle the role pool before assignment
    #[serde(default = "default_shuffle_pool")]
    pub shuffle_pool: bool,

    #[serde(default)]
    pub weights: RecencyWeights,

    /// Replaces the built-in agent catalog
    pub catalog: Option<AgentCatalog>,
}

fn default_history_limit() -> Option<usize> {
    Some(20)
}

fn default_shuffle_pool() -> bool {
    true
}

impl Default for RandomizerConfig {
    fn default() -> Self {
        Self {
            agent_mode: AgentMode::None,
            primary_role: None,
            locked_agents: LockedAgents::new(),
            history_path: None,
            history_limit: default_history_limit(),
            shuffle_pool: default_shuffle_pool(),
            weights: RecencyWeights::default(),
            catalog: None,
        }
    }
}

impl RandomizerConfig {
    /// Load configuration from a YAML or JSON file, chosen by extension
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            other => {
                return Err(CompError::Config(format!(
                    "unsupported config extension {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> crate::Result<()> {
        if !self.weights.base_range.is_finite() || self.weights.base_range <= 0.0 {
            return Err(CompError::Config("weights.baseRange must be finite and positive".to_string()));
        }
        if !self.weights.penalty_scale.is_finite() || self.weights.penalty_scale < 0.0 {
            return Err(CompError::Config(
                "weights.penaltyScale must be finite and not negative".to_string(),
            ));
        }
        if let Some(limit) = self.history_limit {
            if limit < self.weights.lookback {
                return Err(CompError::Config(format!(
                    "historyLimit ({}) must be at least weights.lookback ({})",
                    limit, self.weights.lookback
                )));
            }
        }
        Ok(())
    }

    /// The configured catalog, or the built-in one
    pub fn catalog(&self) -> AgentCatalog {
        self.catalog.clone().unwrap_or_else(AgentCatalog::builtin)
    }
}
