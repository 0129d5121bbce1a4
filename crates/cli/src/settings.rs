//! Settings resolved from the config file and global flags

use anyhow::Context;
use history::JsonHistoryStore;
use shared::RandomizerConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "comprand.yaml";

/// History file used when neither flag nor config names one
pub const DEFAULT_HISTORY_FILE: &str = "comprand-history.json";

/// Effective settings for a command
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: RandomizerConfig,
    history_path: PathBuf,
}

impl Settings {
    /// Load settings; an explicit config path must exist, the default one may not
    pub fn load(config_path: Option<&Path>, history_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => RandomizerConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    RandomizerConfig::from_file(default)
                        .with_context(|| format!("failed to load config {}", default.display()))?
                } else {
                    RandomizerConfig::default()
                }
            }
        };

        let history_path = history_path
            .or_else(|| config.history_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_FILE));

        debug!(history = %history_path.display(), "Settings loaded");
        Ok(Self {
            config,
            history_path,
        })
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    /// Open the file-backed history store
    pub fn open_history(&self) -> anyhow::Result<JsonHistoryStore> {
        JsonHistoryStore::open(&self.history_path, self.config.history_limit)
            .with_context(|| format!("failed to open history {}", self.history_path.display()))
    }
}
