//! comprand init command

use crate::settings::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::path::PathBuf;

const EXAMPLE_CONFIG: &str = r#"# comprand configuration

# Agent mode: none, random or lock
agentMode: random

# Role to double, or Random
primaryRole: Random

# Agents pinned per role for lock mode
lockedAgents:
  Duelist: Jett
  Controller: Omen
  Initiator: Sova
  Sentinel: Killjoy

# Role history between runs
historyPath: comprand-history.json
historyLimit: 20

# Shuffle the role pool before assigning (only affects ties)
shufflePool: true

weights:
  baseRange: 10.0
  lookback: 4
  penaltyScale: 3.0
"#;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to write the config into
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let path = self.directory.join(DEFAULT_CONFIG_FILE);

        if path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }

        std::fs::create_dir_all(&self.directory)?;
        std::fs::write(&path, EXAMPLE_CONFIG)?;

        println!("✓ Wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AgentMode, RandomizerConfig};

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = InitCommand {
            directory: dir.path().join("team"),
            force: false,
        };
        cmd.run().unwrap();

        let config = RandomizerConfig::from_file(&dir.path().join("team").join(DEFAULT_CONFIG_FILE))
            .unwrap();
        assert_eq!(config.agent_mode, AgentMode::Random);
        assert_eq!(config.locked_agents.len(), 4);
        assert_eq!(config.history_limit, Some(20));
        config.catalog().validate_lock(&"Sentinel".into(), "Killjoy").unwrap();
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = InitCommand {
            directory: dir.path().to_path_buf(),
            force: false,
        };
        cmd.run().unwrap();
        assert!(cmd.run().is_err());

        cmd.force = true;
        assert!(cmd.run().is_ok());
    }
}
