//! comprand history command

use crate::output::render_history;
use crate::settings::Settings;
use clap::{Args, Subcommand};
use ::history::HistoryStore;
use shared::RoleHistory;

#[derive(Debug, Args)]
pub struct HistoryCommand {
    #[command(subcommand)]
    pub command: HistorySubcommand,
}

#[derive(Debug, Subcommand)]
pub enum HistorySubcommand {
    /// Show recorded roles per player
    Show {
        /// Only this player
        #[arg(short, long)]
        player: Option<String>,

        /// Print the history as JSON
        #[arg(long)]
        json: bool,
    },
    /// Forget all recorded roles
    Clear,
}

impl HistoryCommand {
    pub fn run(&self, settings: &Settings) -> anyhow::Result<()> {
        let mut store = settings.open_history()?;

        match &self.command {
            HistorySubcommand::Show { player, json } => {
                let history = match player {
                    Some(name) => {
                        let mut single = RoleHistory::new();
                        let roles = store.player_history(name)?;
                        if !roles.is_empty() {
                            single.insert(name.trim().to_string(), roles);
                        }
                        single
                    }
                    None => store.snapshot()?,
                };

                if *json {
                    println!("{}", serde_json::to_string_pretty(&history)?);
                } else {
                    println!("History file: {}", settings.history_path().display());
                    if let Some(updated_at) = store.updated_at() {
                        println!("Last updated: {}", updated_at);
                    }
                    print!("{}", render_history(&history));
                }
            }
            HistorySubcommand::Clear => {
                let players = store.len();
                store.clear()?;
                println!("✓ Cleared history for {} player(s)", players);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Assignment, Role};

    fn settings_with_history(dir: &tempfile::TempDir) -> Settings {
        let path = dir.path().join("history.json");
        let mut store = ::history::JsonHistoryStore::open(&path, None).unwrap();
        store
            .record(&[
                Assignment::new("Alice", Role::new("Duelist")),
                Assignment::new("Bob", Role::new("Sentinel")),
            ])
            .unwrap();
        Settings::load(None, Some(path)).unwrap()
    }

    #[test]
    fn test_show_runs() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_with_history(&dir);

        let cmd = HistoryCommand {
            command: HistorySubcommand::Show {
                player: Some("Alice".to_string()),
                json: true,
            },
        };
        assert!(cmd.run(&settings).is_ok());
    }

    #[test]
    fn test_clear_empties_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_with_history(&dir);

        let cmd = HistoryCommand {
            command: HistorySubcommand::Clear,
        };
        cmd.run(&settings).unwrap();

        let store = settings.open_history().unwrap();
        assert!(store.is_empty());
    }
}
