//! comprand generate command

use crate::output::render_composition;
use crate::settings::Settings;
use clap::Args;
use engine::{CompositionGenerator, GenerationRequest, HistoryStore, InMemoryHistoryStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{AgentMode, InvalidInputError, Role, RoleChoice, RANDOM_ROLE};

/// Parse a `Role=Agent` lock
pub fn parse_lock(value: &str) -> Result<(Role, String), InvalidInputError> {
    let (role, agent) = value
        .split_once('=')
        .ok_or_else(|| InvalidInputError::new(format!("expected Role=Agent, got '{}'", value)))?;

    let (role, agent) = (role.trim(), agent.trim());
    if role.is_empty() || agent.is_empty() {
        return Err(InvalidInputError::new(format!("expected Role=Agent, got '{}'", value)));
    }

    Ok((Role::new(role), agent.to_string()))
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Player names (repeat the flag or separate with commas)
    #[arg(short, long = "player", value_delimiter = ',', required = true)]
    pub players: Vec<String>,

    /// Role to double, or "Random"
    #[arg(short, long)]
    pub role: Option<String>,

    /// Agent mode: none, random or lock
    #[arg(short, long)]
    pub agents: Option<AgentMode>,

    /// Pin an agent to a role for lock mode (e.g. Duelist=Jett)
    #[arg(short, long = "lock", value_parser = parse_lock)]
    pub locks: Vec<(Role, String)>,

    /// Seed for a reproducible result
    #[arg(long)]
    pub seed: Option<u64>,

    /// Neither read nor update the history file
    #[arg(long)]
    pub no_history: bool,

    /// Print the composition as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    /// Merge flags over the config file
    pub fn request(&self, settings: &Settings) -> GenerationRequest {
        let config = &settings.config;

        let primary = RoleChoice::from(
            self.role
                .as_deref()
                .or(config.primary_role.as_deref())
                .unwrap_or(RANDOM_ROLE),
        );

        let mut locked_agents = config.locked_agents.clone();
        locked_agents.extend(self.locks.iter().cloned());

        // Locks on the command line imply lock mode unless a mode is given
        let mode = match self.agents {
            Some(mode) => mode,
            None if !self.locks.is_empty() => AgentMode::Lock,
            None => config.agent_mode,
        };

        GenerationRequest::new(self.players.clone(), primary)
            .with_agent_mode(mode)
            .with_locked_agents(locked_agents)
    }

    pub fn run(&self, settings: &Settings) -> anyhow::Result<()> {
        let request = self.request(settings);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let store: Box<dyn HistoryStore> = if self.no_history {
            Box::new(InMemoryHistoryStore::new())
        } else {
            Box::new(settings.open_history()?)
        };

        let mut generator = CompositionGenerator::from_config(&settings.config, store);
        let composition = generator.generate(&request, &mut rng)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&composition)?);
        } else {
            print!("{}", render_composition(&composition, generator.catalog()));
        }

        Ok(())
    }
}
