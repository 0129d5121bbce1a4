//! CompositionGenerator - One "generate" action, start to finish
//!
//! 1. Build the role pool from the primary role choice
//! 2. Shuffle the pool (optional)
//! 3. Assign roles against the current history snapshot
//! 4. Assign agents per player, sharing one used-agents set for the pass
//! 5. Append the new roles to history
//!
//! Everything is synchronous. The generator owns its history store, so one
//! generator must not be driven from several threads at once.

use assigner::{build_role_pool, shuffle, AgentAssigner, RoleAssigner};
use history::HistoryStore;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::{
    AgentCatalog, AgentMode, Assignment, Composition, InvalidInputError, LockedAgents,
    RandomizerConfig, RecencyWeights, Result, RoleChoice,
};
use std::collections::HashSet;
use tracing::{debug, info};

/// Input of one generate action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Player names, in display order
    pub players: Vec<String>,

    /// Role that appears twice
    pub primary: RoleChoice,

    #[serde(default)]
    pub agent_mode: AgentMode,

    #[serde(default)]
    pub locked_agents: LockedAgents,
}

impl GenerationRequest {
    pub fn new(players: Vec<String>, primary: RoleChoice) -> Self {
        Self {
            players,
            primary,
            agent_mode: AgentMode::None,
            locked_agents: LockedAgents::new(),
        }
    }

    /// Builder: set agent mode
    pub fn with_agent_mode(mut self, mode: AgentMode) -> Self {
        self.agent_mode = mode;
        self
    }

    /// Builder: set locked agents
    pub fn with_locked_agents(mut self, locked_agents: LockedAgents) -> Self {
        self.locked_agents = locked_agents;
        self
    }

    /// Trimmed player names; rejects an empty list and blank names
    fn validated_players(&self) -> Result<Vec<String>> {
        if self.players.is_empty() {
            return Err(InvalidInputError::new("no players given").into());
        }

        let players: Vec<String> = self.players.iter().map(|p| p.trim().to_string()).collect();
        if let Some(index) = players.iter().position(|p| p.is_empty()) {
            return Err(InvalidInputError::new(format!("player {} has no name", index + 1)).into());
        }

        Ok(players)
    }
}

/// Generates compositions and keeps role history up to date
#[derive(Debug)]
pub struct CompositionGenerator<H: HistoryStore> {
    catalog: AgentCatalog,
    role_assigner: RoleAssigner,
    shuffle_pool: bool,
    history: H,
}

impl<H: HistoryStore> CompositionGenerator<H> {
    /// Create a generator with default weights and pool shuffling on
    pub fn new(catalog: AgentCatalog, history: H) -> Self {
        Self {
            catalog,
            role_assigner: RoleAssigner::new(),
            shuffle_pool: true,
            history,
        }
    }

    /// Create a generator from a loaded configuration
    pub fn from_config(config: &RandomizerConfig, history: H) -> Self {
        Self::new(config.catalog(), history)
            .with_weights(config.weights)
            .with_shuffle_pool(config.shuffle_pool)
    }

    /// Builder: set recency weights
    pub fn with_weights(mut self, weights: RecencyWeights) -> Self {
        self.role_assigner = RoleAssigner::with_weights(weights);
        self
    }

    /// Builder: enable or disable pool shuffling
    pub fn with_shuffle_pool(mut self, shuffle_pool: bool) -> Self {
        self.shuffle_pool = shuffle_pool;
        self
    }

    pub fn catalog(&self) -> &AgentCatalog {
        &self.catalog
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Run one generate action
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<Composition> {
        let players = request.validated_players()?;

        if request.agent_mode == AgentMode::Lock {
            for (role, agent) in &request.locked_agents {
                self.catalog.validate_lock(role, agent)?;
            }
        }

        let (primary_role, pool) = build_role_pool(&request.primary, &self.catalog.roles(), rng)?;
        let pool = if self.shuffle_pool {
            shuffle(&pool, rng)
        } else {
            pool
        };
        debug!(primary = %primary_role, pool = ?pool, "Role pool built");

        let snapshot = self.history.snapshot()?;
        let roles = self.role_assigner.assign(&players, &pool, &snapshot, rng)?;

        let agent_assigner = AgentAssigner::new(&self.catalog);
        let mut used_agents: HashSet<String> = HashSet::new();
        let mut assignments = Vec::with_capacity(players.len());

        for (player, role) in players.into_iter().zip(roles) {
            let agent = agent_assigner.assign(
                &role,
                request.agent_mode,
                &request.locked_agents,
                &mut used_agents,
                rng,
            )?;
            assignments.push(Assignment {
                player,
                role,
                agent,
            });
        }

        self.history.record(&assignments)?;

        info!(
            players = assignments.len(),
            primary = %primary_role,
            mode = %request.agent_mode,
            agents = used_agents.len(),
            "Composition generated"
        );

        Ok(Composition {
            assignments,
            primary_role,
            agent_mode: request.agent_mode,
        })
    }

    /// Forget all role history
    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()?;
        info!("Role history cleared");
        Ok(())
    }
}
