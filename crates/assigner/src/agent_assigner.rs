//! AgentAssigner - Picks an agent for an assigned role

use rand::Rng;
use shared::{AgentCatalog, AgentMode, LockedAgents, Role, UnknownRoleError};
use std::collections::HashSet;
use tracing::{debug, warn};

/// AgentAssigner looks agents up in a read-only catalog
///
/// The set of agents already used in a generation pass is owned by the
/// caller and threaded through consecutive calls.
#[derive(Debug, Clone, Copy)]
pub struct AgentAssigner<'a> {
    catalog: &'a AgentCatalog,
}

impl<'a> AgentAssigner<'a> {
    pub fn new(catalog: &'a AgentCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a AgentCatalog {
        self.catalog
    }

    /// Pick an agent for `role`
    ///
    /// - `none`: always `None`.
    /// - `random`: an agent of the role not yet in `used_agents`, which is then
    ///   recorded. When the whole roster is used up, any agent of the role is
    ///   returned and `used_agents` is left alone.
    /// - `lock`: the agent pinned for the role, unless it is already used.
    ///   Never falls back to another agent.
    ///
    /// Roles missing from the catalog are rejected in `random` and `lock` mode.
    pub fn assign<R: Rng + ?Sized>(
        &self,
        role: &Role,
        mode: AgentMode,
        locked_agents: &LockedAgents,
        used_agents: &mut HashSet<String>,
        rng: &mut R,
    ) -> Result<Option<String>, UnknownRoleError> {
        match mode {
            AgentMode::None => Ok(None),
            AgentMode::Random => self.assign_random(role, used_agents, rng),
            AgentMode::Lock => self.assign_locked(role, locked_agents, used_agents),
        }
    }

    fn assign_random<R: Rng + ?Sized>(
        &self,
        role: &Role,
        used_agents: &mut HashSet<String>,
        rng: &mut R,
    ) -> Result<Option<String>, UnknownRoleError> {
        let roster = self.catalog.agents_for(role)?;

        let candidates: Vec<&str> = roster
            .iter()
            .map(|a| a.name.as_str())
            .filter(|name| !used_agents.contains(*name))
            .collect();

        if candidates.is_empty() {
            if roster.is_empty() {
                warn!(role = %role, "Role has no agents in the catalog");
                return Ok(None);
            }

            // Roster exhausted: allow a duplicate, untracked
            let pick = &roster[rng.random_range(0..roster.len())].name;
            debug!(role = %role, agent = %pick, "Roster exhausted, reusing agent");
            return Ok(Some(pick.clone()));
        }

        let pick = candidates[rng.random_range(0..candidates.len())].to_string();
        used_agents.insert(pick.clone());
        debug!(role = %role, agent = %pick, "Random agent picked");
        Ok(Some(pick))
    }

    fn assign_locked(
        &self,
        role: &Role,
        locked_agents: &LockedAgents,
        used_agents: &mut HashSet<String>,
    ) -> Result<Option<String>, UnknownRoleError> {
        self.catalog.agents_for(role)?;

        match locked_agents.get(role) {
            Some(agent) if !used_agents.contains(agent) => {
                used_agents.insert(agent.clone());
                debug!(role = %role, agent = %agent, "Locked agent applied");
                Ok(Some(agent.clone()))
            }
            Some(agent) => {
                debug!(role = %role, agent = %agent, "Locked agent already used this pass");
                Ok(None)
            }
            None => Ok(None),
        }
    }
}
