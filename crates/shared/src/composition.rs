//! Composition types - the result of one generate action

use crate::agent::AgentMode;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// One player's slot in a composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub player: String,
    pub role: Role,
    /// Assigned agent, absent in `none` mode or for an unresolved lock
    pub agent: Option<String>,
}

impl Assignment {
    pub fn new(player: impl Into<String>, role: Role) -> Self {
        Self {
            player: player.into(),
            role,
            agent: None,
        }
    }

    /// Builder: set agent
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = Some(agent.into());
        self
    }
}

/// A full team composition, positionally aligned with the input players
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub assignments: Vec<Assignment>,

    /// The role that appears twice in the pool, after resolving `Random`
    pub primary_role: Role,

    pub agent_mode: AgentMode,
}

impl Composition {
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Roles in player order
    pub fn roles(&self) -> Vec<&Role> {
        self.assignments.iter().map(|a| &a.role).collect()
    }
}
