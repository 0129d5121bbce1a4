//! # Comp Randomizer Engine
//!
//! Ties the assigners and the history store together into a single
//! "generate" action.

mod generator;

pub use generator::{CompositionGenerator, GenerationRequest};

// Re-export dependencies
pub use assigner::{agent_icon, role_counts, AgentAssigner, RoleAssigner};
pub use history::{HistoryStore, InMemoryHistoryStore, JsonHistoryStore};
