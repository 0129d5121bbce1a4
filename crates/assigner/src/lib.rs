//! # Comp Randomizer Assigner
//!
//! The assignment algorithms. Everything here is synchronous and keeps no
//! state between calls; randomness comes from a caller-supplied `rand::Rng`.
//!
//! ## Components
//!
//! - `RoleAssigner` - History-aware role distribution
//! - `AgentAssigner` - Agent pick per role (`none` / `random` / `lock`)
//! - `pool` - Role pool construction from the primary role
//! - `utils` - Shuffle, role counts, icon lookup

pub mod agent_assigner;
pub mod pool;
pub mod role_assigner;
pub mod utils;

pub use agent_assigner::AgentAssigner;
pub use pool::{build_role_pool, resolve_primary};
pub use role_assigner::{recency_penalty, RoleAssigner};
pub use utils::{agent_icon, role_counts, shuffle, PLACEHOLDER_ICON_BASE};
