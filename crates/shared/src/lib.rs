//! # Comp Randomizer Shared
//!
//! Common types used across the randomizer crates: roles, agents,
//! compositions, configuration and errors.

pub mod agent;
pub mod composition;
pub mod config;
pub mod error;
pub mod role;

// Re-exports
pub use agent::*;
pub use composition::*;
pub use config::*;
pub use error::*;
pub use role::*;
