//! # Comp Randomizer History
//!
//! Role history storage. The assigners only ever read a snapshot; appending
//! new roles and clearing history happen here, driven by the caller.

pub mod file_store;
pub mod store;

pub use file_store::JsonHistoryStore;
pub use store::{HistoryStore, InMemoryHistoryStore};
