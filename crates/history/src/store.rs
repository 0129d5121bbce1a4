//! HistoryStore - Role history kept between generations

use shared::{Assignment, Result, Role, RoleHistory};
use std::collections::{HashMap, VecDeque};

/// Storage for per-player role history
///
/// The assigners only read a snapshot; the store is updated by the caller
/// once a composition has been generated.
pub trait HistoryStore {
    /// All players' history, oldest entry first
    fn snapshot(&self) -> Result<RoleHistory>;

    /// One player's history, empty if unknown
    fn player_history(&self, player: &str) -> Result<Vec<Role>>;

    /// Append each player's newly assigned role
    fn record(&mut self, assignments: &[Assignment]) -> Result<()>;

    /// Forget everything
    fn clear(&mut self) -> Result<()>;

    /// Number of players with history
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: HistoryStore + ?Sized> HistoryStore for Box<H> {
    fn snapshot(&self) -> Result<RoleHistory> {
        (**self).snapshot()
    }

    fn player_history(&self, player: &str) -> Result<Vec<Role>> {
        (**self).player_history(player)
    }

    fn record(&mut self, assignments: &[Assignment]) -> Result<()> {
        (**self).record(assignments)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory history, optionally bounded per player
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    entries: HashMap<String, VecDeque<Role>>,
    /// Oldest entries are dropped past this length
    max_entries: Option<usize>,
}

impl InMemoryHistoryStore {
    /// Create an unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store keeping at most `max_entries` roles per player
    pub fn with_limit(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: Some(max_entries),
        }
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    /// Seed the store from an existing history
    pub fn from_history(history: RoleHistory, max_entries: Option<usize>) -> Self {
        let mut store = Self {
            entries: HashMap::new(),
            max_entries,
        };
        for (player, roles) in history {
            for role in roles {
                store.push(&player, role);
            }
        }
        store
    }

    fn push(&mut self, player: &str, role: Role) {
        let entries = self.entries.entry(player.trim().to_string()).or_default();
        entries.push_back(role);
        if let Some(max) = self.max_entries {
            while entries.len() > max {
                entries.pop_front();
            }
        }
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn snapshot(&self) -> Result<RoleHistory> {
        Ok(self
            .entries
            .iter()
            .map(|(player, roles)| (player.clone(), roles.iter().cloned().collect()))
            .collect())
    }

    fn player_history(&self, player: &str) -> Result<Vec<Role>> {
        Ok(self
            .entries
            .get(player.trim())
            .map(|roles| roles.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn record(&mut self, assignments: &[Assignment]) -> Result<()> {
        for assignment in assignments {
            self.push(&assignment.player, assignment.role.clone());
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
