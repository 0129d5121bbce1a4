//! RoleAssigner - History-aware distribution of a role pool over players
//!
//! Every player draws a random score for each distinct role in the pool.
//! Roles the player had recently lose points, so repeats become unlikely
//! without being forbidden. Players are then served greedily, most flexible
//! first, each taking their best role that is still in the pool.
//!
//! This is a heuristic, not an optimal matching.

use rand::Rng;
use shared::{InvalidInputError, RecencyWeights, Role, RoleHistory};
use tracing::debug;

/// How much a role is penalized given a player's history (oldest first)
///
/// Distance 0 means the role is the most recent entry, giving the full
/// `lookback` penalty. Roles never played, or last played `lookback` or more
/// entries ago, cost nothing.
pub fn recency_penalty(history: &[Role], role: &Role, lookback: usize) -> usize {
    match history.iter().rposition(|r| r == role) {
        Some(last) => {
            let distance = history.len() - 1 - last;
            lookback.saturating_sub(distance)
        }
        None => 0,
    }
}

/// A player's scores for each distinct pool role
#[derive(Debug, Clone)]
struct PlayerPreference {
    player_index: usize,
    /// Aligned with the distinct roles of the pool
    scores: Vec<f64>,
    flexibility: f64,
}

/// Distinct roles of the pool, in first-seen order
fn distinct_roles(pool: &[Role]) -> Vec<&Role> {
    let mut distinct: Vec<&Role> = Vec::new();
    for role in pool {
        if !distinct.contains(&role) {
            distinct.push(role);
        }
    }
    distinct
}

/// RoleAssigner - stateless; all cross-call state is owned by the caller
#[derive(Debug, Clone, Default)]
pub struct RoleAssigner {
    weights: RecencyWeights,
}

impl RoleAssigner {
    /// Create a RoleAssigner with the default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RoleAssigner with custom weights
    pub fn with_weights(weights: RecencyWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RecencyWeights {
        &self.weights
    }

    /// Preference score of one role for one player
    ///
    /// `base - penalty_scale * penalty`, with `base` uniform in `[0, base_range)`.
    pub fn score<R: Rng + ?Sized>(&self, history: &[Role], role: &Role, rng: &mut R) -> f64 {
        let base = rng.random::<f64>() * self.weights.base_range;
        let penalty = recency_penalty(history, role, self.weights.lookback);
        base - self.weights.penalty_scale * penalty as f64
    }

    /// Assign one role of `pool` to each player
    ///
    /// The result is aligned with `players` and holds exactly the roles of
    /// `pool`. History is looked up by trimmed player name; missing entries
    /// count as no history.
    pub fn assign<S, R>(
        &self,
        players: &[S],
        pool: &[Role],
        history: &RoleHistory,
        rng: &mut R,
    ) -> Result<Vec<Role>, InvalidInputError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if players.len() != pool.len() {
            return Err(InvalidInputError::new(format!(
                "{} players but the role pool holds {} roles",
                players.len(),
                pool.len()
            )));
        }

        let distinct = distinct_roles(pool);

        let mut preferences: Vec<PlayerPreference> = players
            .iter()
            .enumerate()
            .map(|(player_index, player)| {
                let name = player.as_ref().trim();
                let past = history.get(name).map(Vec::as_slice).unwrap_or(&[]);

                let scores: Vec<f64> = distinct
                    .iter()
                    .map(|role| self.score(past, role, rng))
                    .collect();
                let flexibility = scores.iter().map(|s| s.max(0.0)).sum();

                PlayerPreference {
                    player_index,
                    scores,
                    flexibility,
                }
            })
            .collect();

        // Most flexible first; stable, so equal flexibility keeps player order
        preferences.sort_by(|a, b| b.flexibility.total_cmp(&a.flexibility));

        let mut available: Vec<Option<&Role>> = pool.iter().map(Some).collect();
        let mut assignments: Vec<Option<Role>> = vec![None; players.len()];

        for preference in &preferences {
            // First slot reaching the maximum wins, which is also the first
            // remaining occurrence of that role
            let mut best: Option<(usize, f64)> = None;
            for (slot, role) in available.iter().enumerate() {
                let Some(role) = role else { continue };
                let score = distinct
                    .iter()
                    .position(|r| r == role)
                    .map(|i| preference.scores[i])
                    .unwrap_or(0.0);
                if best.map_or(true, |(_, best_score)| score > best_score) {
                    best = Some((slot, score));
                }
            }

            if let Some((slot, score)) = best {
                let role = available[slot].take().cloned();
                debug!(
                    player = players[preference.player_index].as_ref(),
                    role = ?role,
                    score,
                    flexibility = preference.flexibility,
                    "Role picked"
                );
                assignments[preference.player_index] = role;
            }
        }

        // Safety net: hand out leftovers in pool order
        let mut leftovers = available.into_iter().flatten();
        for assignment in assignments.iter_mut().filter(|a| a.is_none()) {
            *assignment = leftovers.next().cloned();
        }

        assignments
            .into_iter()
            .collect::<Option<Vec<Role>>>()
            .ok_or_else(|| InvalidInputError::new("role pool exhausted before every player had a role"))
    }
}
