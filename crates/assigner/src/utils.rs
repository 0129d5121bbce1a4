//! Small helpers shared by the generator and the presentation layer

use rand::Rng;
use shared::{Assignment, Role};
use std::collections::{BTreeMap, HashMap};

/// Icon URL used when an agent has no entry in the icon table
pub const PLACEHOLDER_ICON_BASE: &str = "https://via.placeholder.com/50/FF4654/FFFFFF?text=";

/// Fisher-Yates shuffle into a new vector; the input is left untouched
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Number of players per role in a composition
pub fn role_counts(assignments: &[Assignment]) -> BTreeMap<Role, usize> {
    let mut counts = BTreeMap::new();
    for assignment in assignments {
        *counts.entry(assignment.role.clone()).or_insert(0) += 1;
    }
    counts
}

/// Icon URL for an agent, or a placeholder showing its first letter
pub fn agent_icon(agent: &str, icons: &HashMap<String, String>) -> String {
    match icons.get(agent) {
        Some(url) => url.clone(),
        None => {
            let initial: String = agent.chars().take(1).collect();
            format!("{}{}", PLACEHOLDER_ICON_BASE, initial)
        }
    }
}
