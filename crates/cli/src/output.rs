//! Terminal rendering of compositions, history and the catalog

use assigner::{agent_icon, role_counts};
use console::{style, StyledObject};
use shared::{AgentCatalog, Composition, Role, RoleHistory};
use std::fmt::Write;

fn styled_role(role: &Role) -> StyledObject<&str> {
    let s = style(role.as_str()).bold();
    match role.as_str() {
        "Duelist" => s.red(),
        "Controller" => s.cyan(),
        "Initiator" => s.yellow(),
        "Sentinel" => s.magenta(),
        _ => s,
    }
}

/// Player lines followed by the role distribution
pub fn render_composition(composition: &Composition, catalog: &AgentCatalog) -> String {
    let mut out = String::new();
    let width = composition
        .assignments
        .iter()
        .map(|a| a.player.chars().count())
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "{} (primary: {}, agents: {})",
        style("Team composition").bold(),
        styled_role(&composition.primary_role),
        composition.agent_mode
    );

    for assignment in &composition.assignments {
        let _ = write!(
            out,
            "  {:width$}  {}",
            assignment.player,
            styled_role(&assignment.role),
            width = width
        );
        if let Some(agent) = &assignment.agent {
            let _ = write!(
                out,
                " - {} {}",
                style(agent).bold(),
                style(agent_icon(agent, &catalog.icons)).dim()
            );
        }
        out.push('\n');
    }

    let counts: Vec<String> = role_counts(&composition.assignments)
        .iter()
        .map(|(role, count)| format!("{} x{}", role, count))
        .collect();
    let _ = writeln!(out, "{} {}", style("Roles:").bold(), counts.join(", "));

    out
}

/// One line per player, oldest role first
pub fn render_history(history: &RoleHistory) -> String {
    if history.is_empty() {
        return "No role history yet.\n".to_string();
    }

    let mut players: Vec<&String> = history.keys().collect();
    players.sort();

    let mut out = String::new();
    for player in players {
        let roles: Vec<String> = history[player].iter().map(|r| r.to_string()).collect();
        let _ = writeln!(out, "  {}: {}", style(player).bold(), roles.join(" -> "));
    }
    out
}

/// Agents per role, optionally for a single role
pub fn render_catalog(catalog: &AgentCatalog, only: Option<&Role>) -> String {
    let mut out = String::new();
    for (role, agents) in &catalog.agents_by_role {
        if only.is_some_and(|r| r != role) {
            continue;
        }
        let _ = writeln!(out, "{} ({})", styled_role(role), agents.len());
        for agent in agents {
            let _ = writeln!(out, "  {:10} {}", agent.name, agent_icon(&agent.name, &catalog.icons));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AgentMode, Assignment};

    fn composition() -> Composition {
        Composition {
            assignments: vec![
                Assignment::new("Alice", Role::new("Duelist")).with_agent("Jett"),
                Assignment::new("Bob", Role::new("Duelist")),
                Assignment::new("Carol", Role::new("Sentinel")).with_agent("Nobody"),
            ],
            primary_role: Role::new("Duelist"),
            agent_mode: AgentMode::Lock,
        }
    }

    #[test]
    fn test_render_composition() {
        let text = render_composition(&composition(), &AgentCatalog::builtin());

        assert!(text.contains("Alice"));
        assert!(text.contains("Jett"));
        assert!(text.contains("Jett_icon.png"));
        assert!(text.contains("text=N"));
        assert!(text.contains("Duelist x2"));
        assert!(text.contains("Sentinel x1"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_render_history() {
        assert_eq!(render_history(&RoleHistory::new()), "No role history yet.\n");

        let mut history = RoleHistory::new();
        history.insert("Bob".to_string(), vec![Role::new("Sentinel")]);
        history.insert(
            "Alice".to_string(),
            vec![Role::new("Duelist"), Role::new("Controller")],
        );

        let text = render_history(&history);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Alice"));
        assert!(lines[0].contains("Duelist -> Controller"));
    }

    #[test]
    fn test_render_catalog_filter() {
        let catalog = AgentCatalog::builtin();

        let all = render_catalog(&catalog, None);
        assert!(all.contains("Sova"));
        assert!(all.contains("Jett"));

        let duelists = render_catalog(&catalog, Some(&Role::new("Duelist")));
        assert!(duelists.contains("Jett"));
        assert!(!duelists.contains("Sova"));
    }
}
