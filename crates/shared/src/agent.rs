//! Agent catalog and agent assignment modes

use crate::error::{InvalidInputError, UnknownRoleError};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// A playable agent as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    /// Display name, unique across the catalog
    pub name: String,

    /// Key into the icon table
    pub icon: String,
}

impl AgentRecord {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            icon: name.clone(),
            name,
        }
    }
}

/// How agents are attached to assigned roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    /// Roles only
    #[default]
    None,
    /// An unused agent of the role, picked at random
    Random,
    /// The agent pinned for the role, if any
    Lock,
}

impl AgentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentMode::None => "none",
            AgentMode::Random => "random",
            AgentMode::Lock => "lock",
        }
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentMode {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(AgentMode::None),
            "random" => Ok(AgentMode::Random),
            "lock" => Ok(AgentMode::Lock),
            other => Err(InvalidInputError::new(format!(
                "unknown agent mode '{}', expected none, random or lock",
                other
            ))),
        }
    }
}

/// Role -> pinned agent name, used in lock mode
pub type LockedAgents = HashMap<Role, String>;

/// Read-only lookup tables describing which agents belong to which role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCatalog {
    /// Agents per role, in catalog order
    pub agents_by_role: BTreeMap<Role, Vec<AgentRecord>>,

    /// Agent name -> icon URL
    #[serde(default)]
    pub icons: HashMap<String, String>,
}

const WIKI: &str = "https://static.wikia.nocookie.net/valorant/images";

const BUILTIN_AGENTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Duelist",
        &[
            ("Jett", "/3/35/Jett_icon.png"),
            ("Reyna", "/b/b0/Reyna_icon.png"),
            ("Phoenix", "/1/14/Phoenix_icon.png"),
            (
                "Raze",
                "https://media.valorant-api.com/agents/f94c3b30-42be-e959-889c-5aa313dba261/displayicon.png",
            ),
            ("Yoru", "/d/d4/Yoru_icon.png"),
            ("Neon", "/d/d0/Neon_icon.png"),
            ("Iso", "https://via.placeholder.com/50/FF4654/FFFFFF?text=I"),
            ("Waylay", "https://via.placeholder.com/50/FF4654/FFFFFF?text=W"),
        ],
    ),
    (
        "Controller",
        &[
            ("Brimstone", "/4/4d/Brimstone_icon.png"),
            ("Omen", "/b/b0/Omen_icon.png"),
            ("Viper", "/5/5f/Viper_icon.png"),
            ("Astra", "/0/08/Astra_icon.png"),
            ("Harbor", "/f/f3/Harbor_icon.png"),
            ("Clove", "https://via.placeholder.com/50/00D4AA/FFFFFF?text=C"),
        ],
    ),
    (
        "Initiator",
        &[
            ("Sova", "/4/49/Sova_icon.png"),
            ("Breach", "/5/53/Breach_icon.png"),
            ("Skye", "/3/33/Skye_icon.png"),
            ("KAY/O", "/f/f0/KAYO_icon.png"),
            ("Fade", "/a/a6/Fade_icon.png"),
            ("Gekko", "/6/66/Gekko_icon.png"),
        ],
    ),
    (
        "Sentinel",
        &[
            ("Sage", "/7/74/Sage_icon.png"),
            ("Cypher", "/8/88/Cypher_icon.png"),
            ("Killjoy", "/1/15/Killjoy_icon.png"),
            ("Chamber", "/0/09/Chamber_icon.png"),
            ("Deadlock", "/e/eb/Deadlock_icon.png"),
            ("Vyse", "https://via.placeholder.com/50/9C88FF/FFFFFF?text=V"),
        ],
    ),
];

impl AgentCatalog {
    /// The catalog shipped with the randomizer
    pub fn builtin() -> Self {
        let mut catalog = Self::default();

        for (role, agents) in BUILTIN_AGENTS {
            let records = catalog.agents_by_role.entry(Role::new(*role)).or_default();
            for (name, icon) in agents.iter() {
                records.push(AgentRecord::new(*name));
                let url = if icon.starts_with("http") {
                    icon.to_string()
                } else {
                    format!("{}{}", WIKI, icon)
                };
                catalog.icons.insert(name.to_string(), url);
            }
        }

        catalog
    }

    /// Roles that have a roster, in sorted order
    pub fn roles(&self) -> Vec<Role> {
        self.agents_by_role.keys().cloned().collect()
    }

    pub fn role_names(&self) -> Vec<String> {
        self.agents_by_role.keys().map(|r| r.to_string()).collect()
    }

    /// Agents of a role, or `UnknownRoleError` if the role has no roster
    pub fn agents_for(&self, role: &Role) -> Result<&[AgentRecord], UnknownRoleError> {
        self.agents_by_role
            .get(role)
            .map(|agents| agents.as_slice())
            .ok_or_else(|| UnknownRoleError {
                role: role.to_string(),
                available_roles: self.role_names(),
            })
    }

    /// The role an agent belongs to
    pub fn role_of(&self, agent: &str) -> Option<&Role> {
        self.agents_by_role
            .iter()
            .find(|(_, agents)| agents.iter().any(|a| a.name == agent))
            .map(|(role, _)| role)
    }

    /// Check that a pinned agent is on the role's roster
    pub fn validate_lock(&self, role: &Role, agent: &str) -> crate::Result<()> {
        let agents = self.agents_for(role)?;
        if agents.iter().any(|a| a.name == agent) {
            Ok(())
        } else {
            Err(InvalidInputError::new(format!(
                "agent '{}' cannot be locked for role '{}'",
                agent, role
            ))
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ============== AgentMode Tests ==============

    #[test]
    fn test_agent_mode_parse() {
        assert_eq!("none".parse::<AgentMode>().unwrap(), AgentMode::None);
        assert_eq!("Random".parse::<AgentMode>().unwrap(), AgentMode::Random);
        assert_eq!(" LOCK ".parse::<AgentMode>().unwrap(), AgentMode::Lock);
        assert!("pick".parse::<AgentMode>().is_err());
    }

    #[test]
    fn test_agent_mode_default_is_none() {
        assert_eq!(AgentMode::default(), AgentMode::None);
    }

    #[test]
    fn test_agent_mode_serde_lowercase() {
        let mode: AgentMode = serde_json::from_str(r#""lock""#).unwrap();
        assert_eq!(mode, AgentMode::Lock);
        assert_eq!(serde_json::to_string(&AgentMode::Random).unwrap(), r#""random""#);
    }

    // ============== Builtin Catalog Tests ==============

    #[test]
    fn test_builtin_has_standard_roles() {
        let catalog = AgentCatalog::builtin();

        for role in Role::standard() {
            assert!(catalog.agents_for(&role).is_ok(), "missing {}", role);
        }
        assert_eq!(catalog.roles().len(), 4);
    }

    #[test]
    fn test_builtin_has_enough_agents_per_role() {
        let catalog = AgentCatalog::builtin();

        for agents in catalog.agents_by_role.values() {
            assert!(agents.len() >= 4);
        }
    }

    #[test]
    fn test_builtin_agent_names_unique_across_roles() {
        let catalog = AgentCatalog::builtin();
        let names: Vec<&str> = catalog
            .agents_by_role
            .values()
            .flatten()
            .map(|a| a.name.as_str())
            .collect();
        let unique: HashSet<&str> = names.iter().copied().collect();

        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_builtin_icons_cover_all_agents() {
        let catalog = AgentCatalog::builtin();

        for agent in catalog.agents_by_role.values().flatten() {
            let url = catalog.icons.get(&agent.name).unwrap();
            assert!(url.starts_with("https://"), "{} -> {}", agent.name, url);
        }
        assert_eq!(
            catalog.icons.get("Jett").map(String::as_str),
            Some("https://static.wikia.nocookie.net/valorant/images/3/35/Jett_icon.png")
        );
    }

    // ============== Lookup Tests ==============

    #[test]
    fn test_agents_for_unknown_role() {
        let catalog = AgentCatalog::builtin();
        let err = catalog.agents_for(&Role::new("Healer")).unwrap_err();

        assert_eq!(err.role, "Healer");
        assert!(err.available_roles.contains(&"Duelist".to_string()));
    }

    #[test]
    fn test_role_of() {
        let catalog = AgentCatalog::builtin();

        assert_eq!(catalog.role_of("Sova"), Some(&Role::new("Initiator")));
        assert_eq!(catalog.role_of("Nobody"), None);
    }

    #[test]
    fn test_validate_lock() {
        let catalog = AgentCatalog::builtin();

        assert!(catalog.validate_lock(&Role::new("Duelist"), "Jett").is_ok());
        assert!(catalog.validate_lock(&Role::new("Duelist"), "Sage").is_err());
        assert!(catalog.validate_lock(&Role::new("Healer"), "Jett").is_err());
    }
}
