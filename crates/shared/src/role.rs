//! Role tokens, role pools and role history

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The four roles of the standard catalog, in display order
pub const STANDARD_ROLES: [&str; 4] = ["Duelist", "Controller", "Initiator", "Sentinel"];

/// Keyword that asks for the primary role to be picked at random
pub const RANDOM_ROLE: &str = "Random";

/// A role token (e.g. 'Duelist')
///
/// The assignment algorithms treat roles as opaque: two roles are equal when
/// their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The standard roles as owned tokens
    pub fn standard() -> Vec<Role> {
        STANDARD_ROLES.iter().map(|r| Role::new(*r)).collect()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Role(name)
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Role {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Ordered multiset of roles to hand out, one per player
pub type RolePool = Vec<Role>;

/// Past assignments per player name, oldest first
pub type RoleHistory = HashMap<String, Vec<Role>>;

/// The primary role chosen for a composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoleChoice {
    /// A specific role is doubled
    Fixed(Role),
    /// One of the available roles is picked uniformly and doubled
    Random,
}

impl From<&str> for RoleChoice {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case(RANDOM_ROLE) {
            RoleChoice::Random
        } else {
            RoleChoice::Fixed(Role::new(s))
        }
    }
}

impl FromStr for RoleChoice {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RoleChoice::from(s))
    }
}

impl fmt::Display for RoleChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleChoice::Fixed(role) => write!(f, "{}", role),
            RoleChoice::Random => f.write_str(RANDOM_ROLE),
        }
    }
}
