//! Error types for the comp randomizer

use thiserror::Error;

/// Error returned when a caller breaks an input precondition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input: {reason}")]
pub struct InvalidInputError {
    pub reason: String,
}

impl InvalidInputError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Error returned when a role token is not known to the agent catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Role '{role}' not found. Available roles: {}", available_roles.join(", "))]
pub struct UnknownRoleError {
    pub role: String,
    pub available_roles: Vec<String>,
}

/// General randomizer error type
#[derive(Debug, Error)]
pub enum CompError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CompError>;
