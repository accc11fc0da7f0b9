//! Domain entities for the Agents domain

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use parley_common::{Error, Result};

/// Agent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    Reasoning,
    Search,
    Creative,
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentType::Reasoning => write!(f, "reasoning"),
            AgentType::Search => write!(f, "search"),
            AgentType::Creative => write!(f, "creative"),
        }
    }
}

/// Maximum name string length
const MAX_NAME_LENGTH: usize = 100;

/// Agent entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub name: String,
    pub agent_type: AgentType,
    pub description: String,
    pub is_active: bool,
}

impl Agent {
    /// Create a new agent; `is_active` defaults to `true` when unspecified
    pub fn new(
        name: impl Into<String>,
        agent_type: AgentType,
        description: impl Into<String>,
        is_active: Option<bool>,
    ) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(Error::Validation("Name is required".to_string()));
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(Error::Validation(format!(
                "Name must be at most {} characters",
                MAX_NAME_LENGTH
            )));
        }

        Ok(Agent {
            id: Uuid::new_v4(),
            name,
            agent_type,
            description: description.into(),
            is_active: is_active.unwrap_or(true),
        })
    }
}

/// Partial update for an agent; `None` fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentUpdate {
    pub name: Option<String>,
    pub agent_type: Option<AgentType>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
