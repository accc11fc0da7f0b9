//! Agent repository
//!
//! An in-memory registry seeded with the three default agents. Insertion
//! order is preserved; agents are never deleted, only deactivated.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Agent, AgentType, AgentUpdate};

/// Fixed roster seeded into every new registry, one agent per type
const DEFAULT_AGENTS: [(&str, AgentType, &str); 3] = [
    (
        "Reasoning Agent",
        AgentType::Reasoning,
        "Breaks problems down and works through them step by step.",
    ),
    (
        "Search Agent",
        AgentType::Search,
        "Looks up current information on the web and cites its sources.",
    ),
    (
        "Creative Agent",
        AgentType::Creative,
        "Drafts stories, names, and other open-ended content.",
    ),
];

/// In-memory agent registry
#[derive(Clone)]
pub struct AgentRepository {
    state: Arc<RwLock<Vec<Agent>>>,
}

impl AgentRepository {
    /// Create a registry seeded with one active agent per type
    pub fn new() -> Self {
        let agents: Vec<Agent> = DEFAULT_AGENTS
            .iter()
            .map(|&(name, agent_type, description)| Agent {
                id: Uuid::new_v4(),
                name: name.to_string(),
                agent_type,
                description: description.to_string(),
                is_active: true,
            })
            .collect();

        tracing::info!(count = agents.len(), "Seeded default agent roster");
        Self {
            state: Arc::new(RwLock::new(agents)),
        }
    }

    /// List all agents in insertion order
    pub async fn list(&self) -> Vec<Agent> {
        self.state.read().await.clone()
    }

    /// List agents currently available for routing
    pub async fn list_active(&self) -> Vec<Agent> {
        self.state
            .read()
            .await
            .iter()
            .filter(|agent| agent.is_active)
            .cloned()
            .collect()
    }

    /// Find agent by ID
    pub async fn find(&self, id: Uuid) -> Option<Agent> {
        self.state
            .read()
            .await
            .iter()
            .find(|agent| agent.id == id)
            .cloned()
    }

    /// Store a new agent
    pub async fn create(&self, agent: Agent) -> Agent {
        tracing::debug!(id = %agent.id, agent_type = %agent.agent_type, "Creating agent");
        self.state.write().await.push(agent.clone());
        agent
    }

    /// Apply a shallow merge of the given fields.
    ///
    /// Returns `None` when the id is unknown; nothing is mutated.
    pub async fn update(&self, id: Uuid, update: AgentUpdate) -> Option<Agent> {
        let mut state = self.state.write().await;
        let agent = state.iter_mut().find(|agent| agent.id == id)?;

        if let Some(name) = update.name {
            agent.name = name;
        }
        if let Some(agent_type) = update.agent_type {
            agent.agent_type = agent_type;
        }
        if let Some(description) = update.description {
            agent.description = description;
        }
        if let Some(is_active) = update.is_active {
            agent.is_active = is_active;
        }

        Some(agent.clone())
    }
}

impl Default for AgentRepository {
    fn default() -> Self {
        Self::new()
    }
}
