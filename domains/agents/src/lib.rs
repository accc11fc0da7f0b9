//! Agents domain: the named agent roster behind multi-agent chat

pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Agent, AgentType, AgentUpdate};

// Re-export repository types
pub use repository::AgentRepository;
