//! Repository implementation for the Agents domain

pub mod agents;

pub use agents::AgentRepository;
