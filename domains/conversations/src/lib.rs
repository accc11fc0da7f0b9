//! Conversations domain: chat threads, messages

pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Conversation, Message, MessageRole};

// Re-export repository types
pub use repository::{ConversationRepository, ConversationsRepositories, MessageRepository};
