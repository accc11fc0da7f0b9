//! Repository implementations for the Conversations domain
//!
//! Conversations and messages live in one in-memory state behind a single
//! lock: message creation bumps the parent thread's activity timestamp and
//! conversation deletion cascades to messages, and each must be observed
//! as a single step.

pub mod conversations;
pub mod messages;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Conversation, Message};

pub use conversations::ConversationRepository;
pub use messages::MessageRepository;

/// Shared in-memory state for the Conversations domain
#[derive(Debug, Default)]
pub(crate) struct ChatState {
    pub(crate) conversations: HashMap<Uuid, Conversation>,
    pub(crate) messages: HashMap<Uuid, Message>,
}

pub(crate) type SharedChatState = Arc<RwLock<ChatState>>;

/// Combined repository access for the Conversations domain
#[derive(Clone)]
pub struct ConversationsRepositories {
    pub conversations: ConversationRepository,
    pub messages: MessageRepository,
}

impl ConversationsRepositories {
    pub fn new() -> Self {
        let state: SharedChatState = Arc::new(RwLock::new(ChatState::default()));
        Self {
            conversations: ConversationRepository::new(state.clone()),
            messages: MessageRepository::new(state),
        }
    }
}

impl Default for ConversationsRepositories {
    fn default() -> Self {
        Self::new()
    }
}
