//! Message repository

use uuid::Uuid;

use super::SharedChatState;
use crate::domain::entities::Message;

/// In-memory message repository
#[derive(Clone)]
pub struct MessageRepository {
    state: SharedChatState,
}

impl MessageRepository {
    pub(crate) fn new(state: SharedChatState) -> Self {
        Self { state }
    }

    /// List messages for a conversation, oldest first
    pub async fn list_by_conversation(&self, conversation_id: Uuid) -> Vec<Message> {
        let state = self.state.read().await;
        let mut messages: Vec<Message> = state
            .messages
            .values()
            .filter(|message| message.conversation_id == conversation_id)
            .cloned()
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        messages
    }

    /// Find message by ID
    pub async fn find(&self, id: Uuid) -> Option<Message> {
        self.state.read().await.messages.get(&id).cloned()
    }

    /// Store a new message and refresh the parent thread's activity
    /// timestamp in the same step.
    ///
    /// A parent that no longer exists is tolerated: the touch is skipped
    /// and the message is still stored.
    pub async fn create(&self, message: Message) -> Message {
        let mut state = self.state.write().await;

        if let Some(conversation) = state.conversations.get_mut(&message.conversation_id) {
            conversation.touch();
        }

        tracing::debug!(
            id = %message.id,
            conversation_id = %message.conversation_id,
            "Creating message"
        );
        state.messages.insert(message.id, message.clone());
        message
    }

    /// Delete a message; returns whether it existed
    pub async fn delete(&self, id: Uuid) -> bool {
        self.state.write().await.messages.remove(&id).is_some()
    }
}
