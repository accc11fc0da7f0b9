//! Conversation repository

use uuid::Uuid;

use super::SharedChatState;
use crate::domain::entities::Conversation;

/// In-memory conversation repository
#[derive(Clone)]
pub struct ConversationRepository {
    state: SharedChatState,
}

impl ConversationRepository {
    pub(crate) fn new(state: SharedChatState) -> Self {
        Self { state }
    }

    /// Find conversation by ID
    pub async fn find(&self, id: Uuid) -> Option<Conversation> {
        self.state.read().await.conversations.get(&id).cloned()
    }

    /// List all conversations, most recently active first
    pub async fn list(&self) -> Vec<Conversation> {
        let state = self.state.read().await;
        let mut conversations: Vec<Conversation> =
            state.conversations.values().cloned().collect();
        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        conversations
    }

    /// Store a new conversation
    pub async fn create(&self, conversation: Conversation) -> Conversation {
        tracing::debug!(id = %conversation.id, "Creating conversation");
        self.state
            .write()
            .await
            .conversations
            .insert(conversation.id, conversation.clone());
        conversation
    }

    /// Update the conversation title.
    ///
    /// The activity timestamp refreshes even when no field changed.
    /// Returns `None` when the id is unknown; nothing is mutated.
    pub async fn update(&self, id: Uuid, title: Option<String>) -> Option<Conversation> {
        let mut state = self.state.write().await;
        let conversation = state.conversations.get_mut(&id)?;

        if let Some(title) = title {
            conversation.title = title;
        }
        conversation.touch();

        Some(conversation.clone())
    }

    /// Refresh the activity timestamp only.
    ///
    /// Invoked by message creation so a thread with new messages sorts
    /// first in `list`.
    pub async fn touch(&self, id: Uuid) -> Option<Conversation> {
        let mut state = self.state.write().await;
        let conversation = state.conversations.get_mut(&id)?;
        conversation.touch();
        Some(conversation.clone())
    }

    /// Delete a conversation and every message it owns.
    ///
    /// The cascade happens under one write-lock acquisition; no reader
    /// can observe the conversation gone with its messages still present.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut state = self.state.write().await;

        if state.conversations.remove(&id).is_none() {
            tracing::warn!(%id, "Attempted to delete unknown conversation");
            return false;
        }

        state.messages.retain(|_, message| message.conversation_id != id);
        tracing::debug!(%id, "Deleted conversation and its messages");
        true
    }
}
