//! Domain entities for the Conversations domain
//!
//! Each entity validates its own invariants at construction time; the
//! repositories trust constructed entities and never fail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use parley_common::{Error, Result};

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Maximum title string length
const MAX_TITLE_LENGTH: usize = 200;

/// Conversation entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new conversation
    pub fn new(title: impl Into<String>) -> Result<Self> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(Error::Validation("Title is required".to_string()));
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(Error::Validation(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }

        let now = Utc::now();
        Ok(Conversation {
            id: Uuid::new_v4(),
            title,
            created_at: now,
            updated_at: now,
        })
    }

    /// Refresh the activity timestamp. Runs on every update, even one
    /// that changes no field, and whenever a message lands in this thread.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Message entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub role: MessageRole,
    pub content: String,
    /// Opaque payload attached by the caller (agent traces, search sources)
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message
    pub fn new(
        conversation_id: Uuid,
        role: MessageRole,
        content: String,
        metadata: Option<serde_json::Value>,
    ) -> Result<Self> {
        Self::validate_content(&content)?;

        Ok(Message {
            id: Uuid::new_v4(),
            conversation_id,
            role,
            content,
            metadata,
            created_at: Utc::now(),
        })
    }

    /// Create a new user message
    pub fn new_user(conversation_id: Uuid, content: String) -> Result<Self> {
        Self::new(conversation_id, MessageRole::User, content, None)
    }

    /// Create a new assistant message
    pub fn new_assistant(
        conversation_id: Uuid,
        content: String,
        metadata: Option<serde_json::Value>,
    ) -> Result<Self> {
        Self::new(conversation_id, MessageRole::Assistant, content, metadata)
    }

    fn validate_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(Error::Validation(
                "Message content cannot be empty or whitespace-only".to_string(),
            ));
        }
        Ok(())
    }
}
