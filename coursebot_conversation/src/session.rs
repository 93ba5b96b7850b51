//! Session state for a single ongoing conversation.
//!
//! A session holds everything the manager threads through repeated turns:
//! the bounded message history shown to the user, the server-side
//! continuation token, and the cached knowledge-base identifier.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use coursebot_core::{ChatMessage, Role};

/// Default cap on locally retained messages.
pub const DEFAULT_MAX_MESSAGES: usize = 100;

/// Complete state of one conversation.
///
/// Created empty at session start, mutated only through
/// [`append`](Self::append) and [`reset`](Self::reset), and dropped when the
/// session ends. Nothing here is persisted across sessions.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Session identifier
    pub id: Uuid,
    /// Continuation token from the most recent successful backend call.
    /// `None` until the first successful turn.
    pub last_response_id: Option<String>,
    /// Knowledge-base identifier searched by the retrieval tool. `None`
    /// means "not resolved yet" and is retried on next use; the value
    /// survives a reset because it is an environment property, not a
    /// conversation property.
    pub vector_store_id: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
    max_messages: usize,
}

impl SessionState {
    /// Create a new empty session with the default history bound.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            last_response_id: None,
            vector_store_id: None,
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }

    /// Set the history bound.
    #[must_use]
    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages.max(1);
        self
    }

    /// Seed the knowledge-base identifier up front.
    #[must_use]
    pub fn with_vector_store(mut self, id: String) -> Self {
        self.vector_store_id = Some(id);
        self
    }

    /// Append a message, evicting from the front when over the bound.
    ///
    /// Eviction is purely position-based, oldest first, so recency is
    /// preserved. Always succeeds.
    pub fn append(&mut self, role: Role, content: String) {
        self.messages.push(ChatMessage { role, content });
        if self.messages.len() > self.max_messages {
            let excess = self.messages.len() - self.max_messages;
            self.messages.drain(..excess);
        }
        self.updated_at = Utc::now();
    }

    /// Clear the message history and continuation token together.
    ///
    /// The knowledge-base identifier is left untouched.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.last_response_id = None;
        self.updated_at = Utc::now();
    }

    /// All retained messages in chronological order.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub const fn max_messages(&self) -> usize {
        self.max_messages
    }

    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
