//! The in-game chat transcript.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kv_core::PlayerId;

/// Unique identifier of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    /// Generate a new random message ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A message posted to the chat. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier.
    pub id: MessageId,
    /// Who wrote it.
    pub author: PlayerId,
    /// Author's display name at the time of writing.
    pub author_name: String,
    /// Message body.
    pub text: String,
    /// When it was posted.
    pub timestamp: DateTime<Utc>,
}

/// Append-only, ordered list of chat messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Post `text` as `author`. Blank text is dropped and returns `None`.
    pub fn post(
        &mut self,
        author: PlayerId,
        author_name: impl Into<String>,
        text: &str,
    ) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage {
            id: MessageId::new(),
            author,
            author_name: author_name.into(),
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        self.messages.last()
    }

    /// All messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing has been said yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render the last `limit` messages as `[HH:MM] Name: text` lines.
    pub fn render(&self, limit: usize) -> String {
        let start = self.messages.len().saturating_sub(limit);
        self.messages[start..]
            .iter()
            .map(|m| {
                format!(
                    "[{}] {}: {}",
                    m.timestamp.format("%H:%M"),
                    m.author_name,
                    m.text
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
