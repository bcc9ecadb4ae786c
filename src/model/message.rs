//! Message records.
//!
//! A message either came from the fixtures (immutable) or was composed
//! locally during the session (appended, never removed).

use crate::model::{ChatId, MessageId, Timestamp};
use serde::{Deserialize, Serialize};

// ===== MessageOrigin =====

/// Where a message came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageOrigin {
    /// Loaded or generated before the session started.
    #[default]
    Fixture,
    /// Typed into the composer during this session.
    Composed,
}

// ===== Message =====

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Identity, unique within the session.
    pub id: MessageId,
    /// Owning conversation.
    pub chat_id: ChatId,
    /// Text content.
    pub content: String,
    /// When the message was sent.
    pub date: Timestamp,
    /// `true` for the local user, `false` for the counterpart.
    pub written_by_me: bool,
    /// Fixture or composed.
    #[serde(default)]
    pub origin: MessageOrigin,
}

impl Message {
    /// Create a fixture message.
    pub fn new(
        id: MessageId,
        chat_id: ChatId,
        content: impl Into<String>,
        date: Timestamp,
        written_by_me: bool,
    ) -> Self {
        Self {
            id,
            chat_id,
            content: content.into(),
            date,
            written_by_me,
            origin: MessageOrigin::Fixture,
        }
    }

    /// Create a self-authored message composed during the session.
    pub fn composed(
        id: MessageId,
        chat_id: ChatId,
        content: impl Into<String>,
        date: Timestamp,
    ) -> Self {
        Self {
            id,
            chat_id,
            content: content.into(),
            date,
            written_by_me: true,
            origin: MessageOrigin::Composed,
        }
    }

    /// Whether this message was composed locally.
    pub fn is_composed(&self) -> bool {
        self.origin == MessageOrigin::Composed
    }

    /// Case-insensitive substring test against an already-lowercased needle.
    pub fn contains_lowercase(&self, needle_lower: &str) -> bool {
        self.content.to_lowercase().contains(needle_lower)
    }
}

// ===== Tests =====
