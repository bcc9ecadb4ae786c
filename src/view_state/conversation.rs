//! Denormalized conversation view model.

use crate::model::{ChatId, Message, Timestamp, User};
use serde::Serialize;

/// Display-ready conversation: a raw chat with its references resolved.
///
/// Exactly one exists per raw chat. `last_message`, when present, belongs
/// to this conversation, and `messages` is ordered by ascending timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationView {
    /// Identity of the underlying chat.
    pub id: ChatId,
    /// The resolved counterpart.
    pub user: User,
    /// The resolved most recent message, if the chat has one.
    pub last_message: Option<Message>,
    /// All resolved messages, oldest first.
    pub messages: Vec<Message>,
}

impl ConversationView {
    /// Timestamp used to order conversations by recency.
    pub fn last_activity(&self) -> Option<Timestamp> {
        self.last_message.as_ref().map(|message| message.date)
    }

    /// Whether the latest message came from the counterpart.
    ///
    /// The contact list renders these names in bold.
    pub fn awaiting_reply(&self) -> bool {
        self.last_message
            .as_ref()
            .is_some_and(|message| !message.written_by_me)
    }

    /// Case-insensitive match of the counterpart's name against a
    /// lowercased needle.
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        self.user.name.to_lowercase().contains(needle_lower)
    }
}
