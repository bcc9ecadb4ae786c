//! Raw chat records as supplied by fixtures.

use crate::model::{ChatId, MessageId, UserId};
use serde::{Deserialize, Serialize};

/// A conversation before any references are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Identity of the conversation.
    pub id: ChatId,
    /// The counterpart user.
    pub with_user: UserId,
    /// Most recent message, if the chat has any.
    #[serde(default)]
    pub last_message: Option<MessageId>,
    /// Messages belonging to this chat, in fixture order.
    #[serde(default)]
    pub messages: Vec<MessageId>,
}

impl Chat {
    /// Create a chat record.
    pub fn new(
        id: ChatId,
        with_user: UserId,
        last_message: Option<MessageId>,
        messages: Vec<MessageId>,
    ) -> Self {
        Self {
            id,
            with_user,
            last_message,
            messages,
        }
    }
}
