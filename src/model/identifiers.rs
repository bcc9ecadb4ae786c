//! Core identifier newtypes.
//!
//! Fixture records reference each other by numeric id. Wrapping each id in
//! its own type keeps a `UserId` from ever being looked up as a `ChatId`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a [`User`](crate::model::User).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw user id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a raw chat and of the [`ConversationView`](crate::view_state::ConversationView)
/// derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(u64);

impl ChatId {
    /// Wrap a raw chat id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a [`Message`](crate::model::Message).
///
/// Unique across fixture and composed messages within one session.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    /// Wrap a raw message id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id immediately after this one, or `None` at `u64::MAX`.
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_get_returns_raw_value() {
        assert_eq!(UserId::new(7).get(), 7);
    }

    #[test]
    fn chat_id_display_returns_number() {
        assert_eq!(ChatId::new(10).to_string(), "10");
    }

    #[test]
    fn message_id_next_increments() {
        assert_eq!(MessageId::new(100).checked_next(), Some(MessageId::new(101)));
    }

    #[test]
    fn message_id_next_stops_at_max() {
        assert_eq!(MessageId::new(u64::MAX).checked_next(), None);
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&MessageId::new(42)).expect("serialize");
        assert_eq!(json, "42");

        let id: ChatId = serde_json::from_str("10").expect("deserialize");
        assert_eq!(id, ChatId::new(10));
    }

    #[test]
    fn message_ids_order_numerically() {
        assert!(MessageId::new(9) < MessageId::new(10));
    }
}
