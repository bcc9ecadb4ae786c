//! Session state: conversation selection and locally composed messages.
//!
//! Layered over the immutable view model. Every transition consumes the
//! current state and returns the next snapshot, so the render surface only
//! has to repaint whatever snapshot it holds.
//!
//! # State Machine
//!
//! - `Uninitialized`: before fixtures are assembled
//! - `Loaded { active: None }`: no conversations exist
//! - `Loaded { active: Some(id) }`: a conversation is active
//!
//! `load` moves out of `Uninitialized`; `select_conversation` moves between
//! active conversations. `compose_message` and the read-side queries only
//! have effect once loaded.

use crate::model::{ChatId, Message, MessageId, Timestamp};
use crate::view_state::ConversationView;
use std::collections::HashSet;
use tracing::debug;

// ===== SessionPhase =====

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Fixtures not yet assembled.
    #[default]
    Uninitialized,
    /// View model available.
    Loaded {
        /// Active conversation, `None` when there are no conversations.
        active: Option<ChatId>,
    },
}

// ===== SessionState =====

/// Session-scoped state. Discarded when the process exits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    phase: SessionPhase,
    conversations: Vec<ConversationView>,
    composed: Vec<Message>,
    /// Next id of the counter; `None` once it has run past `u64::MAX`.
    next_id: Option<MessageId>,
}

impl SessionState {
    /// An uninitialized session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the assembled view model.
    ///
    /// The first conversation (the most recent one) becomes active. Loading
    /// again starts a fresh session and drops composed messages.
    #[must_use]
    pub fn load(self, conversations: Vec<ConversationView>) -> Self {
        let active = conversations.first().map(|view| view.id);
        let next_id = first_free_id(&conversations);

        debug!(
            conversations = conversations.len(),
            active = ?active,
            "Session loaded"
        );

        Self {
            phase: SessionPhase::Loaded { active },
            conversations,
            composed: Vec::new(),
            next_id,
        }
    }

    /// Make `id` the active conversation.
    ///
    /// Unknown ids and uninitialized sessions are left unchanged.
    #[must_use]
    pub fn select_conversation(mut self, id: ChatId) -> Self {
        if !self.is_loaded() {
            return self;
        }

        if self.conversation(id).is_none() {
            debug!(chat = %id, "Ignoring selection of unknown conversation");
            return self;
        }

        self.phase = SessionPhase::Loaded { active: Some(id) };
        self
    }

    /// Append a self-authored message to `chat_id`.
    ///
    /// Blank or whitespace-only text, unknown conversations and
    /// uninitialized sessions are left unchanged. The text is stored as
    /// typed.
    #[must_use]
    pub fn compose_message(mut self, text: &str, chat_id: ChatId, timestamp: Timestamp) -> Self {
        if text.trim().is_empty() || !self.is_loaded() || self.conversation(chat_id).is_none() {
            return self;
        }

        let Some(id) = self.allocate_id() else {
            debug!(chat = %chat_id, "No message id left, dropping composed message");
            return self;
        };
        self.composed
            .push(Message::composed(id, chat_id, text, timestamp));

        debug!(chat = %chat_id, message = %id, "Composed message");
        self
    }

    /// Messages of `chat_id` as shown in the conversation pane.
    ///
    /// Fixture messages in resolved order, then composed ones in
    /// composition order, stably sorted by timestamp. Unknown ids yield an
    /// empty list.
    pub fn visible_messages(&self, chat_id: ChatId) -> Vec<&Message> {
        let Some(view) = self.conversation(chat_id) else {
            return Vec::new();
        };

        let mut messages: Vec<&Message> = view
            .messages
            .iter()
            .chain(self.composed.iter().filter(|m| m.chat_id == chat_id))
            .collect();
        messages.sort_by_key(|message| message.date);
        messages
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the view model has been installed.
    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, SessionPhase::Loaded { .. })
    }

    /// The conversation list, most recent first.
    pub fn conversations(&self) -> &[ConversationView] {
        &self.conversations
    }

    /// Look up a conversation by id.
    pub fn conversation(&self, id: ChatId) -> Option<&ConversationView> {
        self.conversations.iter().find(|view| view.id == id)
    }

    /// Id of the active conversation.
    pub fn active_id(&self) -> Option<ChatId> {
        match self.phase {
            SessionPhase::Loaded { active } => active,
            SessionPhase::Uninitialized => None,
        }
    }

    /// The active conversation.
    pub fn active_conversation(&self) -> Option<&ConversationView> {
        self.active_id().and_then(|id| self.conversation(id))
    }

    /// All composed messages, in composition order.
    pub fn composed_messages(&self) -> &[Message] {
        &self.composed
    }
}

impl SessionState {
    /// Take an id no fixture or composed message uses.
    ///
    /// Counts up from the largest fixture id; once that passes `u64::MAX`
    /// the smallest unused id is taken instead.
    fn allocate_id(&mut self) -> Option<MessageId> {
        match self.next_id {
            Some(id) => {
                self.next_id = id.checked_next();
                Some(id)
            }
            None => self.smallest_free_id(),
        }
    }

    fn smallest_free_id(&self) -> Option<MessageId> {
        let taken: HashSet<MessageId> = self
            .conversations
            .iter()
            .flat_map(|view| view.messages.iter().chain(view.last_message.iter()))
            .chain(self.composed.iter())
            .map(|message| message.id)
            .collect();

        (1..=u64::MAX)
            .map(MessageId::new)
            .find(|id| !taken.contains(id))
    }
}

/// One past the largest message id in the view model.
fn first_free_id(conversations: &[ConversationView]) -> Option<MessageId> {
    conversations
        .iter()
        .flat_map(|view| view.messages.iter().chain(view.last_message.iter()))
        .map(|message| message.id)
        .max()
        .map_or(Some(MessageId::new(1)), MessageId::checked_next)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
