//! Application state and transitions.
//!
//! AppState is the root state type for the terminal UI. It owns the
//! [`SessionState`] and layers the purely presentational state on top:
//! focus, text inputs, the contact cursor, the search highlight, and the
//! conversation scroll position.

use crate::model::{ChatId, Timestamp};
use crate::state::contacts::filter_conversations;
use crate::state::search::{find_message, SearchHit};
use crate::state::{SessionState, TextInput};
use crate::view_state::{ChatScroll, ConversationView};
use tracing::debug;

// ===== Focus =====

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Navigating the contact list; key bindings apply.
    #[default]
    ContactList,
    /// Typing into "Search a person".
    ContactFilter,
    /// Typing a message.
    Composer,
    /// Typing into "Search a message".
    MessageSearch,
}

impl Focus {
    /// Whether printable keys go to a text input.
    pub fn is_typing(self) -> bool {
        !matches!(self, Focus::ContactList)
    }
}

/// Which pane is in front when the terminal is too narrow for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrowView {
    /// Contact list in front.
    Contacts,
    /// Conversation in front.
    #[default]
    Chat,
}

/// Outcome of the last message search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No search since the conversation was opened.
    #[default]
    Idle,
    /// The highlighted message.
    Found(SearchHit),
    /// Nothing matched the query.
    NotFound(String),
}

// ===== AppState =====

/// UI state. Pure data, no side effects.
///
/// # State Transitions
///
/// - Selecting a conversation clears the search highlight, scrolls to the
///   newest message and brings the chat pane to the front.
/// - Composing appends to the session and scrolls to the newest message.
/// - Searching highlights the hit and scrolls it into view.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    session: SessionState,

    /// Which control has keyboard focus.
    pub focus: Focus,

    /// Index into the filtered contact list.
    pub contact_cursor: usize,

    /// "Search a person" box.
    pub contact_filter: TextInput,

    /// Composer bar.
    pub composer: TextInput,

    /// "Search a message" box.
    pub message_search: TextInput,

    /// Result of the last message search.
    pub search_status: SearchStatus,

    /// Requested conversation scroll.
    pub chat_scroll: ChatScroll,

    /// Front pane on narrow terminals.
    pub narrow_view: NarrowView,
}

impl AppState {
    /// Wrap a loaded session. The cursor starts on the active conversation.
    pub fn new(session: SessionState) -> Self {
        let mut state = Self {
            session,
            ..Self::default()
        };
        state.contact_cursor = state.cursor_of_active().unwrap_or(0);
        state
    }

    /// The session snapshot.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Contacts matching the current filter, most recent first.
    pub fn filtered_conversations(&self) -> Vec<&ConversationView> {
        filter_conversations(self.session.conversations(), self.contact_filter.value())
    }

    /// The highlighted search hit, if any.
    pub fn search_hit(&self) -> Option<SearchHit> {
        match self.search_status {
            SearchStatus::Found(hit) => Some(hit),
            _ => None,
        }
    }

    // ===== Selection =====

    /// Make `id` the active conversation.
    ///
    /// Unknown ids leave everything unchanged.
    pub fn select_conversation(&mut self, id: ChatId) {
        if self.session.conversation(id).is_none() {
            return;
        }

        self.session = std::mem::take(&mut self.session).select_conversation(id);
        self.search_status = SearchStatus::Idle;
        self.chat_scroll = ChatScroll::Bottom;
        self.narrow_view = NarrowView::Chat;
        debug!(chat = %id, "Conversation selected");
    }

    /// Open the conversation under the contact cursor.
    pub fn open_under_cursor(&mut self) {
        let id = self
            .filtered_conversations()
            .get(self.contact_cursor)
            .map(|view| view.id);

        if let Some(id) = id {
            self.select_conversation(id);
        }
    }

    /// Move the contact cursor up.
    pub fn cursor_up(&mut self) {
        self.contact_cursor = self.contact_cursor.saturating_sub(1);
    }

    /// Move the contact cursor down, stopping at the last contact.
    pub fn cursor_down(&mut self) {
        let len = self.filtered_conversations().len();
        if self.contact_cursor + 1 < len {
            self.contact_cursor += 1;
        }
    }

    /// Keep the cursor inside the filtered list after the filter changes.
    pub fn clamp_cursor(&mut self) {
        let len = self.filtered_conversations().len();
        self.contact_cursor = self.contact_cursor.min(len.saturating_sub(1));
    }

    fn cursor_of_active(&self) -> Option<usize> {
        let active = self.session.active_id()?;
        self.filtered_conversations()
            .iter()
            .position(|view| view.id == active)
    }

    // ===== Composition and search =====

    /// Send the composer text to the active conversation.
    ///
    /// The composer is cleared either way; blank text is dropped by the
    /// session.
    pub fn submit_composer(&mut self, now: Timestamp) {
        let text = self.composer.take();
        let Some(active) = self.session.active_id() else {
            return;
        };

        let before = self.session.composed_messages().len();
        self.session = std::mem::take(&mut self.session).compose_message(&text, active, now);

        if self.session.composed_messages().len() > before {
            self.chat_scroll = ChatScroll::Bottom;
        }
    }

    /// Search the active conversation for the search box text.
    ///
    /// The search box is cleared either way. An empty box clears the
    /// highlight without reporting a miss.
    pub fn submit_message_search(&mut self) {
        let query = self.message_search.take();
        let Some(active) = self.session.active_id() else {
            return;
        };

        if query.trim().is_empty() {
            self.search_status = SearchStatus::Idle;
            return;
        }

        match find_message(&self.session, active, &query) {
            Some(hit) => {
                debug!(chat = %active, message = %hit.message_id, "Search hit");
                self.search_status = SearchStatus::Found(hit);
                self.chat_scroll = ChatScroll::Target(hit.message_id);
            }
            None => {
                debug!(chat = %active, "Search miss");
                self.search_status = SearchStatus::NotFound(query);
            }
        }
    }

    // ===== Focus =====

    /// Return to the contact list, bringing it to the front.
    pub fn back_to_contacts(&mut self) {
        self.focus = Focus::ContactList;
        self.narrow_view = NarrowView::Contacts;
        self.contact_cursor = self.cursor_of_active().unwrap_or(self.contact_cursor);
        self.clamp_cursor();
    }

    /// Focus a text input. The composer and message search need an active
    /// conversation and bring the chat pane to the front.
    pub fn focus_input(&mut self, focus: Focus) {
        match focus {
            Focus::ContactList => self.focus = Focus::ContactList,
            Focus::ContactFilter => {
                self.focus = focus;
                self.narrow_view = NarrowView::Contacts;
            }
            Focus::Composer | Focus::MessageSearch => {
                if self.session.active_id().is_some() {
                    self.focus = focus;
                    self.narrow_view = NarrowView::Chat;
                }
            }
        }
    }

    /// The text input that currently has focus.
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::ContactList => None,
            Focus::ContactFilter => Some(&mut self.contact_filter),
            Focus::Composer => Some(&mut self.composer),
            Focus::MessageSearch => Some(&mut self.message_search),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
