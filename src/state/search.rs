//! Message search.
//!
//! A pure query over the active conversation: the first visible message
//! whose content contains the query, ignoring case. The result is a scroll
//! target; scrolling itself belongs to the render surface.

use crate::model::{ChatId, MessageId};
use crate::state::SessionState;

// ===== SearchQuery =====

/// Validated search query. Never empty.
/// Smart constructor enforces non-empty invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: validates query is non-empty.
    /// Returns None if query is empty. Whitespace is a valid needle.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== SearchHit =====

/// Where a search landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    /// The matching message; the render surface scrolls it into view.
    pub message_id: MessageId,
    /// Index within the conversation's visible messages.
    pub position: usize,
}

// ===== Search Execution =====

/// Find the first message of `chat_id` containing `query`, ignoring case.
///
/// Messages are scanned in ascending timestamp order, composed messages
/// included. An empty query never matches.
pub fn find_message(session: &SessionState, chat_id: ChatId, query: &str) -> Option<SearchHit> {
    let query = SearchQuery::new(query)?;
    let needle = query.as_str().to_lowercase();

    session
        .visible_messages(chat_id)
        .into_iter()
        .enumerate()
        .find(|(_, message)| message.contains_lowercase(&needle))
        .map(|(position, message)| SearchHit {
            message_id: message.id,
            position,
        })
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
