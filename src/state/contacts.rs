//! Contact list filtering.

use crate::view_state::ConversationView;

/// Conversations whose counterpart name contains `query`, ignoring case.
///
/// An empty query keeps every conversation. Recency order is preserved.
pub fn filter_conversations<'a>(
    conversations: &'a [ConversationView],
    query: &str,
) -> Vec<&'a ConversationView> {
    if query.is_empty() {
        return conversations.iter().collect();
    }

    let needle = query.to_lowercase();
    conversations
        .iter()
        .filter(|view| view.name_matches(&needle))
        .collect()
}

/// Header label such as `3 chats`.
///
/// Only counts above one are pluralized, so an empty list reads `0 chat`.
pub fn chat_count_label(count: usize) -> String {
    let suffix = if count > 1 { "s" } else { "" };
    format!("{count} chat{suffix}")
}
