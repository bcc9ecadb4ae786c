//! View-model assembly.
//!
//! Joins raw chats to their counterpart user and messages, producing the
//! conversation list ordered by recency. Runs once at startup.

use crate::fixtures::Fixtures;
use crate::model::{AssembleError, Chat, ChatId, Message, MessageId, User, UserId};
use crate::view_state::ConversationView;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Build one [`ConversationView`] per raw chat, most recent first.
///
/// References are resolved through id maps built once per call. A chat's
/// messages are its listed references (each once) followed by any other
/// message that names it as owner, stably sorted by date. A chat with no last message
/// sorts after every chat that has one; ties keep input order.
///
/// # Errors
///
/// Any dangling user or message reference, or a message referenced by a
/// chat it does not belong to, aborts assembly with an [`AssembleError`].
pub fn assemble(
    users: &[User],
    chats: &[Chat],
    messages: &[Message],
) -> Result<Vec<ConversationView>, AssembleError> {
    let users_by_id: HashMap<UserId, &User> = users.iter().map(|user| (user.id, user)).collect();
    let messages_by_id: HashMap<MessageId, &Message> = messages
        .iter()
        .map(|message| (message.id, message))
        .collect();
    let mut owned_by_chat: HashMap<ChatId, Vec<&Message>> = HashMap::new();
    for message in messages {
        owned_by_chat.entry(message.chat_id).or_default().push(message);
    }

    let lookups = Lookups {
        users_by_id,
        messages_by_id,
        owned_by_chat,
    };

    let mut views = chats
        .iter()
        .map(|chat| assemble_chat(chat, &lookups))
        .collect::<Result<Vec<_>, _>>()?;

    views.sort_by(compare_recency);

    debug!(conversations = views.len(), "Assembled conversation views");

    Ok(views)
}

/// [`assemble`] over a loaded fixture set.
///
/// # Errors
///
/// See [`assemble`].
pub fn assemble_fixtures(fixtures: &Fixtures) -> Result<Vec<ConversationView>, AssembleError> {
    assemble(&fixtures.users, &fixtures.chats, &fixtures.messages)
}

/// Id maps shared by every chat of one assembly.
struct Lookups<'a> {
    users_by_id: HashMap<UserId, &'a User>,
    messages_by_id: HashMap<MessageId, &'a Message>,
    owned_by_chat: HashMap<ChatId, Vec<&'a Message>>,
}

fn assemble_chat(chat: &Chat, lookups: &Lookups<'_>) -> Result<ConversationView, AssembleError> {
    let messages_by_id = &lookups.messages_by_id;
    let user = lookups
        .users_by_id
        .get(&chat.with_user)
        .map(|user| (*user).clone())
        .ok_or(AssembleError::UnknownUser {
            chat: chat.id,
            user: chat.with_user,
        })?;

    let last_message = chat
        .last_message
        .map(|id| resolve_message(chat, id, messages_by_id))
        .transpose()?;

    // Repeated references resolve once, at their first position
    let mut listed: HashSet<MessageId> = HashSet::with_capacity(chat.messages.len());
    let mut messages = Vec::with_capacity(chat.messages.len());
    for &id in &chat.messages {
        if listed.insert(id) {
            messages.push(resolve_message(chat, id, messages_by_id)?);
        }
    }

    if let Some(owned) = lookups.owned_by_chat.get(&chat.id) {
        messages.extend(
            owned
                .iter()
                .filter(|message| !listed.contains(&message.id))
                .map(|message| (*message).clone()),
        );
    }
    messages.sort_by_key(|message| message.date);

    Ok(ConversationView {
        id: chat.id,
        user,
        last_message,
        messages,
    })
}

fn resolve_message(
    chat: &Chat,
    id: MessageId,
    messages_by_id: &HashMap<MessageId, &Message>,
) -> Result<Message, AssembleError> {
    let message = messages_by_id
        .get(&id)
        .ok_or(AssembleError::UnknownMessage {
            chat: chat.id,
            message: id,
        })?;

    if message.chat_id != chat.id {
        return Err(AssembleError::ForeignMessage {
            chat: chat.id,
            message: id,
            owner: message.chat_id,
        });
    }

    Ok((*message).clone())
}

/// Descending by last activity; conversations without messages last.
fn compare_recency(a: &ConversationView, b: &ConversationView) -> Ordering {
    match (a.last_activity(), b.last_activity()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "assembler_tests.rs"]
mod tests;
