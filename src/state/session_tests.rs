//! Tests for session state transitions.

use super::*;
use crate::model::MessageOrigin;
use crate::fixtures::Fixtures;
use crate::test_harness::{
    chat, loaded_session, message, scenario_fixtures, ts, two_chat_fixtures, user,
};

fn contents(session: &SessionState, chat: ChatId) -> Vec<String> {
    session
        .visible_messages(chat)
        .iter()
        .map(|m| m.content.clone())
        .collect()
}

// ===== Phases =====

#[test]
fn new_session_is_uninitialized() {
    let session = SessionState::new();
    assert_eq!(session.phase(), SessionPhase::Uninitialized);
    assert!(!session.is_loaded());
    assert_eq!(session.active_id(), None);
}

#[test]
fn load_activates_most_recent_conversation() {
    let session = loaded_session(&two_chat_fixtures());

    assert_eq!(
        session.phase(),
        SessionPhase::Loaded {
            active: Some(ChatId::new(20))
        }
    );
    assert_eq!(
        session.active_conversation().map(|v| v.user.name.as_str()),
        Some("Bob")
    );
}

#[test]
fn load_of_empty_view_model_has_no_active_conversation() {
    let session = SessionState::new().load(Vec::new());
    assert_eq!(session.phase(), SessionPhase::Loaded { active: None });
    assert!(session.active_conversation().is_none());
}

// ===== select_conversation =====

#[test]
fn select_switches_active_conversation() {
    let session = loaded_session(&two_chat_fixtures()).select_conversation(ChatId::new(10));
    assert_eq!(session.active_id(), Some(ChatId::new(10)));
}

#[test]
fn select_unknown_id_is_a_no_op() {
    let before = loaded_session(&two_chat_fixtures());
    let after = before.clone().select_conversation(ChatId::new(999));
    assert_eq!(after, before);
}

#[test]
fn select_before_load_is_a_no_op() {
    let session = SessionState::new().select_conversation(ChatId::new(10));
    assert_eq!(session.phase(), SessionPhase::Uninitialized);
}

// ===== compose_message =====

#[test]
fn compose_appends_after_fixture_messages() {
    let session =
        loaded_session(&scenario_fixtures()).compose_message("Hello", ChatId::new(10), ts(60));

    assert_eq!(contents(&session, ChatId::new(10)), vec!["Hi", "Hello"]);
}

#[test]
fn composed_message_is_self_authored_and_tagged() {
    let session =
        loaded_session(&scenario_fixtures()).compose_message("Hello", ChatId::new(10), ts(60));

    let composed = &session.composed_messages()[0];
    assert!(composed.written_by_me);
    assert_eq!(composed.origin, MessageOrigin::Composed);
    assert_eq!(composed.chat_id, ChatId::new(10));
    assert_eq!(composed.date, ts(60));
}

#[test]
fn composed_ids_are_unique_and_above_fixture_ids() {
    let session = loaded_session(&two_chat_fixtures())
        .compose_message("one", ChatId::new(10), ts(300))
        .compose_message("two", ChatId::new(20), ts(301))
        .compose_message("three", ChatId::new(10), ts(302));

    let ids: Vec<MessageId> = session.composed_messages().iter().map(|m| m.id).collect();
    assert_eq!(
        ids,
        vec![MessageId::new(202), MessageId::new(203), MessageId::new(204)]
    );
}

#[test]
fn composing_after_the_largest_possible_id_reuses_free_ids() {
    let fixtures = Fixtures {
        users: vec![user(1, "Ann")],
        chats: vec![chat(10, 1, Some(u64::MAX), &[1, u64::MAX])],
        messages: vec![
            message(1, 10, "first", 0, false),
            message(u64::MAX, 10, "last", 10, false),
        ],
    };

    let session = loaded_session(&fixtures)
        .compose_message("one", ChatId::new(10), ts(20))
        .compose_message("two", ChatId::new(10), ts(21));

    let ids: Vec<MessageId> = session.composed_messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![MessageId::new(2), MessageId::new(3)]);
    assert_eq!(
        contents(&session, ChatId::new(10)),
        vec!["first", "last", "one", "two"]
    );
}

#[test]
fn blank_text_is_rejected() {
    let before = loaded_session(&scenario_fixtures());

    let after = before
        .clone()
        .compose_message("", ChatId::new(10), ts(60))
        .compose_message("   ", ChatId::new(10), ts(61))
        .compose_message("\t\n", ChatId::new(10), ts(62));

    assert_eq!(after, before);
}

#[test]
fn compose_to_unknown_conversation_is_a_no_op() {
    let before = loaded_session(&scenario_fixtures());
    let after = before
        .clone()
        .compose_message("Hello", ChatId::new(999), ts(60));
    assert_eq!(after, before);
}

#[test]
fn compose_before_load_is_a_no_op() {
    let session = SessionState::new().compose_message("Hello", ChatId::new(10), ts(60));
    assert!(session.composed_messages().is_empty());
}

#[test]
fn compose_keeps_text_as_typed() {
    let session =
        loaded_session(&scenario_fixtures()).compose_message("  padded  ", ChatId::new(10), ts(60));
    assert_eq!(session.composed_messages()[0].content, "  padded  ");
}

// ===== visible_messages =====

#[test]
fn visible_messages_only_include_own_conversation() {
    let session = loaded_session(&two_chat_fixtures())
        .compose_message("to ann", ChatId::new(10), ts(300))
        .compose_message("to bob", ChatId::new(20), ts(301));

    assert_eq!(
        contents(&session, ChatId::new(10)),
        vec!["Hello World", "See you at the club", "to ann"]
    );
    assert_eq!(
        contents(&session, ChatId::new(20)),
        vec!["Are you coming tonight?", "hello again", "to bob"]
    );
}

#[test]
fn visible_messages_of_unknown_conversation_are_empty() {
    let session = loaded_session(&scenario_fixtures());
    assert!(session.visible_messages(ChatId::new(999)).is_empty());
}

#[test]
fn composed_message_with_older_timestamp_is_sorted_into_place() {
    let session =
        loaded_session(&two_chat_fixtures()).compose_message("early", ChatId::new(10), ts(75));

    assert_eq!(
        contents(&session, ChatId::new(10)),
        vec!["Hello World", "early", "See you at the club"]
    );
}

#[test]
fn composed_message_with_equal_timestamp_follows_fixture_message() {
    let session =
        loaded_session(&scenario_fixtures()).compose_message("same time", ChatId::new(10), ts(0));

    assert_eq!(contents(&session, ChatId::new(10)), vec!["Hi", "same time"]);
}

#[test]
fn visible_messages_is_idempotent() {
    let session =
        loaded_session(&two_chat_fixtures()).compose_message("x", ChatId::new(10), ts(300));

    let first: Vec<MessageId> = session
        .visible_messages(ChatId::new(10))
        .iter()
        .map(|m| m.id)
        .collect();
    let second: Vec<MessageId> = session
        .visible_messages(ChatId::new(10))
        .iter()
        .map(|m| m.id)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn selection_survives_composition() {
    let session = loaded_session(&two_chat_fixtures())
        .select_conversation(ChatId::new(10))
        .compose_message("hello", ChatId::new(10), ts(300));

    assert_eq!(session.active_id(), Some(ChatId::new(10)));
}
