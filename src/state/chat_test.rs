use super::*;

fn bot(text: &str) -> MessageRecord {
    MessageRecord {
        message: text.to_owned(),
        kind: MessageKind::Bot,
    }
}

// =============================================================
// Seeded state
// =============================================================

#[test]
fn seeded_state_has_exactly_one_test_message() {
    let state = ChatState::seeded();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].message, "test message");
    assert_eq!(state.messages[0].kind, MessageKind::Bot);
}

#[test]
fn seeded_state_awaits_initial_fetch() {
    let state = ChatState::seeded();
    assert_eq!(state.load, LoadState::AwaitingInitialFetch);
}

// =============================================================
// apply_history
// =============================================================

#[test]
fn apply_history_replaces_seed_and_settles() {
    let mut state = ChatState::seeded();
    state.apply_history(vec![bot("hello"), bot("world")]);

    let texts: Vec<&str> = state.messages.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, ["hello", "world"]);
    assert_eq!(state.load, LoadState::Settled);
}

#[test]
fn apply_history_with_empty_payload_yields_empty_history() {
    let mut state = ChatState::seeded();
    state.apply_history(vec![]);
    assert!(state.messages.is_empty());
    assert_eq!(state.load, LoadState::Settled);
}

#[test]
fn apply_history_drops_duplicate_text_first_wins() {
    let mut state = ChatState::seeded();
    state.apply_history(vec![
        bot("hi"),
        MessageRecord {
            message: "hi".to_owned(),
            kind: MessageKind::User,
        },
        bot("bye"),
    ]);

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].message, "hi");
    assert_eq!(state.messages[0].kind, MessageKind::Bot);
    assert_eq!(state.messages[1].message, "bye");
}

// =============================================================
// settle (fetch failure path)
// =============================================================

#[test]
fn settle_on_failure_leaves_history_unchanged() {
    let mut state = ChatState::seeded();
    let before = state.messages.clone();
    state.settle();
    assert_eq!(state.messages, before);
    assert_eq!(state.load, LoadState::Settled);
}

// =============================================================
// push_message
// =============================================================

#[test]
fn push_message_appends_in_order() {
    let mut state = ChatState::seeded();
    assert!(state.push_message(bot("one")));
    assert!(state.push_message(bot("two")));

    let texts: Vec<&str> = state.messages.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, ["test message", "one", "two"]);
}

#[test]
fn push_message_rejects_duplicate_text() {
    let mut state = ChatState::seeded();
    assert!(!state.push_message(bot("test message")));
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn push_message_rejects_duplicate_text_across_kinds() {
    let mut state = ChatState::default();
    assert!(state.push_message(bot("same")));
    assert!(!state.push_message(MessageRecord {
        message: "same".to_owned(),
        kind: MessageKind::User,
    }));
    assert_eq!(state.messages.len(), 1);
}

// =============================================================
// compose_outgoing
// =============================================================

#[test]
fn compose_outgoing_trims_and_tags_user() {
    let record = compose_outgoing("  hello there  ").expect("record");
    assert_eq!(record.message, "hello there");
    assert_eq!(record.kind, MessageKind::User);
}

#[test]
fn compose_outgoing_rejects_blank_draft() {
    assert_eq!(compose_outgoing(""), None);
    assert_eq!(compose_outgoing("   \t  "), None);
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn message_record_deserializes_wire_type_field() {
    let record: MessageRecord =
        serde_json::from_str(r#"{"message":"hi","type":"bot"}"#).expect("parse");
    assert_eq!(record.message, "hi");
    assert_eq!(record.kind, MessageKind::Bot);
}

#[test]
fn message_record_serializes_kind_lowercase() {
    let json = serde_json::to_string(&MessageRecord {
        message: "yo".to_owned(),
        kind: MessageKind::User,
    })
    .expect("serialize");
    assert_eq!(json, r#"{"message":"yo","type":"user"}"#);
}

#[test]
fn message_record_rejects_unknown_kind() {
    let result = serde_json::from_str::<MessageRecord>(r#"{"message":"hi","type":"admin"}"#);
    assert!(result.is_err());
}
