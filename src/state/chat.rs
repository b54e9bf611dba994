#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Origin tag for a chat message. Serialized as `"bot"` / `"user"` under
/// the wire field name `type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Bot,
    User,
}

/// A single chat message, both the wire shape and the rendered shape.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessageRecord {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

/// Progress of the initial history fetch. Transitions exactly once per
/// mount, when the debounced fetch attempt resolves either way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    AwaitingInitialFetch,
    Settled,
}

/// State for the chat view: ordered message history (oldest first) plus
/// the initial-load progress.
///
/// The list is keyed by message text in the rendering layer, so every
/// mutation path rejects records whose text is already present.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<MessageRecord>,
    pub load: LoadState,
}

impl ChatState {
    /// Initial state on mount: exactly one seeded bot record.
    pub fn seeded() -> Self {
        Self {
            messages: vec![MessageRecord {
                message: "test message".to_owned(),
                kind: MessageKind::Bot,
            }],
            load: LoadState::AwaitingInitialFetch,
        }
    }

    /// Replace the entire history with fetched records and settle the load
    /// state. Duplicate message text is dropped, first occurrence wins.
    pub fn apply_history(&mut self, records: Vec<MessageRecord>) {
        self.messages.clear();
        for record in records {
            if !self.contains_text(&record.message) {
                self.messages.push(record);
            }
        }
        self.load = LoadState::Settled;
    }

    /// Settle the load state without touching the history. Used when the
    /// initial fetch fails.
    pub fn settle(&mut self) {
        self.load = LoadState::Settled;
    }

    /// Append a record to the history. Returns `false` (and leaves the
    /// history unchanged) if its text is already present.
    pub fn push_message(&mut self, record: MessageRecord) -> bool {
        if self.contains_text(&record.message) {
            return false;
        }
        self.messages.push(record);
        true
    }

    fn contains_text(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.message == text)
    }
}

/// Build the outgoing record for a submitted draft.
///
/// The draft is trimmed; an all-whitespace draft composes nothing.
/// Submitted messages are tagged [`MessageKind::User`].
pub fn compose_outgoing(draft: &str) -> Option<MessageRecord> {
    let text = draft.trim();
    if text.is_empty() {
        return None;
    }
    Some(MessageRecord {
        message: text.to_owned(),
        kind: MessageKind::User,
    })
}
