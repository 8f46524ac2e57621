use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Conversation history plus the pending input buffer.
///
/// History is append-only: entries are never removed or edited, and index
/// order is display order.
#[derive(Debug, Clone, Default)]
pub struct Session {
    history: Vec<Message>,
    input: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.history.last()
    }

    pub fn push(&mut self, message: Message) {
        self.history.push(message);
    }

    pub fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.history.extend(messages);
    }

    /// Text of the most recent Bot message, found by walking the history
    /// backwards.
    pub fn last_bot_text(&self) -> Option<&str> {
        self.history
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Bot)
            .map(|m| m.text.as_str())
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Empties the input buffer and returns what it held.
    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }
}
