use serde::{Deserialize, Serialize};

/// Message value that asks the Chat Service for a fresh greeting.
pub const RESET_SENTINEL: &str = "__RESET__";

/// Body of `POST /chat/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub last_agent_msg: String,
}

impl ChatRequest {
    pub fn reset() -> Self {
        Self {
            message: RESET_SENTINEL.to_string(),
            last_agent_msg: String::new(),
        }
    }

    pub fn turn(message: impl Into<String>, last_agent_msg: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            last_agent_msg: last_agent_msg.into(),
        }
    }

    pub fn is_reset(&self) -> bool {
        self.message == RESET_SENTINEL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
