use std::fmt;
use std::str::FromStr;

use crate::session::Sender;

/// User-facing strings of the chat interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Turkish,
}

impl Locale {
    /// Bot line shown whenever the Chat Service cannot be reached.
    pub fn unreachable(self) -> &'static str {
        match self {
            Locale::English => "Could not reach the server.",
            Locale::Turkish => "Sunucuya ulaşılamadı.",
        }
    }

    pub fn label(self, sender: Sender) -> &'static str {
        match (self, sender) {
            (Locale::English, Sender::User) => "You",
            (Locale::Turkish, Sender::User) => "Sen",
            (_, Sender::Bot) => "Bot",
        }
    }

    pub fn input_placeholder(self) -> &'static str {
        match self {
            Locale::English => "Type your message...",
            Locale::Turkish => "Mesajınızı yazın...",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Locale::English => "Medical Assistant Chatbot",
            Locale::Turkish => "Tıbbi Asistan Sohbet Botu",
        }
    }

    pub fn reset_prompt(self) -> &'static str {
        match self {
            Locale::English => "Start a new conversation?",
            Locale::Turkish => "Yeni bir sohbet başlatılsın mı?",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Turkish => "tr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "tr" | "turkish" => Ok(Locale::Turkish),
            other => Err(anyhow::anyhow!(
                "unsupported language '{}' (expected 'en' or 'tr')",
                other
            )),
        }
    }
}
