//! Splitting of the initial greeting into an introduction and a numbered
//! question list.
//!
//! The match is the first literal `"1."` anywhere in the text, so prose such as
//! "version 1.5" also triggers a split.

use crate::session::Message;

pub const ENUMERATION_MARKER: &str = "1.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting<'a> {
    /// No marker found; the response is kept verbatim.
    Single(&'a str),
    /// Both parts are trimmed.
    Split { intro: &'a str, enumerated: &'a str },
}

pub fn split_greeting(response: &str) -> Greeting<'_> {
    match response.find(ENUMERATION_MARKER) {
        Some(at) => Greeting::Split {
            intro: response[..at].trim(),
            enumerated: response[at..].trim(),
        },
        None => Greeting::Single(response),
    }
}

impl Greeting<'_> {
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Greeting::Single(text) => vec![Message::bot(text)],
            Greeting::Split { intro, enumerated } => {
                vec![Message::bot(intro), Message::bot(enumerated)]
            }
        }
    }
}
