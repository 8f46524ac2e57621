use domain::chat_service::ChatService;
use domain::greeting::split_greeting;
use domain::locale::Locale;
use domain::models::{ChatRequest, ChatResponse};
use domain::session::{Message, Session};
use shared::types::Result;
use shared::utils::is_blank;
use tracing::{debug, info, warn};

/// A user message that has been appended to the history and is waiting for
/// the Chat Service to answer.
#[derive(Debug)]
#[must_use = "a pending turn must be finished to append the bot reply"]
pub struct PendingTurn {
    request: ChatRequest,
}

impl PendingTurn {
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// Owns one chat session and drives it against a [`ChatService`].
///
/// Every mutating operation takes `&mut self`, so a session never has more
/// than one request in flight; a second turn waits until the first reply (or
/// fallback) has been appended.
pub struct ConversationService<S> {
    service: S,
    session: Session,
    locale: Locale,
}

impl<S: ChatService> ConversationService<S> {
    pub fn new(service: S, locale: Locale) -> Self {
        Self {
            service,
            session: Session::new(),
            locale,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &[Message] {
        self.session.history()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.session.set_input(text);
    }

    /// Requests the greeting and appends it, split into an introduction and a
    /// numbered list when the response contains one. Failures append the
    /// fallback line instead.
    pub async fn initiate_session(&mut self) {
        info!("requesting greeting");
        let outcome = self.service.exchange(&ChatRequest::reset()).await;
        match outcome {
            Ok(reply) => {
                let messages = split_greeting(&reply.response).into_messages();
                debug!(bubbles = messages.len(), "greeting received");
                self.session.extend(messages);
            }
            Err(err) => self.push_fallback(&err),
        }
    }

    /// Discards the current history and greets again.
    pub async fn restart(&mut self) {
        info!(discarded = self.session.len(), "restarting session");
        self.session = Session::new();
        self.initiate_session().await;
    }

    /// Appends the trimmed user text and prepares the request for it.
    ///
    /// Returns `None` without touching the session when the text is blank.
    /// The `last_agent_msg` context is captured before the user message is
    /// appended.
    pub fn begin_turn(&mut self, user_text: &str) -> Option<PendingTurn> {
        if is_blank(user_text) {
            return None;
        }
        let message = user_text.trim().to_string();
        let last_agent_msg = self.session.last_bot_text().unwrap_or_default().to_string();

        self.session.push(Message::user(message.clone()));
        self.session.take_input();

        Some(PendingTurn {
            request: ChatRequest::turn(message, last_agent_msg),
        })
    }

    /// Sends the pending request and appends the reply verbatim, or the
    /// fallback line on failure.
    pub async fn finish_turn(&mut self, turn: PendingTurn) {
        let outcome = self.service.exchange(&turn.request).await;
        self.complete_turn(outcome);
    }

    fn complete_turn(&mut self, outcome: Result<ChatResponse>) {
        match outcome {
            Ok(reply) => self.session.push(Message::bot(reply.response)),
            Err(err) => self.push_fallback(&err),
        }
    }

    /// One full turn. Returns `false` when the text was blank and nothing
    /// happened.
    pub async fn send_turn(&mut self, user_text: &str) -> bool {
        match self.begin_turn(user_text) {
            Some(turn) => {
                self.finish_turn(turn).await;
                true
            }
            None => false,
        }
    }

    /// [`begin_turn`](Self::begin_turn) with the contents of the input
    /// buffer. A blank buffer is left as is.
    pub fn begin_input_turn(&mut self) -> Option<PendingTurn> {
        let input = self.session.input().to_string();
        self.begin_turn(&input)
    }

    /// Sends whatever is in the input buffer.
    pub async fn submit_input(&mut self) -> bool {
        match self.begin_input_turn() {
            Some(turn) => {
                self.finish_turn(turn).await;
                true
            }
            None => false,
        }
    }

    fn push_fallback(&mut self, err: &anyhow::Error) {
        warn!(error = %format!("{err:#}"), "chat service unreachable");
        self.session.push(Message::bot(self.locale.unreachable()));
    }
}
