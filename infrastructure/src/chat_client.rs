use crate::config::Config;
use crate::error::ChatServiceError;
use domain::chat_service::ChatService;
use domain::models::{ChatRequest, ChatResponse};
use reqwest::Client;
use shared::telemetry::Telemetry;
use shared::types::Result;
use std::sync::Arc;
use tracing::debug;

/// `POST /chat/` over HTTP with a JSON body.
#[derive(Clone)]
pub struct HttpChatService {
    client: Arc<Client>,
    url: String,
}

impl HttpChatService {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: Arc::new(builder.build()?),
            url: config.chat_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One attempt, no retry. Non-success statuses are failures even when the
    /// body happens to parse.
    pub async fn post(
        &self,
        request: &ChatRequest,
    ) -> std::result::Result<ChatResponse, ChatServiceError> {
        let telemetry = Telemetry::start("chat_request");
        debug!(url = %self.url, reset = request.is_reset(), "sending chat request");

        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();
        let text = response.text().await?;
        telemetry.finish();

        if !status.is_success() {
            return Err(ChatServiceError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        let parsed: ChatResponse = serde_json::from_str(&text)?;
        debug!(chars = parsed.response.chars().count(), "chat response received");
        Ok(parsed)
    }
}

impl ChatService for HttpChatService {
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse> {
        Ok(self.post(request).await?)
    }
}
