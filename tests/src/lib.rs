//! Mock Chat Service helpers shared by the workspace integration tests.

use application::conversation_service::ConversationService;
use domain::locale::Locale;
use infrastructure::chat_client::HttpChatService;
use infrastructure::config::Config;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CHAT_PATH: &str = "/chat/";

pub fn request_body(message: &str, last_agent_msg: &str) -> Value {
    json!({ "message": message, "last_agent_msg": last_agent_msg })
}

/// Answers exactly the given request body with `{"response": reply}`.
pub async fn mount_reply(server: &MockServer, message: &str, last_agent_msg: &str, reply: &str) {
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(body_json(request_body(message, last_agent_msg)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": reply })))
        .expect(1)
        .mount(server)
        .await;
}

/// Answers the given request body with a bare status code.
pub async fn mount_failure(server: &MockServer, message: &str, last_agent_msg: &str, status: u16) {
    Mock::given(method("POST"))
        .and(path(CHAT_PATH))
        .and(body_json(request_body(message, last_agent_msg)))
        .respond_with(ResponseTemplate::new(status))
        .expect(1)
        .mount(server)
        .await;
}

pub fn config_for(server: &MockServer, locale: Locale) -> Config {
    Config {
        base_url: server.uri(),
        locale,
        ..Config::default()
    }
}

pub fn conversation_for(server: &MockServer, locale: Locale) -> ConversationService<HttpChatService> {
    let service = HttpChatService::new(&config_for(server, locale))
        .expect("client builds with default settings");
    ConversationService::new(service, locale)
}

/// Bodies of every request the server has seen, in arrival order.
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| serde_json::from_slice(&r.body).expect("request body is JSON"))
        .collect()
}
