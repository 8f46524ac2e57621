use domain::locale::Locale;
use domain::session::Message;
use tests::{
    conversation_for, mount_failure, mount_reply, received_bodies, request_body,
};
use wiremock::MockServer;

#[tokio::test]
async fn greeting_then_turn_over_http() {
    let server = MockServer::start().await;
    mount_reply(&server, "__RESET__", "", "Welcome.\n1. Q1").await;
    mount_reply(&server, "answer", "1. Q1", "Q2").await;

    let mut conversation = conversation_for(&server, Locale::English);
    conversation.initiate_session().await;
    assert!(conversation.send_turn("answer").await);

    assert_eq!(
        conversation.history(),
        &[
            Message::bot("Welcome."),
            Message::bot("1. Q1"),
            Message::user("answer"),
            Message::bot("Q2"),
        ]
    );
    assert_eq!(
        received_bodies(&server).await,
        vec![request_body("__RESET__", ""), request_body("answer", "1. Q1")]
    );
}

#[tokio::test]
async fn scenario_history_q1_answer_q2() {
    let server = MockServer::start().await;
    mount_reply(&server, "__RESET__", "", "Q1").await;
    mount_reply(&server, "answer", "Q1", "Q2").await;

    let mut conversation = conversation_for(&server, Locale::English);
    conversation.initiate_session().await;
    conversation.send_turn("answer").await;

    assert_eq!(
        conversation.history(),
        &[Message::bot("Q1"), Message::user("answer"), Message::bot("Q2")]
    );
}

#[tokio::test]
async fn server_error_becomes_fallback_and_conversation_continues() {
    let server = MockServer::start().await;
    mount_reply(&server, "__RESET__", "", "How old are you?").await;
    mount_failure(&server, "42", "How old are you?", 503).await;
    mount_reply(&server, "42?", "Sunucuya ulaşılamadı.", "Thanks.").await;

    let mut conversation = conversation_for(&server, Locale::Turkish);
    conversation.initiate_session().await;
    conversation.send_turn("42").await;
    conversation.send_turn("42?").await;

    assert_eq!(
        conversation.history(),
        &[
            Message::bot("How old are you?"),
            Message::user("42"),
            Message::bot("Sunucuya ulaşılamadı."),
            Message::user("42?"),
            Message::bot("Thanks."),
        ]
    );
}

#[tokio::test]
async fn unreachable_server_yields_one_fallback_on_greeting() {
    let server = MockServer::start().await;
    mount_failure(&server, "__RESET__", "", 500).await;

    let mut conversation = conversation_for(&server, Locale::English);
    conversation.initiate_session().await;

    assert_eq!(
        conversation.history(),
        &[Message::bot("Could not reach the server.")]
    );
}

#[tokio::test]
async fn blank_turns_never_reach_the_server() {
    let server = MockServer::start().await;
    mount_reply(&server, "__RESET__", "", "Hi").await;

    let mut conversation = conversation_for(&server, Locale::English);
    conversation.initiate_session().await;
    assert!(!conversation.send_turn("   ").await);
    assert!(!conversation.send_turn("").await);

    assert_eq!(conversation.history(), &[Message::bot("Hi")]);
    assert_eq!(received_bodies(&server).await.len(), 1);
}
