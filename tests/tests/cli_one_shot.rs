use domain::locale::Locale;
use presentation::cli::{Cli, CliApp};
use presentation::render::TranscriptRenderer;
use tests::{conversation_for, mount_reply};
use wiremock::MockServer;

async fn run_one_shot(server: &MockServer, locale: Locale, args: &[&str]) -> String {
    let cli = <Cli as clap::Parser>::try_parse_from(args).unwrap();
    let mut app = CliApp::with_parts(
        conversation_for(server, locale),
        TranscriptRenderer::plain(locale, None),
        Vec::new(),
    );
    app.run(&cli).await.unwrap();
    String::from_utf8(app.into_output()).unwrap()
}

#[tokio::test]
async fn one_shot_prints_greeting_turn_and_reply() {
    let server = MockServer::start().await;
    mount_reply(&server, "__RESET__", "", "Hello! Please choose:\n1. A\n2. B").await;
    mount_reply(&server, "1", "1. A\n2. B", "You chose A.").await;

    let output = run_one_shot(&server, Locale::English, &["medchat", "--message", " 1 "]).await;

    assert_eq!(
        output,
        "Medical Assistant Chatbot\n\n\
         Bot:\nHello! Please choose:\n\n\
         Bot:\n1. A\n2. B\n\n\
         You:\n1\n\n\
         Bot:\nYou chose A.\n\n"
    );
}

#[tokio::test]
async fn one_shot_with_blank_message_only_greets() {
    let server = MockServer::start().await;
    mount_reply(&server, "__RESET__", "", "Merhaba.").await;

    let output = run_one_shot(&server, Locale::Turkish, &["medchat", "-m", "  "]).await;

    assert_eq!(output, "Tıbbi Asistan Sohbet Botu\n\nBot:\nMerhaba.\n\n");
}
