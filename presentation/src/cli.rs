use application::conversation_service::ConversationService;
use clap::{ArgAction, Parser};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use domain::chat_service::ChatService;
use domain::locale::Locale;
use infrastructure::chat_client::HttpChatService;
use infrastructure::config::{Config, ENV_BASE_URL, ENV_LANG, ENV_TIMEOUT_SECS};
use shared::confirmation::ask_confirmation;
use shared::types::Result;
use shared::utils::is_command;
use std::io::{self, IsTerminal, Write};
use tracing::info;

use crate::render::TranscriptRenderer;

const EXIT_WORDS: &[&str] = &["exit", "quit"];
const RESET_WORDS: &[&str] = &["/reset"];

fn parse_locale(raw: &str) -> std::result::Result<Locale, String> {
    raw.parse().map_err(|e: anyhow::Error| e.to_string())
}

/// Terminal client for the medical assistant chat service.
#[derive(Parser, Debug)]
#[command(name = "medchat")]
#[command(about = "Chat with the medical assistant service from the terminal", long_about = None)]
pub struct Cli {
    /// Chat service base URL (overrides MEDCHAT_BASE_URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Per-request timeout in seconds (overrides MEDCHAT_TIMEOUT_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Interface language, `en` or `tr` (overrides MEDCHAT_LANG)
    #[arg(long, value_parser = parse_locale)]
    pub lang: Option<Locale>,

    /// Send one message after the greeting, print the conversation and exit
    #[arg(short, long)]
    pub message: Option<String>,

    /// Write debug logs to stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    /// Flag value standing in for the given configuration variable. Flags are
    /// consulted before the environment, so a valid flag hides an invalid
    /// variable.
    pub fn override_for(&self, key: &str) -> Option<String> {
        match key {
            ENV_BASE_URL => self.url.clone(),
            ENV_TIMEOUT_SECS => self.timeout.map(|secs| secs.to_string()),
            ENV_LANG => self.lang.map(|locale| locale.code().to_string()),
            _ => None,
        }
    }
}

pub struct CliApp<S, W> {
    conversation: ConversationService<S>,
    renderer: TranscriptRenderer,
    out: W,
    interactive: bool,
}

impl CliApp<HttpChatService, io::Stdout> {
    pub fn new(config: &Config) -> Result<Self> {
        info!(url = %config.chat_url(), locale = %config.locale, "starting chat client");
        let service = HttpChatService::new(config)?;
        let stdout = io::stdout();
        let interactive = stdout.is_terminal() && io::stdin().is_terminal();
        let renderer = if stdout.is_terminal() {
            TranscriptRenderer::for_terminal(config.locale)
        } else {
            TranscriptRenderer::plain(config.locale, None)
        };
        Ok(Self {
            conversation: ConversationService::new(service, config.locale),
            renderer,
            out: stdout,
            interactive,
        })
    }
}

impl<S: ChatService, W: Write> CliApp<S, W> {
    /// Non-interactive app; lines are read from stdin without prompting.
    pub fn with_parts(
        conversation: ConversationService<S>,
        renderer: TranscriptRenderer,
        out: W,
    ) -> Self {
        Self {
            conversation,
            renderer,
            out,
            interactive: false,
        }
    }

    pub fn conversation(&self) -> &ConversationService<S> {
        &self.conversation
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run(&mut self, cli: &Cli) -> Result<()> {
        self.renderer.write_title(&mut self.out)?;
        self.greet().await?;

        if let Some(message) = &cli.message {
            self.submit(message).await?;
            return Ok(());
        }
        self.chat_loop().await
    }

    pub async fn greet(&mut self) -> Result<()> {
        self.conversation.initiate_session().await;
        self.flush()
    }

    /// Sends one line of user input. The user's message is written before the
    /// request goes out; the reply follows once it settles.
    pub async fn submit(&mut self, input: &str) -> Result<()> {
        self.conversation.set_input(input);
        let Some(turn) = self.conversation.begin_input_turn() else {
            return Ok(());
        };
        self.flush()?;
        if self.interactive {
            eprintln!("{}", "...".dimmed());
        }
        self.conversation.finish_turn(turn).await;
        self.flush()
    }

    /// Starts a new session below a separator and prints its greeting.
    pub async fn restart(&mut self) -> Result<()> {
        self.conversation.restart().await;
        self.renderer.restart(&mut self.out)?;
        self.flush()
    }

    async fn chat_loop(&mut self) -> Result<()> {
        loop {
            let input = if self.interactive {
                Input::<String>::with_theme(&ColorfulTheme::default())
                    .with_prompt(self.conversation.locale().input_placeholder())
                    .allow_empty(true)
                    .interact_text()?
            } else {
                let mut line = String::new();
                if io::stdin().read_line(&mut line)? == 0 {
                    break;
                }
                line
            };

            if is_command(&input, EXIT_WORDS) {
                break;
            }
            if is_command(&input, RESET_WORDS) {
                if ask_confirmation(self.conversation.locale().reset_prompt(), true)? {
                    self.restart().await?;
                }
                continue;
            }
            self.submit(&input).await?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.renderer
            .flush_new(&mut self.out, self.conversation.history())?;
        Ok(())
    }
}
