use colored::Colorize;
use domain::locale::Locale;
use domain::session::{Message, Sender};
use std::io::{self, Write};

/// Writes the conversation as labelled blocks, one output line per line of
/// message text. Bot blocks sit on the left; user blocks are pushed to the
/// right edge when the terminal width is known.
pub struct TranscriptRenderer {
    locale: Locale,
    width: Option<usize>,
    color: bool,
    printed: usize,
}

impl TranscriptRenderer {
    /// Colored output sized to the current terminal.
    pub fn for_terminal(locale: Locale) -> Self {
        let width = crossterm::terminal::size()
            .ok()
            .map(|(cols, _)| cols as usize)
            .filter(|cols| *cols > 0);
        Self {
            locale,
            width,
            color: true,
            printed: 0,
        }
    }

    /// Uncolored output, for pipes and tests.
    pub fn plain(locale: Locale, width: Option<usize>) -> Self {
        Self {
            locale,
            width,
            color: false,
            printed: 0,
        }
    }

    /// Label line followed by the message text split on `'\n'`.
    pub fn lines(&self, message: &Message) -> Vec<String> {
        let mut lines = vec![format!("{}:", self.locale.label(message.sender))];
        lines.extend(message.text.split('\n').map(str::to_string));

        if message.sender == Sender::User {
            if let Some(width) = self.width {
                let block = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                let pad = " ".repeat(width.saturating_sub(block));
                for line in &mut lines {
                    line.insert_str(0, &pad);
                }
            }
        }
        lines
    }

    pub fn write_message<W: Write>(&self, out: &mut W, message: &Message) -> io::Result<()> {
        for (i, line) in self.lines(message).into_iter().enumerate() {
            if !self.color {
                writeln!(out, "{}", line)?;
                continue;
            }
            let styled = match (message.sender, i) {
                (Sender::User, 0) => line.green().bold(),
                (Sender::User, _) => line.green(),
                (Sender::Bot, 0) => line.magenta().bold(),
                (Sender::Bot, _) => line.normal(),
            };
            writeln!(out, "{}", styled)?;
        }
        writeln!(out)
    }

    /// Writes the messages appended since the previous call.
    pub fn flush_new<W: Write>(&mut self, out: &mut W, history: &[Message]) -> io::Result<()> {
        let start = self.printed.min(history.len());
        for message in &history[start..] {
            self.write_message(out, message)?;
        }
        self.printed = history.len();
        out.flush()
    }

    /// Marks the start of a new session: writes a separator rule and forgets
    /// what was printed, so the next flush writes the new history in full.
    pub fn restart<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.printed = 0;
        let rule = "-".repeat(self.width.unwrap_or(40).min(80));
        if self.color {
            writeln!(out, "{}", rule.dimmed())
        } else {
            writeln!(out, "{}", rule)
        }
    }

    pub fn write_title<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let title = self.locale.title();
        if self.color {
            writeln!(out, "{}\n", title.cyan().bold())
        } else {
            writeln!(out, "{}\n", title)
        }
    }
}
