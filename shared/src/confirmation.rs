use crate::types::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::io::IsTerminal;

/// Yes/no prompt shared by the interactive commands.
///
/// Falls back to `default_yes` without prompting when stdin is not a terminal,
/// so piped sessions never block on a question nobody can answer.
pub fn ask_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    if !std::io::stdin().is_terminal() {
        return Ok(default_yes);
    }
    let choice = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default_yes)
        .show_default(true)
        .interact()?;
    Ok(choice)
}
