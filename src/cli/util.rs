//! Utility functions for the CLI.

use super::Choice;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

/// Expands a leading `~` to the user's home directory.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

pub fn print_menu() {
    println!("Choose a task:");
    for choice in Choice::all() {
        println!("{choice}");
    }
}

/// Reads one line of input. Ctrl-C / Ctrl-D count as an empty answer, which the menu
/// then rejects like any other invalid input.
///
/// # Errors
/// Returns an error message if the terminal cannot be read.
pub fn prompt_choice() -> Result<String, String> {
    let mut rl = DefaultEditor::new().map_err(|e| format!("Error creating editor: {e}"))?;
    match rl.readline("Your choice: ") {
        Ok(line) => Ok(line),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(String::new()),
        Err(e) => Err(format!("Readline error: {e}")),
    }
}
