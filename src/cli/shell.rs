//! Commands accepted at the interactive `>` prompt.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Start,
    Pause,
    Stop,
    Reload,
    /// Replace the description text (`desc` alone empties it).
    Describe(String),
    Clear,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  start          start or resume the timer
  pause          pause the timer
  stop           save elapsed time and description to a CSV file
  reload         open the last CSV file, or create a new one
  desc <text>    set the description of what you did
  clear          clear the description
  status         show timer state, elapsed time and description
  help           show this help
  quit | exit    leave the session";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> AppResult<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let cmd = match word.to_ascii_lowercase().as_str() {
        "start" => ShellCommand::Start,
        "pause" => ShellCommand::Pause,
        "stop" => ShellCommand::Stop,
        "reload" => ShellCommand::Reload,
        "desc" | "description" => ShellCommand::Describe(rest.to_string()),
        "clear" => ShellCommand::Clear,
        "status" => ShellCommand::Status,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(AppError::UnknownCommand(word.to_string())),
    };

    Ok(Some(cmd))
}
