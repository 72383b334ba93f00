//! Line-oriented terminal front end: reads commands and answers prompts
//! from the same input stream.

use crate::core::UserPrompt;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};

/// Typing this at a file prompt cancels the action.
pub const CANCEL_INPUT: &str = "-";

pub struct Terminal<R: BufRead> {
    input: R,
}

impl<R: BufRead> Terminal<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Next line without its terminator, `None` at end of input.
    pub fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        print!("{} ", question);
        io::stdout().flush().ok();
        self.read_line()
    }

    /// Empty answer takes `suggested`, `-` or end of input cancels.
    fn ask_path(&mut self, question: &str, suggested: &str) -> AppResult<Option<String>> {
        let prompt = format!(
            "{} [{}] ('{}' to cancel):",
            question, suggested, CANCEL_INPUT
        );
        let answer = match self.ask(&prompt)? {
            Some(a) => a.trim().to_string(),
            None => return Ok(None),
        };

        if answer == CANCEL_INPUT {
            return Ok(None);
        }
        if answer.is_empty() {
            return Ok(Some(suggested.to_string()));
        }
        Ok(Some(answer))
    }
}

impl<R: BufRead> UserPrompt for Terminal<R> {
    fn save_path(&mut self, suggested: &str) -> AppResult<Option<String>> {
        self.ask_path("Save to CSV file", suggested)
    }

    fn new_file_path(&mut self, suggested: &str) -> AppResult<Option<String>> {
        self.ask_path("New CSV file", suggested)
    }

    fn confirm(&mut self, question: &str) -> AppResult<bool> {
        warning(question);
        let answer = self.ask("Overwrite? [y/N]:")?.unwrap_or_default();
        let ans = answer.trim().to_ascii_lowercase();
        Ok(ans == "y" || ans == "yes")
    }

    fn notify(&mut self, message: &str) {
        info(message);
    }
}
