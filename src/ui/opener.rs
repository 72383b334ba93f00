//! Platform "open this file" action.

use crate::config::Config;
use crate::core::FileOpener;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Runs an external command with the file path as last argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
}

impl Default for SystemOpener {
    fn default() -> Self {
        if cfg!(target_os = "windows") {
            // `start` treats the first quoted argument as a window title
            Self::new("cmd", ["/C", "start", ""])
        } else if cfg!(target_os = "macos") {
            Self::new("open", [] as [&str; 0])
        } else {
            Self::new("xdg-open", [] as [&str; 0])
        }
    }
}

impl SystemOpener {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a configured command line on whitespace, e.g. `"code --wait"`.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    pub fn from_config(cfg: &Config) -> Self {
        cfg.opener
            .as_deref()
            .and_then(Self::from_command_line)
            .unwrap_or_default()
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl FileOpener for SystemOpener {
    fn open(&self, path: &Path) -> AppResult<()> {
        debug!(program = %self.program, path = %path.display(), "opening record file");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| AppError::Opener {
                path: path.display().to_string(),
                reason: format!("cannot run '{}': {}", self.program, e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(AppError::Opener {
                path: path.display().to_string(),
                reason: format!("'{}' exited with {}", self.program, status),
            })
        }
    }
}
