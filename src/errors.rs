//! Unified application error type.
//! Core, export, config and ui modules all return AppError so that the
//! interactive session can decide in one place what to show the user.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Validation / parsing
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid duration format: {0}")]
    InvalidDuration(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Platform integration
    // ---------------------------
    #[error("Unable to open '{path}': {reason}")]
    Opener { path: String, reason: String },

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors the user can fix by retrying the same action.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Other(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
