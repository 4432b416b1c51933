//! Error handling for the cleaning bot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the cleaning bot application
#[derive(Error, Debug)]
pub enum CleaningBotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while loading the bot token from the credential file
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("credential file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("credential file {} could not be read: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credential file {} is malformed at line {line}: expected key=value", path.display())]
    Malformed { path: PathBuf, line: usize },

    #[error("credential file {} has no non-empty `{key}` entry", path.display())]
    MissingKey { path: PathBuf, key: String },
}

/// Free-text input that is not a usable area value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a valid area: {input:?}")]
pub struct AreaParseError {
    pub input: String,
}

/// Result type alias for cleaning bot operations
pub type Result<T> = std::result::Result<T, CleaningBotError>;

impl CleaningBotError {
    /// Whether the bot can keep serving updates after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            CleaningBotError::Config(_) => false,
            CleaningBotError::ConfigSource(_) => false,
            CleaningBotError::Credential(_) => false,
            CleaningBotError::Telegram(_) => true,
            CleaningBotError::Serialization(_) => false,
            CleaningBotError::Io(_) => true,
        }
    }
}
