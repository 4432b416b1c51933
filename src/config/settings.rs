//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub bot: BotConfig,
    pub session: SessionConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    /// Token supplied directly (e.g. `CLEANBOT__BOT__TOKEN`); skips the credential file
    pub token: Option<String>,
    /// Path of the `token=...` credential file
    pub credentials_path: String,
}

/// How conversations map onto stored areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionScope {
    /// Every chat keeps its own area
    PerChat,
    /// One area shared by all chats
    Shared,
}

/// Session storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    pub scope: SessionScope,
    /// Idle time after which a session is forgotten; 0 keeps sessions forever.
    /// Unset means [`SessionConfig::DEFAULT_PER_CHAT_TTL`] per chat and no expiry when shared.
    pub ttl_seconds: Option<u64>,
    pub cleanup_interval_seconds: u64,
}

impl SessionConfig {
    pub const DEFAULT_PER_CHAT_TTL: u64 = 86_400;

    /// TTL in effect for the configured scope
    pub fn effective_ttl(&self) -> u64 {
        match (self.ttl_seconds, self.scope) {
            (Some(ttl), _) => ttl,
            (None, SessionScope::PerChat) => Self::DEFAULT_PER_CHAT_TTL,
            (None, SessionScope::Shared) => 0,
        }
    }
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    /// Directory with `<lang>.json` files overriding the built-in catalogs
    pub translations_dir: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily-rolling log file; stdout only when unset
    pub directory: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit TOML file, still honouring environment overrides
    pub fn from_path(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build(file: impl config::Source + Send + Sync + 'static) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("CLEANBOT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::CleaningBotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: None,
            credentials_path: "st.cf".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scope: SessionScope::PerChat,
            ttl_seconds: None,
            cleanup_interval_seconds: 600,
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "ru".to_string(),
            supported_languages: vec!["ru".to_string(), "en".to_string()],
            translations_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            json: false,
        }
    }
}
