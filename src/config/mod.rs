//! Configuration management module
//!
//! This module handles loading and validation of application configuration
//! from TOML files and environment variables, plus the bot credential file.

pub mod credentials;
pub mod settings;
pub mod validation;

pub use settings::{Settings, BotConfig, SessionConfig, SessionScope, I18nConfig, LoggingConfig};
