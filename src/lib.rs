//! Cleaning cost Telegram bot
//!
//! A Telegram bot that asks for an area in square meters and quotes the
//! price of four cleaning services. The dialogue logic lives in
//! [`services::QuoteService`] and is independent of Telegram; the
//! [`handlers`] module adapts it to teloxide.

pub mod config;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CleaningBotError, Result};

// Re-export main components for easy access
pub use i18n::I18n;
pub use services::QuoteService;
pub use state::SessionStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
