//! Internationalization module
//!
//! This module renders bot replies in the user's language. Russian and
//! English catalogs are built in; a directory of JSON files may override them.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
