//! Utility modules
//!
//! This module contains common utilities used throughout the application,
//! including error handling, logging setup, and number formatting.

pub mod errors;
pub mod format;
pub mod logging;

pub use errors::{CleaningBotError, Result};
