//! Test helpers module
//!
//! This module provides utilities and helpers for testing the cleaning bot:
//! a mock Telegram API, Telegram object builders and a unified test context.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
