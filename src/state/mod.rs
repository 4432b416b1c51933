//! State management module
//!
//! This module holds the per-conversation session state

pub mod storage;

pub use storage::SessionStore;
