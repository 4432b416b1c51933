//! Data models module
//!
//! This module contains the domain types of the quote dialogue

pub mod event;
pub mod service;
pub mod session;

// Re-export commonly used models
pub use event::{BotEvent, Reply, parse_area};
pub use service::ServiceType;
pub use session::SessionArea;
