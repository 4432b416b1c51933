//! Services module
//!
//! This module contains business logic services

pub mod quote;

pub use quote::QuoteService;
