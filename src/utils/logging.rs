//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the cleaning bot.

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};
use crate::config::LoggingConfig;
use crate::utils::errors::{CleaningBotError, Result};

/// Initialize logging based on configuration
///
/// `RUST_LOG` takes precedence over the configured level. When a log
/// directory is configured, a daily-rolling file is written next to stdout;
/// the returned guard must stay alive for buffered lines to be flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| CleaningBotError::Config(format!("Invalid log filter: {}", e)))?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();
    if config.json {
        layers.push(fmt::layer().json().with_writer(std::io::stdout).boxed());
    } else {
        layers.push(fmt::layer().with_writer(std::io::stdout).boxed());
    }

    let guard = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "cleaning_bot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            layers.push(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .boxed(),
            );
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| CleaningBotError::Config(format!("Failed to install logger: {}", e)))?;

    info!(level = %config.level, file = ?config.directory, "Logging initialized");
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(chat_id: i64, action: &str, details: Option<&str>) {
    info!(
        chat_id = chat_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a computed price quote
pub fn log_quote(chat_id: i64, service: &str, area: f64, cost: f64) {
    info!(
        chat_id = chat_id,
        service = service,
        area = area,
        cost = cost,
        "Quote computed"
    );
}

/// Log free text that could not be used as an area
pub fn log_rejected_input(chat_id: i64, input: &str) {
    debug!(chat_id = chat_id, input = input, "Rejected area input");
}

/// Log a session store sweep
pub fn log_session_cleanup(removed: usize, remaining: usize) {
    if removed > 0 {
        info!(removed = removed, remaining = remaining, "Expired sessions removed");
    } else {
        debug!(remaining = remaining, "Session cleanup found nothing to remove");
    }
}
