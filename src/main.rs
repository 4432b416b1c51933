//! Cleaning cost Telegram bot
//!
//! Main application entry point

use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use cleaning_bot::{
    config::{credentials, Settings},
    handlers::{self, Command},
    utils::logging,
    I18n, QuoteService, SessionStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    settings.validate().context("invalid settings")?;

    // Initialize logging; the guard flushes the file writer on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", cleaning_bot::info());

    let token = match credentials::resolve_token(&settings.bot).await {
        Ok(token) => token,
        Err(e) => {
            error!(error = %e, "Cannot start without a bot token");
            return Err(e).context("failed to load bot credentials");
        }
    };

    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n)?;
    i18n.load_translations().await?;

    let sessions = SessionStore::new(settings.session.clone());
    spawn_session_cleanup(
        sessions.clone(),
        settings.session.effective_ttl(),
        settings.session.cleanup_interval_seconds,
    );

    let quotes = Arc::new(QuoteService::new(sessions));
    let i18n = Arc::new(i18n);

    let bot = Bot::new(token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let mut dispatcher = Dispatcher::builder(bot, handlers::schema())
        .dependencies(dptree::deps![quotes, i18n])
        .default_handler(|upd| async move {
            tracing::debug!(update_id = ?upd.id, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build();

    info!(scope = ?settings.session.scope, "Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("Bot has been shut down.");
    Ok(())
}

/// Periodically drop sessions idle for longer than the TTL
fn spawn_session_cleanup(sessions: SessionStore, ttl_seconds: u64, interval_seconds: u64) {
    if ttl_seconds == 0 {
        return;
    }

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));
        loop {
            interval.tick().await;
            sessions.cleanup_expired().await;
        }
    });
}
