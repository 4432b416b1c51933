//! Bot handlers module
//!
//! This module contains the Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers for free-text input
//! - The reply keyboard shared by every answer
//! - The dptree schema routing updates to them

pub mod commands;
pub mod keyboard;
pub mod messages;

use std::sync::Arc;
use teloxide::{Bot, dispatching::UpdateHandler, prelude::*, types::{Message, Update}};
use tracing::{debug, error, warn};
use crate::i18n::I18n;
use crate::models::Reply;
use crate::services::QuoteService;
use crate::utils::errors::{CleaningBotError, Result};

// Re-export commonly used handler functions
pub use commands::{Command, handle_command};
pub use keyboard::main_menu;
pub use messages::{handle_message, is_free_text};

/// Error type of the dispatcher endpoints
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// Create the main update handler
///
/// Commands the bot knows go to [`handle_command`], text that does not start
/// with `/` goes to [`handle_message`]. Everything else falls through, so
/// unknown commands, commands addressed to another bot and commands with
/// arguments get no reply. Needs `Bot`, `Me`, `Arc<QuoteService>` and
/// `Arc<I18n>` in the dependency map.
pub fn schema() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_commands),
        )
        .branch(
            dptree::filter(|msg: Message| is_free_text(&msg))
                .endpoint(handle_messages),
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    quotes: Arc<QuoteService>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    if let Err(e) = handle_command(bot, msg, cmd, quotes, i18n).await {
        report_handler_error(&e, "Error handling command");
    }

    Ok(())
}

/// Handle free-text messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    quotes: Arc<QuoteService>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    if let Err(e) = handle_message(bot, msg, quotes, i18n).await {
        report_handler_error(&e, "Error handling message");
    }

    Ok(())
}

/// The single log line for a failed update
fn report_handler_error(e: &CleaningBotError, context: &str) {
    if e.is_recoverable() {
        warn!(error = %e, "{}", context);
    } else {
        error!(error = %e, "{}", context);
    }
}

/// Render a reply in the sender's language and send it with the menu keyboard
pub(crate) async fn send_reply(bot: &Bot, msg: &Message, reply: &Reply, i18n: &I18n) -> Result<()> {
    let lang = i18n.detect_user_language(
        msg.from.as_ref().and_then(|user| user.language_code.as_deref()),
    );
    let text = i18n.render(reply, &lang);

    debug!(chat_id = msg.chat.id.0, lang = %lang, "Sending reply");
    bot.send_message(msg.chat.id, text)
        .reply_markup(main_menu())
        .await?;

    Ok(())
}
