//! Message handlers module
//!
//! Handles free-text messages, which the dialogue treats as area input

use std::sync::Arc;
use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::i18n::I18n;
use crate::models::BotEvent;
use crate::services::QuoteService;
use crate::utils::errors::Result;
use super::send_reply;

/// Whether a message is plain text rather than a (possibly unknown) command
pub fn is_free_text(msg: &Message) -> bool {
    msg.text().is_some_and(|text| !text.starts_with('/'))
}

/// Handle incoming text messages
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    quotes: Arc<QuoteService>,
    i18n: Arc<I18n>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = msg.chat.id.0, "Ignoring message without text");
        return Ok(());
    };

    let chat_id = msg.chat.id.0;
    debug!(chat_id = chat_id, "Processing text message");

    let reply = quotes.handle(chat_id, BotEvent::SubmitText(text.to_string())).await;
    send_reply(&bot, &msg, &reply, &i18n).await
}
