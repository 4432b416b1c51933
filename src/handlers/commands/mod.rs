//! Command handlers module
//!
//! This module contains the bot command set and its dispatcher.

use std::sync::Arc;
use teloxide::{Bot, types::Message, utils::command::BotCommands};
use tracing::debug;
use crate::i18n::I18n;
use crate::models::{BotEvent, ServiceType};
use crate::services::QuoteService;
use crate::utils::errors::Result;
use super::send_reply;

/// All available bot commands
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case", description = "Cleaning cost calculator commands:")]
pub enum Command {
    #[command(description = "Start the bot and show the menu")]
    Start,
    #[command(description = "Enter the area to clean")]
    InputArea,
    #[command(description = "Quote general cleaning")]
    GeneralCleaning,
    #[command(description = "Quote office cleaning")]
    OfficeCleaning,
    #[command(description = "Quote cleaning after renovation")]
    CleaningAfterRenovation,
    #[command(description = "Quote express cleaning")]
    ExpressCleaning,
    #[command(description = "Reset the area and return to the menu")]
    StopCalculation,
}

impl Command {
    /// Command name without the leading slash
    pub const fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::InputArea => "input_area",
            Command::StopCalculation => "stop_calculation",
            Command::GeneralCleaning => ServiceType::General.command(),
            Command::OfficeCleaning => ServiceType::Office.command(),
            Command::CleaningAfterRenovation => ServiceType::AfterRenovation.command(),
            Command::ExpressCleaning => ServiceType::Express.command(),
        }
    }
}

impl From<Command> for BotEvent {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Start => BotEvent::Start,
            Command::InputArea => BotEvent::RequestAreaInput,
            Command::GeneralCleaning => BotEvent::ComputeCost(ServiceType::General),
            Command::OfficeCleaning => BotEvent::ComputeCost(ServiceType::Office),
            Command::CleaningAfterRenovation => BotEvent::ComputeCost(ServiceType::AfterRenovation),
            Command::ExpressCleaning => BotEvent::ComputeCost(ServiceType::Express),
            Command::StopCalculation => BotEvent::StopAndReset,
        }
    }
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    quotes: Arc<QuoteService>,
    i18n: Arc<I18n>,
) -> Result<()> {
    let chat_id = msg.chat.id.0;
    debug!(chat_id = chat_id, command = cmd.name(), "Processing command");

    let reply = quotes.handle(chat_id, cmd.into()).await;
    send_reply(&bot, &msg, &reply, &i18n).await
}
