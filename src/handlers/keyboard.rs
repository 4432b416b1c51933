//! Reply keyboard attached to every bot message

use teloxide::types::{KeyboardButton, KeyboardMarkup};
use super::commands::Command;

/// Menu rows, top to bottom
pub const MENU_LAYOUT: [&[Command]; 4] = [
    &[Command::Start, Command::InputArea],
    &[Command::GeneralCleaning, Command::OfficeCleaning],
    &[Command::CleaningAfterRenovation, Command::ExpressCleaning],
    &[Command::StopCalculation],
];

/// Build the fixed command keyboard
pub fn main_menu() -> KeyboardMarkup {
    let rows = MENU_LAYOUT.iter().map(|row| {
        row.iter()
            .map(|cmd| KeyboardButton::new(format!("/{}", cmd.name())))
            .collect::<Vec<_>>()
    });

    KeyboardMarkup::new(rows).resize_keyboard()
}
