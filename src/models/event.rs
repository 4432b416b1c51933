//! Inbound events and outbound replies of the quote dialogue
//!
//! These types are transport-neutral: the Telegram handlers translate
//! messages into [`BotEvent`]s and render [`Reply`]s back into text.

use std::borrow::Cow;
use crate::utils::errors::AreaParseError;
use super::ServiceType;

/// One normalized inbound user action
#[derive(Debug, Clone, PartialEq)]
pub enum BotEvent {
    /// Greeting and command menu
    Start,
    /// Ask the user to type an area
    RequestAreaInput,
    /// Free text, interpreted as a candidate area
    SubmitText(String),
    /// Price the stored area for a service
    ComputeCost(ServiceType),
    /// Forget the stored area
    StopAndReset,
}

impl BotEvent {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            BotEvent::Start => "start",
            BotEvent::RequestAreaInput => "request_area_input",
            BotEvent::SubmitText(_) => "submit_text",
            BotEvent::ComputeCost(_) => "compute_cost",
            BotEvent::StopAndReset => "stop_and_reset",
        }
    }
}

/// Exactly one reply is produced per event
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Welcome,
    AreaPrompt,
    AreaAccepted { area: f64 },
    InvalidNumber,
    AreaRequired,
    Cost { service: ServiceType, area: f64, cost: f64 },
    Stopped,
}

/// Parse free text as an area in square meters.
///
/// Surrounding whitespace is ignored and `_` may separate digits (`1_000`).
/// Zero and negative numbers are accepted; infinities, NaN and areas too
/// large to price are not.
pub fn parse_area(text: &str) -> Result<f64, AreaParseError> {
    let reject = || AreaParseError { input: text.to_string() };

    let number = strip_digit_separators(text.trim()).ok_or_else(reject)?;
    let value = number.parse::<f64>().map_err(|_| reject())?;

    if !value.is_finite() || ServiceType::ALL.iter().any(|service| !service.cost(value).is_finite()) {
        return Err(reject());
    }

    Ok(value)
}

/// Drop `_` between two ASCII digits; `None` if an underscore appears anywhere else
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }

    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c == '_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        stripped.push(c);
    }

    Some(Cow::Owned(stripped))
}
