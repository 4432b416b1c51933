//! Quote service
//!
//! Maps each inbound [`BotEvent`] to exactly one [`Reply`], reading and
//! updating the conversation's stored area along the way.

use tracing::{debug, instrument};
use crate::models::{parse_area, BotEvent, Reply, ServiceType};
use crate::state::SessionStore;
use crate::utils::logging;

/// Command dispatcher for the price quote dialogue
#[derive(Debug, Clone)]
pub struct QuoteService {
    sessions: SessionStore,
}

impl QuoteService {
    /// Create a new QuoteService instance
    pub fn new(sessions: SessionStore) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one event for a conversation
    #[instrument(skip(self, event), fields(event = event.kind()))]
    pub async fn handle(&self, chat_id: i64, event: BotEvent) -> Reply {
        let reply = match event {
            BotEvent::Start => self.start(),
            BotEvent::RequestAreaInput => self.request_area_input(),
            BotEvent::SubmitText(text) => self.submit_text(chat_id, &text).await,
            BotEvent::ComputeCost(service) => self.compute_cost(chat_id, service).await,
            BotEvent::StopAndReset => self.stop_and_reset(chat_id).await,
        };

        debug!(chat_id = chat_id, reply = ?reply, "Event handled");
        reply
    }

    pub fn start(&self) -> Reply {
        Reply::Welcome
    }

    pub fn request_area_input(&self) -> Reply {
        Reply::AreaPrompt
    }

    /// Store the text as the new area if it is a number
    pub async fn submit_text(&self, chat_id: i64, text: &str) -> Reply {
        match parse_area(text) {
            Ok(area) => {
                self.sessions.set_area(chat_id, area).await;
                logging::log_user_action(chat_id, "area_set", Some(text.trim()));
                Reply::AreaAccepted { area }
            }
            Err(e) => {
                logging::log_rejected_input(chat_id, &e.input);
                Reply::InvalidNumber
            }
        }
    }

    /// Price the stored area; requires an area greater than zero
    pub async fn compute_cost(&self, chat_id: i64, service: ServiceType) -> Reply {
        let area = self.sessions.area(chat_id).await;
        if area <= 0.0 {
            debug!(chat_id = chat_id, service = %service, "Quote requested without an area");
            return Reply::AreaRequired;
        }

        let cost = service.cost(area);
        logging::log_quote(chat_id, service.key(), area, cost);
        Reply::Cost { service, area, cost }
    }

    pub async fn stop_and_reset(&self, chat_id: i64) -> Reply {
        self.sessions.reset(chat_id).await;
        logging::log_user_action(chat_id, "stop_calculation", None);
        Reply::Stopped
    }
}

impl Default for QuoteService {
    fn default() -> Self {
        Self::new(SessionStore::default())
    }
}
