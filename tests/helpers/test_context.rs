//! Test context for unified test setup
//!
//! This module provides a unified test context that wires the real handlers
//! to a mock Telegram API.

use std::ops::ControlFlow;
use std::sync::{Arc, Once};
use serde_json::Value;
use teloxide::prelude::*;
use cleaning_bot::{
    config::{SessionScope, Settings},
    handlers::{self, Command, HandlerResult},
    I18n, QuoteService, Result, SessionStore,
};

use super::{
    telegram_mock::{test_bot_token, TelegramMockServer},
    test_data::{create_test_message, create_test_update},
};

static INIT: Once = Once::new();

/// Initialize test logging once
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Configuration for test context setup
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub scope: SessionScope,
    pub setup_default_mocks: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            scope: SessionScope::PerChat,
            setup_default_mocks: true,
        }
    }
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub telegram_mock: TelegramMockServer,
    pub settings: Settings,
    pub bot: Bot,
    pub quotes: Arc<QuoteService>,
    pub i18n: Arc<I18n>,
}

impl TestContext {
    /// Create a new test context with all components initialized
    pub async fn new() -> Self {
        Self::new_with_config(TestConfig::default()).await
    }

    /// Create a new test context with custom configuration
    pub async fn new_with_config(config: TestConfig) -> Self {
        init_test_env();

        let telegram_mock = TelegramMockServer::new().await;
        if config.setup_default_mocks {
            telegram_mock.setup_default_mocks().await;
        }

        let mut settings = Settings::default();
        settings.bot.token = Some(test_bot_token());
        settings.session.scope = config.scope;

        let bot = Bot::new(test_bot_token())
            .set_api_url(telegram_mock.api_url().parse().expect("mock server URL"));
        let quotes = Arc::new(QuoteService::new(SessionStore::new(settings.session.clone())));
        let i18n = Arc::new(I18n::new(&settings.i18n).expect("built-in translations"));

        Self {
            telegram_mock,
            settings,
            bot,
            quotes,
            i18n,
        }
    }

    /// Run a command through the command handler as a Russian-speaking user
    pub async fn command(&self, chat_id: i64, cmd: Command) -> Result<()> {
        self.command_as(chat_id, cmd, Some("ru")).await
    }

    pub async fn command_as(&self, chat_id: i64, cmd: Command, lang: Option<&str>) -> Result<()> {
        let msg = create_test_message(chat_id, &format!("/{}", cmd.name()), lang);
        handlers::handle_command(self.bot.clone(), msg, cmd, self.quotes.clone(), self.i18n.clone()).await
    }

    /// Run free text through the message handler as a Russian-speaking user
    pub async fn text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.text_as(chat_id, text, Some("ru")).await
    }

    pub async fn text_as(&self, chat_id: i64, text: &str, lang: Option<&str>) -> Result<()> {
        let msg = create_test_message(chat_id, text, lang);
        handlers::handle_message(self.bot.clone(), msg, self.quotes.clone(), self.i18n.clone()).await
    }

    /// Feed a text message through the full update schema, as the dispatcher would
    ///
    /// `None` means no branch accepted the update.
    pub async fn dispatch(&self, chat_id: i64, text: &str) -> Option<HandlerResult> {
        let me = self.bot.get_me().await.expect("getMe is mocked");
        let update = create_test_update(chat_id, text);
        let deps = dptree::deps![update, self.bot.clone(), me, self.quotes.clone(), self.i18n.clone()];

        match handlers::schema().dispatch(deps).await {
            ControlFlow::Break(result) => Some(result),
            ControlFlow::Continue(_) => None,
        }
    }

    /// Every sendMessage body the bot produced
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.telegram_mock.requests_to("sendMessage").await
    }

    /// Text of the most recent sendMessage
    pub async fn last_text(&self) -> String {
        self.sent_messages()
            .await
            .last()
            .and_then(|body| body["text"].as_str().map(str::to_string))
            .expect("at least one message was sent")
    }

    /// Verify sendMessage calls
    pub async fn verify_messages_sent(&self, expected_calls: usize) {
        self.telegram_mock.verify_endpoint_called("sendMessage", expected_calls).await;
    }
}
