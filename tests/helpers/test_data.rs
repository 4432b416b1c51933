//! Test data helpers for creating test objects
//!
//! This module provides helper functions for creating test Telegram messages,
//! users and chats.

use serde_json::json;
use teloxide::types::{
    Chat, ChatId, ChatKind, ChatPrivate, MediaKind, MediaText, Message, MessageCommon,
    MessageId, MessageKind, Update, User, UserId,
};
use chrono::Utc;

/// Helper function to create a test Telegram user
pub fn create_test_user(user_id: i64, first_name: &str, language_code: Option<&str>) -> User {
    User {
        id: UserId(user_id as u64),
        is_bot: false,
        first_name: first_name.to_string(),
        last_name: None,
        username: Some("testuser".to_string()),
        language_code: language_code.map(|s| s.to_string()),
        is_premium: false,
        added_to_attachment_menu: false,
    }
}

/// Helper function to create a test private chat
pub fn create_test_private_chat(chat_id: i64, first_name: &str) -> Chat {
    Chat {
        id: ChatId(chat_id),
        kind: ChatKind::Private(ChatPrivate {
            username: Some("testuser".to_string()),
            first_name: Some(first_name.to_string()),
            last_name: None,
        }),
    }
}

/// Helper function to create a private text message from a user
pub fn create_test_message(chat_id: i64, text: &str, language_code: Option<&str>) -> Message {
    let user = create_test_user(chat_id, "TestUser", language_code);
    let chat = create_test_private_chat(chat_id, "TestUser");

    Message {
        id: MessageId(1),
        thread_id: None,
        from: Some(user),
        sender_chat: None,
        sender_business_bot: None,
        date: Utc::now(),
        chat,
        is_topic_message: false,
        via_bot: None,
        kind: MessageKind::Common(MessageCommon {
            author_signature: None,
            forward_origin: None,
            external_reply: None,
            quote: None,
            reply_to_story: None,
            edit_date: None,
            media_kind: MediaKind::Text(MediaText {
                text: text.to_string(),
                entities: vec![],
                link_preview_options: None,
            }),
            reply_markup: None,
            effect_id: None,
            reply_to_message: None,
            sender_boost_count: None,
            is_automatic_forward: false,
            has_protected_content: false,
            is_from_offline: false,
            business_connection_id: None,
        }),
    }
}

/// Helper function to create a message with the default (Russian) user language
pub fn create_simple_test_message(chat_id: i64, text: &str) -> Message {
    create_test_message(chat_id, text, Some("ru"))
}

/// Helper function to create an update the way Telegram delivers a private text message
pub fn create_test_update(chat_id: i64, text: &str) -> Update {
    serde_json::from_str(&json!({
        "update_id": 1,
        "message": {
            "message_id": 1,
            "date": Utc::now().timestamp(),
            "chat": {
                "id": chat_id,
                "type": "private",
                "first_name": "TestUser",
                "username": "testuser"
            },
            "from": {
                "id": chat_id,
                "is_bot": false,
                "first_name": "TestUser",
                "username": "testuser",
                "language_code": "ru"
            },
            "text": text
        }
    })
    .to_string())
    .expect("update JSON matches the Bot API")
}
