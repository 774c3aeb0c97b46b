//! Shared helpers for book-radar integration tests: recording bot, scripted provider, event builders.
#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_provider;

use std::sync::Arc;

use book_radar::{Book, BookRadar, RadarConfig};
use chrono::Utc;
use dbot_core::{CallbackQuery, Chat, Event, Message, MessageDirection, User};

use mock_bot::MockBot;
use mock_provider::MockProvider;

pub const USER_ID: i64 = 1001;

pub fn user(id: i64) -> User {
    User {
        id,
        username: Some(format!("reader_{}", id)),
        first_name: Some("Reader".to_string()),
        last_name: None,
    }
}

pub fn chat(id: i64) -> Chat {
    Chat {
        id,
        chat_type: "Private".to_string(),
    }
}

pub fn text_event(user_id: i64, text: &str) -> Event {
    Event::Message(Message {
        id: "1".to_string(),
        user: user(user_id),
        chat: chat(user_id + 1000),
        content: text.to_string(),
        message_type: "text".to_string(),
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    })
}

pub fn callback_event(user_id: i64, data: &str, message_id: Option<&str>) -> Event {
    Event::Callback(CallbackQuery {
        id: format!("cb_{}", data),
        user: user(user_id),
        chat: chat(user_id + 1000),
        message_id: message_id.map(str::to_string),
        data: data.to_string(),
        created_at: Utc::now(),
    })
}

pub fn book(id: &str, title: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: "Frank Herbert".to_string(),
        description: format!("About {}", title),
        cover_url: None,
        price: Some("499 ₽".to_string()),
        source_url: format!("https://example.com/{}", id),
    }
}

/// BookRadar wired to a fresh mock bot and provider.
pub fn radar() -> (BookRadar, Arc<MockBot>, Arc<MockProvider>) {
    let bot = Arc::new(MockBot::new());
    let provider = Arc::new(MockProvider::new());
    let radar = BookRadar::new(bot.clone(), provider.clone(), &RadarConfig::default());
    (radar, bot, provider)
}
