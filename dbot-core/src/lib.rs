//! # dbot-core
//!
//! Core types and traits for the Telegram bot: [`Bot`], [`Handler`], inbound [`Event`]s, keyboards,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and book-radar.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Button, CallbackQuery, Chat, Event, Handler, HandlerResponse, InlineKeyboard, Message,
    MessageDirection, ReplyMarkup, ToCoreCallback, ToCoreMessage, ToCoreUser, User,
};
