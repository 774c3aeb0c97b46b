//! # dbot-telegram
//!
//! Telegram bot framework layer: adapters, [`dbot_core::Bot`] implementation, config, dispatcher runner.
//! Handles only Telegram connectivity and handler-chain execution; no bot-specific state.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{inline_markup, reply_markup, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{build_bot, run_dispatcher};
