//! Bot abstraction for sending, editing and deleting messages.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide, tests substitute a recording mock.

use crate::error::{DbotError, Result};
use crate::types::{Chat, InlineKeyboard, ReplyMarkup};
use async_trait::async_trait;

/// Outbound transport. Message ids are transport-specific strings (Telegram: numeric).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message and returns its id.
    async fn send_text(
        &self,
        chat: &Chat,
        text: &str,
        markup: Option<&ReplyMarkup>,
    ) -> Result<String>;

    /// Sends an image by URL with a caption and returns the message id. Fails when the image
    /// reference is invalid or unreachable; callers fall back to [`Bot::send_text`].
    async fn send_image(
        &self,
        chat: &Chat,
        image_url: &str,
        caption: &str,
        markup: Option<&ReplyMarkup>,
    ) -> Result<String>;

    /// Replaces text and inline keyboard of an already-sent message.
    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()>;

    /// Replaces only the inline keyboard of an already-sent message.
    async fn edit_keyboard(
        &self,
        chat: &Chat,
        message_id: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()>;

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()>;

    /// Acknowledges a button press, optionally showing a short notice to the user.
    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit and delete.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::InvalidMessageId(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(matches!(
            parse_message_id("12.3"),
            Err(DbotError::InvalidMessageId(id)) if id == "12.3"
        ));
    }
}
