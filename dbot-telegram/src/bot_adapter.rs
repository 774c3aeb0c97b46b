//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{
    parse_message_id, Bot as CoreBot, Chat, DbotError, InlineKeyboard, ReplyMarkup, Result,
};
use teloxide::prelude::*;
use teloxide::types::{
    CallbackQueryId, ChatId, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, InputFile,
    KeyboardButton, KeyboardMarkup, KeyboardRemove, MessageId, ReplyMarkup as TgReplyMarkup,
};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: impl std::fmt::Display) -> DbotError {
    DbotError::Bot(e.to_string())
}

/// Converts a core inline keyboard to Telegram's inline markup.
pub fn inline_markup(keyboard: &InlineKeyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.text.clone(), b.callback_data.clone()))
            .collect::<Vec<_>>()
    }))
}

/// Converts any core markup to Telegram's reply markup. The menu keyboard is resized to fit its labels.
pub fn reply_markup(markup: &ReplyMarkup) -> TgReplyMarkup {
    match markup {
        ReplyMarkup::Inline(keyboard) => inline_markup(keyboard).into(),
        ReplyMarkup::Menu(rows) => KeyboardMarkup::new(rows.iter().map(|row| {
            row.iter()
                .map(|label| KeyboardButton::new(label.clone()))
                .collect::<Vec<_>>()
        }))
        .resize_keyboard()
        .into(),
        ReplyMarkup::RemoveMenu => KeyboardRemove::new().into(),
        ReplyMarkup::ForceReply => ForceReply::new().selective().into(),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_text(
        &self,
        chat: &Chat,
        text: &str,
        markup: Option<&ReplyMarkup>,
    ) -> Result<String> {
        let mut request = self.bot.send_message(ChatId(chat.id), text.to_string());
        if let Some(markup) = markup {
            request = request.reply_markup(reply_markup(markup));
        }
        let sent = request.await.map_err(bot_error)?;
        Ok(sent.id.to_string())
    }

    async fn send_image(
        &self,
        chat: &Chat,
        image_url: &str,
        caption: &str,
        markup: Option<&ReplyMarkup>,
    ) -> Result<String> {
        let url = reqwest::Url::parse(image_url)
            .map_err(|e| DbotError::Bot(format!("Invalid image url {}: {}", image_url, e)))?;
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), InputFile::url(url))
            .caption(caption.to_string());
        if let Some(markup) = markup {
            request = request.reply_markup(reply_markup(markup));
        }
        let sent = request.await.map_err(bot_error)?;
        Ok(sent.id.to_string())
    }

    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text.to_string())
            .reply_markup(inline_markup(keyboard))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn edit_keyboard(
        &self,
        chat: &Chat,
        message_id: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_reply_markup(ChatId(chat.id), MessageId(id))
            .reply_markup(inline_markup(keyboard))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .delete_message(ChatId(chat.id), MessageId(id))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let mut request = self
            .bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()));
        if let Some(text) = text {
            request = request.text(text.to_string());
        }
        request.await.map_err(bot_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbot_core::Button;
    use teloxide::types::InlineKeyboardButtonKind;

    /// **Test: inline_markup keeps row layout and maps each button to callback data.**
    #[test]
    fn test_inline_markup_keeps_rows() {
        let keyboard = InlineKeyboard::new()
            .row(vec![
                Button::callback("Fantasy", "genre_Fantasy"),
                Button::callback("Horror", "genre_Horror"),
            ])
            .row(vec![Button::callback("Done", "genres_done")]);

        let markup = inline_markup(&keyboard);

        assert_eq!(markup.inline_keyboard.len(), 2);
        assert_eq!(markup.inline_keyboard[0].len(), 2);
        assert_eq!(markup.inline_keyboard[0][1].text, "Horror");
        assert_eq!(
            markup.inline_keyboard[1][0].kind,
            InlineKeyboardButtonKind::CallbackData("genres_done".to_string())
        );
    }

    /// **Test: reply_markup maps each core markup variant to the matching Telegram markup.**
    #[test]
    fn test_reply_markup_variants() {
        let menu = ReplyMarkup::Menu(vec![vec!["New releases".to_string()]]);
        assert!(matches!(reply_markup(&menu), TgReplyMarkup::Keyboard(_)));
        assert!(matches!(
            reply_markup(&ReplyMarkup::RemoveMenu),
            TgReplyMarkup::KeyboardRemove(_)
        ));
        assert!(matches!(
            reply_markup(&ReplyMarkup::ForceReply),
            TgReplyMarkup::ForceReply(_)
        ));
        assert!(matches!(
            reply_markup(&ReplyMarkup::Inline(InlineKeyboard::new())),
            TgReplyMarkup::InlineKeyboard(_)
        ));
    }
}
