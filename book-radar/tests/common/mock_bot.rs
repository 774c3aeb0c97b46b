//! Mock implementation of [`dbot_core::Bot`] that records every outbound call.
//!
//! Sent messages get increasing numeric ids starting at 100. Individual call kinds can be made to
//! fail to exercise fallback and log-and-continue paths.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, InlineKeyboard, ReplyMarkup, Result};

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SendText {
        chat_id: i64,
        message_id: String,
        text: String,
        markup: Option<ReplyMarkup>,
    },
    SendImage {
        chat_id: i64,
        message_id: String,
        image_url: String,
        caption: String,
        markup: Option<ReplyMarkup>,
    },
    EditMessage {
        chat_id: i64,
        message_id: String,
        text: String,
        keyboard: InlineKeyboard,
    },
    EditKeyboard {
        chat_id: i64,
        message_id: String,
        keyboard: InlineKeyboard,
    },
    DeleteMessage {
        chat_id: i64,
        message_id: String,
    },
    AnswerCallback {
        callback_id: String,
        text: Option<String>,
    },
}

pub struct MockBot {
    calls: Mutex<Vec<Call>>,
    next_id: AtomicI64,
    fail_images: AtomicBool,
    fail_edits: AtomicBool,
    fail_deletes: AtomicBool,
    fail_sends: AtomicBool,
}

impl MockBot {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(100),
            fail_images: AtomicBool::new(false),
            fail_edits: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            fail_sends: AtomicBool::new(false),
        }
    }

    pub fn fail_images(&self, fail: bool) {
        self.fail_images.store(fail, Ordering::SeqCst);
    }

    pub fn fail_edits(&self, fail: bool) {
        self.fail_edits.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Texts of all `send_text` calls in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::SendText { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    /// Callback payloads of every inline button on sent messages (text or image).
    pub fn sent_button_payloads(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::SendText { markup, .. } | Call::SendImage { markup, .. } => markup,
                _ => None,
            })
            .filter_map(|m| match m {
                ReplyMarkup::Inline(keyboard) => Some(keyboard),
                _ => None,
            })
            .flat_map(|k| {
                k.buttons()
                    .map(|b| b.callback_data.clone())
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Notices passed to `answer_callback`, in order.
    pub fn callback_answers(&self) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::AnswerCallback { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_message_id(&self) -> String {
        self.next_id.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_text(
        &self,
        chat: &Chat,
        text: &str,
        markup: Option<&ReplyMarkup>,
    ) -> Result<String> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("send failed".to_string()));
        }
        let message_id = self.next_message_id();
        self.record(Call::SendText {
            chat_id: chat.id,
            message_id: message_id.clone(),
            text: text.to_string(),
            markup: markup.cloned(),
        });
        Ok(message_id)
    }

    async fn send_image(
        &self,
        chat: &Chat,
        image_url: &str,
        caption: &str,
        markup: Option<&ReplyMarkup>,
    ) -> Result<String> {
        if self.fail_images.load(Ordering::SeqCst) {
            return Err(DbotError::Bot(format!("invalid image: {}", image_url)));
        }
        let message_id = self.next_message_id();
        self.record(Call::SendImage {
            chat_id: chat.id,
            message_id: message_id.clone(),
            image_url: image_url.to_string(),
            caption: caption.to_string(),
            markup: markup.cloned(),
        });
        Ok(message_id)
    }

    async fn edit_message(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("message to edit not found".to_string()));
        }
        self.record(Call::EditMessage {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
            keyboard: keyboard.clone(),
        });
        Ok(())
    }

    async fn edit_keyboard(
        &self,
        chat: &Chat,
        message_id: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        if self.fail_edits.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("message to edit not found".to_string()));
        }
        self.record(Call::EditKeyboard {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            keyboard: keyboard.clone(),
        });
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("message to delete not found".to_string()));
        }
        self.record(Call::DeleteMessage {
            chat_id: chat.id,
            message_id: message_id.to_string(),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        self.record(Call::AnswerCallback {
            callback_id: callback_id.to_string(),
            text: text.map(str::to_string),
        });
        Ok(())
    }
}
