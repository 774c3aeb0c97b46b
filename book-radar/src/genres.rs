//! Live genre picker: one checklist message per user, edited in place on every toggle.

use std::sync::Arc;

use dbot_core::{Bot, Chat, ReplyMarkup};
use tracing::{error, info, instrument};

use crate::error::{Result, RoutingError};
use crate::profile::{is_known_genre, UserProfile};
use crate::render;

pub struct GenreSelectionController {
    bot: Arc<dyn Bot>,
}

impl GenreSelectionController {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// Sends a new checklist and tracks it. A previously tracked checklist is not closed; its
    /// reference is overwritten. When sending fails the tracked reference is left untouched.
    #[instrument(skip(self, profile, chat), fields(chat_id = chat.id))]
    pub async fn open(&self, profile: &mut UserProfile, chat: &Chat) -> Result<String> {
        let markup = ReplyMarkup::Inline(render::genres_keyboard(profile));
        let message_id = self
            .bot
            .send_text(chat, render::MSG_CHOOSE_GENRES, Some(&markup))
            .await?;

        if let Some(previous) = profile.pending_ui_message_ref.replace(message_id.clone()) {
            info!(previous = %previous, current = %message_id, "Genre picker reopened; previous one is no longer tracked");
        }
        Ok(message_id)
    }

    /// Flips `label` and re-renders the tracked checklist in place. Returns whether the label is
    /// selected afterwards. Labels outside the catalog are rejected without mutation; a failed
    /// edit is logged and does not undo the toggle.
    #[instrument(skip(self, profile, chat), fields(chat_id = chat.id))]
    pub async fn toggle(&self, profile: &mut UserProfile, chat: &Chat, label: &str) -> Result<bool> {
        if !is_known_genre(label) {
            return Err(RoutingError::NotFound(format!("genre {}", label)).into());
        }

        let selected = profile.toggle_genre(label);

        if let Some(message_id) = profile.pending_ui_message_ref.as_deref() {
            let keyboard = render::genres_keyboard(profile);
            if let Err(e) = self.bot.edit_keyboard(chat, message_id, &keyboard).await {
                error!(error = %e, message_id = %message_id, "Failed to edit genre picker");
            }
        }
        Ok(selected)
    }

    /// Deletes the tracked checklist if any and clears the reference. Returns the number of
    /// selected genres.
    #[instrument(skip(self, profile, chat), fields(chat_id = chat.id))]
    pub async fn finish(&self, profile: &mut UserProfile, chat: &Chat) -> usize {
        if let Some(message_id) = profile.pending_ui_message_ref.take() {
            if let Err(e) = self.bot.delete_message(chat, &message_id).await {
                error!(error = %e, message_id = %message_id, "Failed to delete genre picker");
            }
        }
        profile.genres().len()
    }
}
