//! Routes inline-button presses to their handlers and acknowledges every press.

use std::sync::Arc;

use dbot_core::{Bot, CallbackQuery, Chat};
use tracing::{error, info, instrument, warn};

use crate::book::Book;
use crate::error::{RadarError, Result, RoutingError};
use crate::genres::GenreSelectionController;
use crate::provider::BookProvider;
use crate::render;
use crate::store::UserSession;

// ---------- Callback payloads ----------
pub const TOGGLE_NOTIFICATIONS: &str = "toggle_notifications";
pub const CHANGE_GENRES: &str = "change_genres";
pub const GENRES_DONE: &str = "genres_done";
pub const GENRE_PREFIX: &str = "genre_";
pub const SAVE_PREFIX: &str = "save_";

/// Parsed callback payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction<'a> {
    ToggleNotifications,
    ChangeGenres,
    ToggleGenre(&'a str),
    GenresDone,
    SaveBook(&'a str),
}

impl<'a> CallbackAction<'a> {
    /// Exact payloads are matched before prefixes; only the first separator after a prefix is
    /// significant, so labels and ids may contain `_`.
    pub fn parse(payload: &'a str) -> std::result::Result<Self, RoutingError> {
        match payload {
            TOGGLE_NOTIFICATIONS => Ok(Self::ToggleNotifications),
            CHANGE_GENRES => Ok(Self::ChangeGenres),
            GENRES_DONE => Ok(Self::GenresDone),
            _ => {
                if let Some(label) = payload.strip_prefix(GENRE_PREFIX) {
                    Ok(Self::ToggleGenre(label))
                } else if let Some(id) = payload.strip_prefix(SAVE_PREFIX) {
                    Ok(Self::SaveBook(id))
                } else {
                    Err(RoutingError::NotFound(payload.to_string()))
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
    /// No book with that id in the last search or the current new releases. Normal when the
    /// search was replaced or the releases changed.
    NotFound,
}

/// What a routed press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    NotificationsToggled(bool),
    GenrePickerOpened,
    GenreToggled { label: String, selected: bool },
    GenresFinished(usize),
    Save(SaveOutcome),
}

impl RouteOutcome {
    /// Short notice shown to the user when acknowledging the press.
    fn notice(&self) -> Option<&'static str> {
        match self {
            Self::NotificationsToggled(enabled) => Some(render::notifications_notice(*enabled)),
            Self::Save(SaveOutcome::Saved) => Some(render::NOTICE_BOOK_SAVED),
            Self::Save(SaveOutcome::AlreadySaved) => Some(render::NOTICE_ALREADY_SAVED),
            Self::Save(SaveOutcome::NotFound) => Some(render::NOTICE_BOOK_NOT_FOUND),
            Self::GenrePickerOpened | Self::GenreToggled { .. } | Self::GenresFinished(_) => None,
        }
    }
}

pub struct CallbackRouter {
    bot: Arc<dyn Bot>,
    provider: Arc<dyn BookProvider>,
    genres: GenreSelectionController,
}

impl CallbackRouter {
    pub fn new(bot: Arc<dyn Bot>, provider: Arc<dyn BookProvider>) -> Self {
        let genres = GenreSelectionController::new(bot.clone());
        Self {
            bot,
            provider,
            genres,
        }
    }

    /// Routes the press and always acknowledges it. Routing failures are logged and answered
    /// with an empty acknowledgment; they leave the session untouched.
    #[instrument(skip(self, session, query), fields(user_id = query.user.id, payload = %query.data))]
    pub async fn handle(&self, session: &mut UserSession, query: &CallbackQuery) -> Result<RouteOutcome> {
        let result = self.route(session, query).await;

        let notice = match &result {
            Ok(outcome) => {
                info!(outcome = ?outcome, "Callback routed");
                outcome.notice()
            }
            Err(RadarError::Routing(e)) => {
                warn!(error = %e, "Unroutable callback");
                None
            }
            Err(e) => {
                error!(error = %e, "Callback handler failed");
                None
            }
        };

        if let Err(e) = self.bot.answer_callback(&query.id, notice).await {
            error!(error = %e, "Failed to answer callback");
        }
        result
    }

    /// Applies the action for `query.data` to the session without acknowledging the press.
    pub async fn route(&self, session: &mut UserSession, query: &CallbackQuery) -> Result<RouteOutcome> {
        let chat = &query.chat;

        match CallbackAction::parse(&query.data)? {
            CallbackAction::ToggleNotifications => {
                let enabled = session.profile.toggle_notifications();
                self.rerender_settings(session, query).await;
                Ok(RouteOutcome::NotificationsToggled(enabled))
            }
            CallbackAction::ChangeGenres => {
                self.genres.open(&mut session.profile, chat).await?;
                Ok(RouteOutcome::GenrePickerOpened)
            }
            CallbackAction::ToggleGenre(label) => {
                let selected = self.genres.toggle(&mut session.profile, chat, label).await?;
                Ok(RouteOutcome::GenreToggled {
                    label: label.to_string(),
                    selected,
                })
            }
            CallbackAction::GenresDone => {
                let count = self.genres.finish(&mut session.profile, chat).await;
                let menu = render::main_menu();
                render::send_text(
                    self.bot.as_ref(),
                    chat,
                    &render::genres_selected_text(count),
                    Some(&menu),
                )
                .await;
                Ok(RouteOutcome::GenresFinished(count))
            }
            CallbackAction::SaveBook(book_id) => {
                Ok(RouteOutcome::Save(self.save_book(session, chat, book_id).await))
            }
        }
    }

    /// Edits the settings message the press came from; failures are logged.
    async fn rerender_settings(&self, session: &UserSession, query: &CallbackQuery) {
        let Some(message_id) = query.message_id.as_deref() else {
            warn!("Settings press without origin message; nothing to re-render");
            return;
        };
        let text = render::settings_text(&session.profile);
        if let Err(e) = self
            .bot
            .edit_message(&query.chat, message_id, &text, &render::settings_keyboard())
            .await
        {
            error!(error = %e, message_id = %message_id, "Failed to re-render settings");
        }
    }

    async fn save_book(&self, session: &mut UserSession, chat: &Chat, book_id: &str) -> SaveOutcome {
        let Some(book) = self.resolve_book(session, chat, book_id).await else {
            return SaveOutcome::NotFound;
        };
        if session.saved.save(book) {
            SaveOutcome::Saved
        } else {
            SaveOutcome::AlreadySaved
        }
    }

    /// Looks `book_id` up in the last search results, then in a fresh new-releases listing for
    /// the user's genres. A provider failure counts as not found.
    async fn resolve_book(&self, session: &UserSession, chat: &Chat, book_id: &str) -> Option<Book> {
        if let Some(book) = session
            .profile
            .active_search
            .as_ref()
            .and_then(|search| search.find(book_id))
        {
            return Some(book.clone());
        }

        if session.profile.genres().is_empty() {
            return None;
        }
        match self.provider.list_new_releases(session.profile.genres()).await {
            Ok(books) => books.into_iter().find(|b| b.id == book_id),
            Err(e) => {
                warn!(error = %e, chat_id = chat.id, book_id = %book_id, "Could not list new releases to resolve book");
                None
            }
        }
    }
}
