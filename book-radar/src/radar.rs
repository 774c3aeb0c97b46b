//! [`BookRadar`]: the bot's [`Handler`]. Serializes each user's events on their session lock, then
//! dispatches commands, search-dialogue input and button presses.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dbot_core::{CallbackQuery, Chat, Event, Handler, HandlerResponse, Message, ReplyMarkup};
use tracing::{debug, error, info, instrument};

use crate::config::RadarConfig;
use crate::dialogue::{DialogueInput, DialogueState, SearchDialogue, Step};
use crate::provider::{BookProvider, TimeoutProvider};
use crate::render;
use crate::router::CallbackRouter;
use crate::store::{SessionStore, UserSession};

/// Commands reachable from any dialogue state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    NewReleases,
    Search,
    SavedBooks,
    Settings,
    Skip,
}

impl Command {
    /// Matches slash commands (with or without `@botname`) and main-menu button labels.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(command) = text.strip_prefix('/') {
            let name = command.split(['@', ' ']).next().unwrap_or_default();
            return match name {
                "start" => Some(Self::Start),
                "skip" => Some(Self::Skip),
                "search" => Some(Self::Search),
                _ => None,
            };
        }
        match text {
            render::BTN_NEW_RELEASES => Some(Self::NewReleases),
            render::BTN_SEARCH => Some(Self::Search),
            render::BTN_SAVED => Some(Self::SavedBooks),
            render::BTN_SETTINGS => Some(Self::Settings),
            _ => None,
        }
    }

    /// Whether the command wins over dialogue text while a search is in progress. Other menu
    /// labels are taken as the title or author.
    pub fn preempts_dialogue(self) -> bool {
        matches!(
            self,
            Self::Start | Self::NewReleases | Self::Search | Self::Skip
        )
    }
}

pub struct BookRadar {
    store: SessionStore,
    bot: Arc<dyn dbot_core::Bot>,
    provider: Arc<dyn BookProvider>,
    dialogue: SearchDialogue,
    router: CallbackRouter,
}

impl BookRadar {
    /// Builds the handler; every provider call is bounded by `config.provider_timeout_secs`.
    pub fn new(
        bot: Arc<dyn dbot_core::Bot>,
        provider: Arc<dyn BookProvider>,
        config: &RadarConfig,
    ) -> Self {
        let timeout = Duration::from_secs(config.provider_timeout_secs);
        let provider: Arc<dyn BookProvider> = Arc::new(TimeoutProvider::new(provider, timeout));
        Self {
            store: SessionStore::new(),
            dialogue: SearchDialogue::new(bot.clone(), provider.clone()),
            router: CallbackRouter::new(bot.clone(), provider.clone()),
            bot,
            provider,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn on_message(&self, message: &Message) -> HandlerResponse {
        if message.content.trim().is_empty() {
            debug!("Ignoring message without text");
            return HandlerResponse::Ignore;
        }

        let handle = self.store.session(message.user.id);
        let mut session = handle.lock().await;
        let chat = &message.chat;

        let command = Command::parse(&message.content)
            .filter(|c| session.dialogue == DialogueState::Idle || c.preempts_dialogue());

        match command {
            Some(Command::Start) => {
                self.say(chat, render::MSG_WELCOME, Some(render::main_menu())).await;
            }
            Some(Command::NewReleases) => self.new_releases(&session, chat).await,
            Some(Command::SavedBooks) => self.saved_books(&session, chat).await,
            Some(Command::Settings) => {
                let markup = ReplyMarkup::Inline(render::settings_keyboard());
                self.say(chat, &render::settings_text(&session.profile), Some(markup))
                    .await;
            }
            Some(Command::Search) => {
                self.dialogue
                    .advance(&mut session, chat, DialogueInput::SearchCommand)
                    .await;
            }
            Some(Command::Skip) => {
                let step = self
                    .dialogue
                    .advance(&mut session, chat, DialogueInput::Skip)
                    .await;
                if step == Step::Unhandled {
                    self.say(chat, render::MSG_SKIP_OUTSIDE_SEARCH, None).await;
                }
            }
            None => {
                let step = self
                    .dialogue
                    .advance(&mut session, chat, DialogueInput::Text(&message.content))
                    .await;
                if step == Step::Unhandled {
                    self.say(chat, render::MSG_USE_MENU, Some(render::main_menu()))
                        .await;
                }
            }
        }
        HandlerResponse::Stop
    }

    async fn on_callback(&self, query: &CallbackQuery) -> HandlerResponse {
        let handle = self.store.session(query.user.id);
        let mut session = handle.lock().await;
        // Failures are logged and acknowledged by the router.
        let _ = self.router.handle(&mut session, query).await;
        HandlerResponse::Stop
    }

    /// Lists new releases for the user's genres; without genres the provider is not called.
    async fn new_releases(&self, session: &UserSession, chat: &Chat) {
        let genres = session.profile.genres();
        if genres.is_empty() {
            self.say(chat, render::MSG_SELECT_GENRES_FIRST, Some(render::main_menu()))
                .await;
            return;
        }

        self.say(chat, render::MSG_LOOKING_FOR_RELEASES, None).await;
        match self.provider.list_new_releases(genres).await {
            Ok(books) if books.is_empty() => {
                self.say(chat, render::MSG_NO_RELEASES, None).await;
            }
            Ok(books) => {
                info!(chat_id = chat.id, count = books.len(), "Sending new releases");
                for book in &books {
                    render::send_book(self.bot.as_ref(), chat, book).await;
                }
            }
            Err(e) => {
                error!(error = %e, chat_id = chat.id, "New releases provider failed");
                self.say(chat, render::MSG_RELEASES_FAILED, None).await;
            }
        }
    }

    async fn saved_books(&self, session: &UserSession, chat: &Chat) {
        if session.saved.is_empty() {
            self.say(chat, render::MSG_NO_SAVED_BOOKS, None).await;
            return;
        }

        self.say(chat, render::MSG_SAVED_HEADER, None).await;
        for (i, book) in session.saved.iter().enumerate() {
            self.say(chat, &render::format_saved_book(i + 1, book), None)
                .await;
        }
    }

    async fn say(&self, chat: &Chat, text: &str, markup: Option<ReplyMarkup>) {
        render::send_text(self.bot.as_ref(), chat, text, markup.as_ref()).await;
    }
}

#[async_trait]
impl Handler for BookRadar {
    async fn handle(&self, event: &Event) -> dbot_core::Result<HandlerResponse> {
        Ok(match event {
            Event::Message(message) => self.on_message(message).await,
            Event::Callback(query) => self.on_callback(query).await,
        })
    }
}
