//! Two-step search dialogue: title, then author (or skip), then search.
//!
//! [`transition`] is the whole transition table; [`SearchDialogue`] applies its effects to the
//! user's session and talks to the transport and provider.

use std::sync::Arc;

use dbot_core::{Bot, Chat, ReplyMarkup};
use tracing::{error, info, instrument, warn};

use crate::provider::BookProvider;
use crate::render;
use crate::search::SearchSession;
use crate::store::UserSession;

/// Minimum title length in characters after trimming.
pub const MIN_TITLE_LEN: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogueState {
    #[default]
    Idle,
    AwaitingTitle,
    AwaitingAuthor,
}

/// Input that may drive the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueInput<'a> {
    SearchCommand,
    Text(&'a str),
    Skip,
}

/// Effect chosen by [`transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Drop the previous search and ask for a title.
    StartSearch,
    /// Title too short; ask again.
    RejectTitle,
    /// Title accepted (trimmed); ask for the author.
    AcceptTitle(String),
    /// Run the search with the trimmed author, or none when skipped.
    RunSearch { author: Option<String> },
    /// Input is not expected in this state; handle it as a regular command.
    Unhandled,
}

/// Transition table of the search dialogue.
pub fn transition(state: DialogueState, input: DialogueInput<'_>) -> (DialogueState, Step) {
    use DialogueInput as In;
    use DialogueState as S;

    match (state, input) {
        (_, In::SearchCommand) => (S::AwaitingTitle, Step::StartSearch),
        (S::AwaitingTitle, In::Text(text)) => {
            let title = text.trim();
            if title.chars().count() >= MIN_TITLE_LEN {
                (S::AwaitingAuthor, Step::AcceptTitle(title.to_string()))
            } else {
                (S::AwaitingTitle, Step::RejectTitle)
            }
        }
        (S::AwaitingAuthor, In::Text(text)) => {
            let author = text.trim();
            let author = (!author.is_empty()).then(|| author.to_string());
            (S::Idle, Step::RunSearch { author })
        }
        (S::AwaitingAuthor, In::Skip) => (S::Idle, Step::RunSearch { author: None }),
        (state, In::Text(_) | In::Skip) => (state, Step::Unhandled),
    }
}

/// Drives the search dialogue for one user at a time; the caller holds the user's session lock.
pub struct SearchDialogue {
    bot: Arc<dyn Bot>,
    provider: Arc<dyn BookProvider>,
}

impl SearchDialogue {
    pub fn new(bot: Arc<dyn Bot>, provider: Arc<dyn BookProvider>) -> Self {
        Self { bot, provider }
    }

    /// Applies `input` to the user's dialogue. Returns the step taken; [`Step::Unhandled`] means
    /// nothing changed and the caller should treat the input as a regular command.
    #[instrument(skip(self, session, chat), fields(state = ?session.dialogue))]
    pub async fn advance(
        &self,
        session: &mut UserSession,
        chat: &Chat,
        input: DialogueInput<'_>,
    ) -> Step {
        let (next, step) = transition(session.dialogue, input);

        match &step {
            Step::StartSearch => {
                session.profile.active_search = None;
                session.dialogue = next;
                self.say(chat, render::MSG_ENTER_TITLE, Some(ReplyMarkup::RemoveMenu))
                    .await;
            }
            Step::RejectTitle => {
                self.say(chat, render::MSG_TITLE_TOO_SHORT, None).await;
            }
            Step::AcceptTitle(title) => {
                session.profile.active_search = Some(SearchSession::new(title.clone()));
                session.dialogue = next;
                self.say(chat, render::MSG_ENTER_AUTHOR, Some(ReplyMarkup::ForceReply))
                    .await;
            }
            Step::RunSearch { author } => {
                session.dialogue = next;
                self.run_search(session, chat, author.clone()).await;
            }
            Step::Unhandled => {}
        }

        step
    }

    /// Runs the provider search for the active session and renders the results. The dialogue is
    /// already back in `Idle`; every outcome ends with the main menu.
    async fn run_search(&self, session: &mut UserSession, chat: &Chat, author: Option<String>) {
        let Some(search) = session.profile.active_search.as_mut() else {
            warn!(chat_id = chat.id, "Author step reached without an active search");
            self.say(chat, render::MSG_SEARCH_FAILED, Some(render::main_menu()))
                .await;
            return;
        };
        search.author = author;
        let title = search.title.clone();
        let author = search.author.clone();

        self.say(chat, &render::searching_text(&title, author.as_deref()), None)
            .await;

        match self.provider.search(&title, author.as_deref()).await {
            Ok(books) if books.is_empty() => {
                info!(chat_id = chat.id, title = %title, "Search returned no books");
                self.say(chat, render::MSG_NO_BOOKS_FOUND, Some(render::main_menu()))
                    .await;
                return;
            }
            Ok(books) => {
                info!(chat_id = chat.id, title = %title, count = books.len(), "Search finished");
                for book in &books {
                    render::send_book(self.bot.as_ref(), chat, book).await;
                }
                search.results = books;
            }
            Err(e) => {
                error!(error = %e, chat_id = chat.id, title = %title, "Search provider failed");
                self.say(chat, render::MSG_SEARCH_FAILED, None).await;
            }
        }

        self.say(chat, render::MSG_SEARCH_FINISHED, Some(render::main_menu()))
            .await;
    }

    async fn say(&self, chat: &Chat, text: &str, markup: Option<ReplyMarkup>) {
        render::send_text(self.bot.as_ref(), chat, text, markup.as_ref()).await;
    }
}
