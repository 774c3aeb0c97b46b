//! User-facing texts, keyboards, and small send helpers applying the fallback/ignore policy of
//! each transport call.

use dbot_core::{Bot, Button, Chat, InlineKeyboard, ReplyMarkup};
use tracing::{error, warn};

use crate::book::Book;
use crate::profile::{UserProfile, GENRES};
use crate::router::{CHANGE_GENRES, GENRES_DONE, GENRE_PREFIX, SAVE_PREFIX, TOGGLE_NOTIFICATIONS};

// ---------- Main menu buttons (also matched as commands) ----------
pub const BTN_NEW_RELEASES: &str = "New releases";
pub const BTN_SEARCH: &str = "Search book";
pub const BTN_SAVED: &str = "Saved books";
pub const BTN_SETTINGS: &str = "Settings";

// ---------- Messages ----------
pub const MSG_WELCOME: &str = "📖 Welcome to Book Radar!\n\n\
I keep you up to date with new books in your favourite genres. \
Set your preferences, get personal picks and save the books you like.\n\n\
Choose an action:";
pub const MSG_USE_MENU: &str = "Choose an action from the menu below.";
pub const MSG_SELECT_GENRES_FIRST: &str = "Select genres in settings first!";
pub const MSG_LOOKING_FOR_RELEASES: &str = "🔍 Looking for new releases in your genres...";
pub const MSG_NO_RELEASES: &str = "No new releases for your genres 😔";
pub const MSG_RELEASES_FAILED: &str = "Error while looking for new releases. Try again later.";
pub const MSG_ENTER_TITLE: &str = "🔍 Enter the book title:";
pub const MSG_TITLE_TOO_SHORT: &str = "Title is too short. Try again:";
pub const MSG_ENTER_AUTHOR: &str = "✍️ Enter the author (if you know it, otherwise send /skip):";
pub const MSG_SKIP_OUTSIDE_SEARCH: &str = "Nothing to skip. Press \"Search book\" to start a search.";
pub const MSG_NO_BOOKS_FOUND: &str = "No books found 😔";
pub const MSG_SEARCH_FAILED: &str = "Error while searching for books. Try again later.";
pub const MSG_SEARCH_FINISHED: &str = "Search finished!";
pub const MSG_NO_SAVED_BOOKS: &str = "You have no saved books.";
pub const MSG_SAVED_HEADER: &str = "📚 Your saved books:";
pub const MSG_CHOOSE_GENRES: &str = "📚 Choose the genres you are interested in:";

// ---------- Callback notices ----------
pub const NOTICE_BOOK_SAVED: &str = "✅ Book saved!";
pub const NOTICE_ALREADY_SAVED: &str = "❌ Book already saved";
pub const NOTICE_BOOK_NOT_FOUND: &str = "Book not found 😔";

pub fn main_menu() -> ReplyMarkup {
    ReplyMarkup::Menu(vec![
        vec![BTN_NEW_RELEASES.to_string(), BTN_SEARCH.to_string()],
        vec![BTN_SAVED.to_string(), BTN_SETTINGS.to_string()],
    ])
}

pub fn settings_text(profile: &UserProfile) -> String {
    let status = if profile.notifications_enabled {
        "✅ on"
    } else {
        "❌ off"
    };
    let genres = if profile.genres().is_empty() {
        "not selected".to_string()
    } else {
        profile.genres().join(", ")
    };
    format!(
        "⚙️ Settings\n\n🔔 Notifications: {}\n📚 Genres: {}\n\nChoose an action:",
        status, genres
    )
}

pub fn settings_keyboard() -> InlineKeyboard {
    InlineKeyboard::new()
        .row(vec![Button::callback("Change genres", CHANGE_GENRES)])
        .row(vec![Button::callback(
            "Toggle notifications",
            TOGGLE_NOTIFICATIONS,
        )])
}

pub fn notifications_notice(enabled: bool) -> &'static str {
    if enabled {
        "Notifications on!"
    } else {
        "Notifications off!"
    }
}

/// Genre checklist: two labels per row, then "Done".
pub fn genres_keyboard(profile: &UserProfile) -> InlineKeyboard {
    let buttons: Vec<Button> = GENRES
        .iter()
        .map(|genre| {
            let mark = if profile.has_genre(genre) { "✅" } else { "❌" };
            Button::callback(
                format!("{} {}", mark, genre),
                format!("{}{}", GENRE_PREFIX, genre),
            )
        })
        .collect();

    let keyboard = buttons
        .chunks(2)
        .fold(InlineKeyboard::new(), |kb, row| kb.row(row.to_vec()));
    keyboard.row(vec![Button::callback("Done", GENRES_DONE)])
}

pub fn genres_selected_text(count: usize) -> String {
    format!("✅ Genres selected: {}", count)
}

pub fn save_keyboard(book_id: &str) -> InlineKeyboard {
    InlineKeyboard::new().row(vec![Button::callback(
        "💾 Save book",
        format!("{}{}", SAVE_PREFIX, book_id),
    )])
}

pub fn format_book(book: &Book) -> String {
    format!(
        "📚 {}\n✍️ {}\n💰 {}\n📝 {}\n🔗 {}",
        book.title,
        book.author,
        book.price.as_deref().unwrap_or("Price not specified"),
        book.description,
        book.source_url
    )
}

/// Line of the saved-books list; `position` starts at 1.
pub fn format_saved_book(position: usize, book: &Book) -> String {
    format!(
        "{}. {}\n✍️ Author: {}\n🔗 {}",
        position, book.title, book.author, book.source_url
    )
}

pub fn searching_text(title: &str, author: Option<&str>) -> String {
    match author {
        Some(author) => format!("🔍 Searching for books: {} ({})", title, author),
        None => format!("🔍 Searching for books: {}", title),
    }
}

/// Sends a text message; a failure is logged and swallowed. Returns the message id on success.
pub async fn send_text(
    bot: &dyn Bot,
    chat: &Chat,
    text: &str,
    markup: Option<&ReplyMarkup>,
) -> Option<String> {
    match bot.send_text(chat, text, markup).await {
        Ok(id) => Some(id),
        Err(e) => {
            error!(error = %e, chat_id = chat.id, "Failed to send message");
            None
        }
    }
}

/// Renders a book with a save button: the cover with caption when one is set, falling back to a
/// plain text message when the image cannot be sent.
pub async fn send_book(bot: &dyn Bot, chat: &Chat, book: &Book) {
    let text = format_book(book);
    let markup = ReplyMarkup::Inline(save_keyboard(&book.id));

    if let Some(cover) = book.cover() {
        match bot.send_image(chat, cover, &text, Some(&markup)).await {
            Ok(_) => return,
            Err(e) => {
                warn!(error = %e, chat_id = chat.id, book_id = %book.id, "Failed to send cover, falling back to text");
            }
        }
    }
    send_text(bot, chat, &text, Some(&markup)).await;
}
