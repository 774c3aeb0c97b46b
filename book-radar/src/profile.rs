//! Per-user preferences and saved books.

use crate::book::Book;
use crate::search::SearchSession;

/// Fixed, ordered genre catalog shown in the genre picker.
pub const GENRES: [&str; 14] = [
    "Fantasy",
    "Non-fiction",
    "Psychology",
    "Science fiction",
    "Detective",
    "Romance",
    "Historical",
    "Business",
    "Self-development",
    "Biography",
    "Classics",
    "Thriller",
    "Horror",
    "Poetry",
];

/// Returns true if `label` is one of [`GENRES`].
pub fn is_known_genre(label: &str) -> bool {
    GENRES.contains(&label)
}

/// Preferences and transient UI state of one user.
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Selected genres in the order they were picked; no duplicates.
    genres: Vec<String>,
    pub notifications_enabled: bool,
    pub active_search: Option<SearchSession>,
    /// Id of the genre-picker message currently tracked for edits and deletion.
    pub pending_ui_message_ref: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            genres: Vec::new(),
            notifications_enabled: true,
            active_search: None,
            pending_ui_message_ref: None,
        }
    }
}

impl UserProfile {
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn has_genre(&self, label: &str) -> bool {
        self.genres.iter().any(|g| g == label)
    }

    /// Flips membership of `label`. Returns true when the label is selected afterwards.
    pub fn toggle_genre(&mut self, label: &str) -> bool {
        if let Some(pos) = self.genres.iter().position(|g| g == label) {
            self.genres.remove(pos);
            false
        } else {
            self.genres.push(label.to_string());
            true
        }
    }

    /// Flips the notification flag and returns the new value.
    pub fn toggle_notifications(&mut self) -> bool {
        self.notifications_enabled = !self.notifications_enabled;
        self.notifications_enabled
    }
}

/// Append-only list of saved books; ids are unique within the list.
#[derive(Debug, Clone, Default)]
pub struct SavedBooks {
    books: Vec<Book>,
}

impl SavedBooks {
    /// Appends `book` unless a book with the same id is already saved. Returns true when appended.
    pub fn save(&mut self, book: Book) -> bool {
        if self.contains(&book.id) {
            return false;
        }
        self.books.push(book);
        true
    }

    pub fn contains(&self, book_id: &str) -> bool {
        self.books.iter().any(|b| b.id == book_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
