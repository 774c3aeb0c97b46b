//! Transient state of an in-progress title/author search.

use crate::book::Book;

/// Created when a title is accepted; replaced wholesale by the next search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub title: String,
    /// Unset until the author step completes; stays unset when the step is skipped.
    pub author: Option<String>,
    /// Last result list from the provider, used to resolve save buttons without re-querying.
    pub results: Vec<Book>,
}

impl SearchSession {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            results: Vec::new(),
        }
    }

    pub fn find(&self, book_id: &str) -> Option<&Book> {
        self.results.iter().find(|b| b.id == book_id)
    }
}
