//! Book data providers: the [`BookProvider`] trait, the demo [`StubBookProvider`], and the
//! [`TimeoutProvider`] decorator bounding every call.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::book::Book;
use crate::error::ProviderError;

/// Source of book data. Calls may be slow or fail; callers do not retry.
#[async_trait]
pub trait BookProvider: Send + Sync {
    /// Recent releases for the given genres.
    async fn list_new_releases(&self, genres: &[String]) -> Result<Vec<Book>, ProviderError>;

    /// Books matching `title`, narrowed by `author` when given.
    async fn search(&self, title: &str, author: Option<&str>) -> Result<Vec<Book>, ProviderError>;
}

/// Demo data so the bot is usable without a real catalog backend.
#[derive(Debug, Clone, Default)]
pub struct StubBookProvider;

impl StubBookProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BookProvider for StubBookProvider {
    async fn list_new_releases(&self, genres: &[String]) -> Result<Vec<Book>, ProviderError> {
        debug!(genres = ?genres, "Stub provider: new releases");
        Ok(genres
            .iter()
            .take(3)
            .enumerate()
            .map(|(i, genre)| Book {
                id: format!("stub_{}", i),
                title: format!("New release in {}", genre),
                author: "Famous Author".to_string(),
                description: format!(
                    "A demo {} book. A real provider would return the actual description here.",
                    genre
                ),
                cover_url: None,
                price: Some(format!("{} ₽", 399 + i * 50)),
                source_url: "https://example.com".to_string(),
            })
            .collect())
    }

    async fn search(&self, title: &str, author: Option<&str>) -> Result<Vec<Book>, ProviderError> {
        debug!(title = %title, author = ?author, "Stub provider: search");
        Ok((0..3)
            .map(|i| Book {
                id: format!("search_{}", i),
                title: format!("{} - sample result {}", title, i + 1),
                author: author.unwrap_or("Unknown author").to_string(),
                description: format!(
                    "A demo search result. A real provider would describe '{}' here.",
                    title
                ),
                cover_url: None,
                price: Some(format!("{} ₽", 299 + i * 100)),
                source_url: "https://example.com".to_string(),
            })
            .collect())
    }
}

/// Wraps a provider and fails any call that outlives `timeout` with [`ProviderError::Timeout`].
pub struct TimeoutProvider {
    inner: Arc<dyn BookProvider>,
    timeout: Duration,
}

impl TimeoutProvider {
    pub fn new(inner: Arc<dyn BookProvider>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl BookProvider for TimeoutProvider {
    async fn list_new_releases(&self, genres: &[String]) -> Result<Vec<Book>, ProviderError> {
        match tokio::time::timeout(self.timeout, self.inner.list_new_releases(genres)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout = ?self.timeout, "list_new_releases timed out");
                Err(ProviderError::Timeout(self.timeout))
            }
        }
    }

    async fn search(&self, title: &str, author: Option<&str>) -> Result<Vec<Book>, ProviderError> {
        match tokio::time::timeout(self.timeout, self.inner.search(title, author)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout = ?self.timeout, title = %title, "search timed out");
                Err(ProviderError::Timeout(self.timeout))
            }
        }
    }
}
