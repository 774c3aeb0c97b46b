//! Scripted [`BookProvider`] that records every call.

use std::sync::Mutex;

use async_trait::async_trait;
use book_radar::{Book, BookProvider, ProviderError};

pub struct MockProvider {
    releases: Mutex<Result<Vec<Book>, ProviderError>>,
    search_results: Mutex<Result<Vec<Book>, ProviderError>>,
    release_calls: Mutex<Vec<Vec<String>>>,
    search_calls: Mutex<Vec<(String, Option<String>)>>,
}

impl MockProvider {
    /// Both operations return an empty list until scripted.
    pub fn new() -> Self {
        Self {
            releases: Mutex::new(Ok(Vec::new())),
            search_results: Mutex::new(Ok(Vec::new())),
            release_calls: Mutex::new(Vec::new()),
            search_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_releases(&self, result: Result<Vec<Book>, ProviderError>) {
        *self.releases.lock().unwrap() = result;
    }

    pub fn set_search_results(&self, result: Result<Vec<Book>, ProviderError>) {
        *self.search_results.lock().unwrap() = result;
    }

    pub fn release_calls(&self) -> Vec<Vec<String>> {
        self.release_calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<(String, Option<String>)> {
        self.search_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookProvider for MockProvider {
    async fn list_new_releases(&self, genres: &[String]) -> Result<Vec<Book>, ProviderError> {
        self.release_calls.lock().unwrap().push(genres.to_vec());
        self.releases.lock().unwrap().clone()
    }

    async fn search(&self, title: &str, author: Option<&str>) -> Result<Vec<Book>, ProviderError> {
        self.search_calls
            .lock()
            .unwrap()
            .push((title.to_string(), author.map(str::to_string)));
        self.search_results.lock().unwrap().clone()
    }
}
