//! Book record returned by providers.

use serde::{Deserialize, Serialize};

/// A recommendation or search result. `id` is unique within the result set that produced it, not
/// globally; "already saved" checks compare ids only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_url: Option<String>,
    pub price: Option<String>,
    pub source_url: String,
}

impl Book {
    /// Cover URL when present and non-blank.
    pub fn cover(&self) -> Option<&str> {
        self.cover_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
