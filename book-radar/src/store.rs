//! Process-wide session store: one [`UserSession`] per user, created on first contact and kept
//! for the process lifetime.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::dialogue::DialogueState;
use crate::profile::{SavedBooks, UserProfile};

/// Everything the bot remembers about one user.
#[derive(Debug, Default)]
pub struct UserSession {
    pub profile: UserProfile,
    pub dialogue: DialogueState,
    pub saved: SavedBooks,
}

/// Shared handle to one user's session. Holding the lock serializes that user's events.
pub type SessionHandle = Arc<Mutex<UserSession>>;

/// Sessions keyed by user id. Different users never contend on the same lock.
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<i64, SessionHandle>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the user's session, creating a fresh one on first contact.
    pub fn session(&self, user_id: i64) -> SessionHandle {
        if let Some(existing) = self.sessions.get(&user_id) {
            return existing.clone();
        }
        self.sessions
            .entry(user_id)
            .or_insert_with(|| {
                debug!(user_id, "Creating session on first contact");
                SessionHandle::default()
            })
            .clone()
    }

    pub fn contains(&self, user_id: i64) -> bool {
        self.sessions.contains_key(&user_id)
    }

    /// Number of users seen since start.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
