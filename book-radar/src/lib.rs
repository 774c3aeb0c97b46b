//! # book-radar
//!
//! Book recommendation bot core. Per-user state lives in a [`SessionStore`]; text input drives the
//! [`SearchDialogue`], button presses go through the [`CallbackRouter`], and [`BookRadar`] ties
//! them together as a [`dbot_core::Handler`]. Book data comes from a pluggable [`BookProvider`].

pub mod book;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod genres;
pub mod logging;
pub mod profile;
pub mod provider;
pub mod radar;
pub mod render;
pub mod router;
pub mod search;
pub mod store;

pub use book::Book;
pub use config::RadarConfig;
pub use dialogue::{transition, DialogueInput, DialogueState, SearchDialogue, Step};
pub use error::{ProviderError, RadarError, Result, RoutingError};
pub use genres::GenreSelectionController;
pub use logging::LoggingHandler;
pub use profile::{SavedBooks, UserProfile, GENRES};
pub use provider::{BookProvider, StubBookProvider, TimeoutProvider};
pub use radar::{BookRadar, Command};
pub use router::{CallbackAction, CallbackRouter, RouteOutcome, SaveOutcome};
pub use search::SearchSession;
pub use store::{SessionHandle, SessionStore, UserSession};
