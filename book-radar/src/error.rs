//! Error taxonomy of the book radar core.

use std::time::Duration;

use dbot_core::DbotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadarError {
    #[error("Provider failure: {0}")]
    Provider(#[from] ProviderError),

    /// Transport call failed.
    #[error("Render failure: {0}")]
    Render(#[from] DbotError),

    #[error("Routing failure: {0}")]
    Routing(#[from] RoutingError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider call timed out after {0:?}")]
    Timeout(Duration),

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// Payload or genre label with no handler.
    #[error("no route for callback payload: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, RadarError>;
