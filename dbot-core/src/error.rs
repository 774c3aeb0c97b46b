use thiserror::Error;

/// Transport-level failure. Carries the transport's own message.
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Invalid message id: {0}")]
    InvalidMessageId(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;
