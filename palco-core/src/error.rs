//! Error types for the palco ecosystem.

use thiserror::Error;

/// Errors that can occur in palco operations.
///
/// All of these are recoverable at the call site; the surfaces translate
/// them into user-visible messages.
#[derive(Error, Debug)]
pub enum PalcoError {
    #[error("An account with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("No account matches those credentials")]
    InvalidCredentials,

    #[error("No account is signed in")]
    NoActiveSession,

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for palco operations.
pub type PalcoResult<T> = Result<T, PalcoError>;
