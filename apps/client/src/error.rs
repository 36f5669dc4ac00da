//! Error handling for the client application.
//!
//! Transport failures and empty collaborator results are both terminal for
//! the operation that triggered them: the caller shows a blocking notice and
//! falls back to the prior view. Nothing is retried.

use thiserror::Error;

/// Client error types.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error: {status} - {message}")]
    Backend { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No data: {0}")]
    EmptyData(String),

    #[error("Session error: {0}")]
    Session(#[from] wordtrail_core::SessionError),

    /// The word was mastered locally but the server rejected the update.
    #[error("Mastered locally but the server update failed: {0}")]
    Unreconciled(String),

    #[error("View transition from {from} to {to} is not allowed")]
    InvalidTransition { from: &'static str, to: &'static str },

    #[error("No active session for this action")]
    NoActiveSession,
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
