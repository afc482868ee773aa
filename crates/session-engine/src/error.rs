//! Error types for session operations.

use thiserror::Error;

/// Error type for session operations.
///
/// Callers can tell a network problem apart from a credential rejection;
/// the original swallow-everything boolean contract is gone on purpose.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Transport-level failure (connection, TLS, timeout, body decode)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned {status}")]
    Api { status: reqwest::StatusCode },

    /// Server answered successfully but withheld the expected token or
    /// profile — the credentials were not accepted
    #[error("Credentials rejected by server")]
    Rejected,

    /// The credential exchange succeeded but persisting it failed
    #[error("Storage error: {0}")]
    Storage(#[from] console_storage::StorageError),
}

/// Result type alias using SessionError.
pub type SessionResult<T> = Result<T, SessionError>;
