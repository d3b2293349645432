//! Error types for remit-session.

use thiserror::Error;

/// Session error types.
///
/// Connect failures are caught inside the reconciler and logged;
/// they never reach UI callers and never touch the canonical session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Connect request rejected by adapter: {0}")]
    ConnectRejected(String),

    #[error("Connect request cancelled by user")]
    ConnectCancelled,
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
