//! Error types for remit-balance.

use thiserror::Error;

/// Balance query error types.
///
/// A failed query degrades the displayed balance to `Unknown`; it is
/// never surfaced as a fatal error.
#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("Balance query failed: {0}")]
    Fetch(String),
}

/// Result type alias for balance operations.
pub type Result<T> = std::result::Result<T, BalanceError>;
