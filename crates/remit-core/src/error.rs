//! Error types for remit-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Transfer amount {value} outside domain [{min}, {max}]")]
    AmountOutOfRange { value: i64, min: i64, max: i64 },

    #[error("Wallet address must not be empty")]
    EmptyAddress,
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
