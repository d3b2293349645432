//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] remit_core::CoreError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] remit_pricing::PricingError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] remit_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
