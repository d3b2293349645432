//! Error types for remit-pricing.

use rust_decimal::Decimal;
use thiserror::Error;

/// Pricing error types.
///
/// All variants are rate-table validation failures; the comparison
/// itself is total over a valid table and an in-domain amount.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Rate table is empty")]
    EmptyTable,

    #[error("Baseline service '{0}' not present in rate table")]
    MissingBaseline(String),

    #[error("Rate table has no recommended service")]
    MissingRecommended,

    #[error("Rate table has more than one recommended service")]
    MultipleRecommended,

    #[error("Invalid rate {rate} for service '{service}': must be within (0, 1)")]
    InvalidRate { service: String, rate: Decimal },

    #[error("Recommended rate {own} is not below baseline rate {baseline}")]
    RateInversion { own: Decimal, baseline: Decimal },
}

/// Result type alias for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;
