//! Fee comparison for the RemitAbeg pricing calculator.
//!
//! Pure, deterministic fee quotes over a declarative rate table:
//! - `RateTable`: service name -> flat percentage rate, speed class
//! - `FeeComparator`: bounded amount -> quotes + savings vs. baseline
//!
//! No network or clock dependency; the same amount always yields
//! identical quotes.

pub mod comparator;
pub mod config;
pub mod error;
pub mod table;

pub use comparator::{FeeComparator, FeeComparison, FeeQuote};
pub use config::{RateTableConfig, ServiceRateConfig};
pub use error::{PricingError, Result};
pub use table::{RateTable, ServiceRate, SpeedClass};
