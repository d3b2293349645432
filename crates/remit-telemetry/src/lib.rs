//! Telemetry for RemitAbeg: structured logging initialization.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
