//! Balance observation for the canonical wallet session.
//!
//! Resolves a `Balance` for the currently connected address via an
//! external balance-query collaborator, and keeps the displayed value
//! consistent with the current address even under rapid address
//! changes: stale in-flight results are discarded, disconnects reset
//! synchronously.

pub mod error;
pub mod observer;
pub mod provider;

pub use error::{BalanceError, Result};
pub use observer::BalanceObserver;
pub use provider::BalanceProvider;
