//! RemitAbeg connection & pricing core.
//!
//! Wires the components together:
//! - two wallet-state sources -> `ConnectionReconciler` -> canonical session
//! - session -> `BalanceObserver` and the connect `NotificationEmitter`
//! - amount -> `FeeComparator` (independent of the session)
//!
//! The UI layer consumes read-only snapshots (`WalletSession`,
//! `Balance`, fee quotes); all mutation goes through `Application`.

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::{AppConfig, NotificationConfig};
pub use error::{AppError, AppResult};
