//! Wallet session reconciliation for RemitAbeg.
//!
//! Merges two independently-updating wallet-state sources (a primary
//! adapter and a secondary connector-modal adapter) into one canonical
//! `WalletSession`, detects disconnected -> connected edges, and drives
//! the one-shot connect notification.

pub mod connector;
pub mod error;
pub mod notifier;
pub mod reconciler;
pub mod source;

pub use connector::ConnectorModal;
pub use error::{Result, SessionError};
pub use notifier::{NotificationEmitter, NotificationSink};
pub use reconciler::{reconcile_sources, ConnectionReconciler, SessionTransition};
pub use source::SourceSnapshot;
