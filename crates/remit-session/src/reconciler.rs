//! Canonical session reconciliation.
//!
//! Two independently-updating sources feed one explicit pure-merge
//! function; the reconciler stores only the last emitted session and
//! detects disconnected -> connected edges from it. This keeps
//! transition side effects independent of any rendering mechanism
//! and immune to duplicate updates.

use crate::connector::ConnectorModal;
use crate::source::SourceSnapshot;
use remit_core::WalletSession;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Edge produced by one reconciliation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTransition {
    /// Session unchanged, or changed without crossing the
    /// connected/disconnected boundary (e.g. address switch).
    None,
    /// Disconnected -> connected edge. Fires the connect notification.
    Connected,
    /// Connected -> disconnected edge. Notifies nothing.
    Disconnected,
}

/// Merge two source snapshots into one canonical session.
///
/// Pure and deterministic: the same pair of inputs always yields the
/// same session, so repeated reconciliation cannot flicker.
///
/// Merge rule:
/// - `connected` = primary OR secondary
/// - address: primary's address while primary is connected, falling
///   through to secondary's; secondary's otherwise. When both sources
///   report different addresses, primary wins (fixed precedence).
/// - a connected flag with no address from either source yields
///   `Disconnected`: the address-iff-connected invariant outranks
///   the raw flags.
pub fn reconcile_sources(primary: &SourceSnapshot, secondary: &SourceSnapshot) -> WalletSession {
    if !primary.connected && !secondary.connected {
        return WalletSession::Disconnected;
    }

    let from_primary = primary.connected && primary.address.is_some();
    let address = if from_primary {
        primary.address.clone()
    } else {
        secondary.address.clone().or_else(|| {
            // Primary connected but not yet exposing an address.
            primary.address.clone()
        })
    };

    match address {
        Some(address) => {
            let chain_name = if from_primary {
                primary.chain_name.clone()
            } else {
                secondary.chain_name.clone()
            };
            WalletSession::connected(address, chain_name)
        }
        None => WalletSession::Disconnected,
    }
}

/// Single writer of the canonical `WalletSession`.
///
/// Broadcasts via a watch channel: readers always observe a session
/// at least as recent as the last completed reconciliation, never a
/// torn intermediate.
#[derive(Debug)]
pub struct ConnectionReconciler {
    tx: watch::Sender<WalletSession>,
}

impl ConnectionReconciler {
    /// Create a reconciler with a `Disconnected` initial session.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(WalletSession::Disconnected);
        Self { tx }
    }

    /// Subscribe to canonical session updates.
    pub fn subscribe(&self) -> watch::Receiver<WalletSession> {
        self.tx.subscribe()
    }

    /// Current canonical session snapshot.
    pub fn session(&self) -> WalletSession {
        self.tx.borrow().clone()
    }

    /// Run one reconciliation cycle.
    ///
    /// Publishes the merged session only when it changed and returns
    /// the edge, if any. Calling again with the same inputs returns
    /// `SessionTransition::None`, so an edge is reported exactly once.
    pub fn reconcile(
        &self,
        primary: &SourceSnapshot,
        secondary: &SourceSnapshot,
    ) -> SessionTransition {
        let next = reconcile_sources(primary, secondary);
        let prev = self.tx.borrow().clone();
        if prev == next {
            return SessionTransition::None;
        }

        let transition = match (prev.is_connected(), next.is_connected()) {
            (false, true) => SessionTransition::Connected,
            (true, false) => SessionTransition::Disconnected,
            _ => SessionTransition::None,
        };

        match &next {
            WalletSession::Connected {
                address,
                chain_name,
            } => info!(
                address = %address.short(),
                chain = chain_name.as_deref().unwrap_or("unknown"),
                "Canonical session updated"
            ),
            WalletSession::Disconnected => debug!("Canonical session disconnected"),
        }

        self.tx.send_replace(next);
        transition
    }

    /// Ask the secondary connector modal to open.
    ///
    /// User cancellation and adapter rejection are logged and
    /// swallowed; the last-known session is never degraded by a
    /// failed connect attempt.
    pub async fn request_connect(&self, modal: &dyn ConnectorModal) {
        if let Err(err) = modal.open().await {
            warn!(error = %err, "Wallet connect request failed");
        }
    }
}

impl Default for ConnectionReconciler {
    fn default() -> Self {
        Self::new()
    }
}
