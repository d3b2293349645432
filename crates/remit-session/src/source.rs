//! Wallet-state source snapshots.
//!
//! Each upstream adapter (primary wallet library, secondary
//! connector modal) pushes plain snapshots of its own view. The
//! reconciler merges a pair of these into the canonical session.

use remit_core::WalletAddress;
use serde::{Deserialize, Serialize};

/// One source's view of the wallet connection.
///
/// `connected` and `address` are reported independently by real
/// adapters, so both combinations short of the invariant can occur
/// here; the reconciler restores the invariant when merging.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceSnapshot {
    /// Source reports an active connection.
    pub connected: bool,
    /// Address the source currently exposes, if any.
    pub address: Option<WalletAddress>,
    /// Chain name, for sources that report one.
    pub chain_name: Option<String>,
}

impl SourceSnapshot {
    /// Snapshot of a disconnected source.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// Snapshot of a connected source.
    pub fn connected(address: WalletAddress, chain_name: Option<String>) -> Self {
        Self {
            connected: true,
            address: Some(address),
            chain_name,
        }
    }
}
