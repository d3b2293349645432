//! Canonical wallet-connection session state.
//!
//! `WalletSession` is the single merged state the rest of the system
//! consumes. It has exactly one writer (the reconciler) and many readers.
//! Invariant: an address is present if and only if the session is
//! `Connected`.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wallet address (hex string, e.g. "0xAbC...").
///
/// Non-empty by construction. Doubles as the generation marker for
/// balance queries: a result is applied only while its address is
/// still the live one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        if address.is_empty() {
            return Err(CoreError::EmptyAddress);
        }
        Ok(Self(address))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened display form: first 8 and last 6 characters.
    ///
    /// Addresses shorter than that render unchanged. Counts chars,
    /// not bytes: adapters may hand us arbitrary strings, and a
    /// logging helper must never panic on a multi-byte address.
    pub fn short(&self) -> String {
        let count = self.0.chars().count();
        if count <= 14 {
            return self.0.clone();
        }
        let head: String = self.0.chars().take(8).collect();
        let tail: String = self.0.chars().skip(count - 6).collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Canonical wallet session.
///
/// Created as `Disconnected` at startup and mutated only by the
/// reconciler; UI code and observers hold read-only snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum WalletSession {
    /// No wallet connected.
    #[default]
    Disconnected,
    /// Wallet connected with a known address.
    Connected {
        /// Connected wallet address.
        address: WalletAddress,
        /// Chain name when the source reports one (e.g. "Polygon").
        chain_name: Option<String>,
    },
}

impl WalletSession {
    /// Build a connected session.
    pub fn connected(address: WalletAddress, chain_name: Option<String>) -> Self {
        Self::Connected {
            address,
            chain_name,
        }
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Current address, if connected.
    pub fn address(&self) -> Option<&WalletAddress> {
        match self {
            Self::Connected { address, .. } => Some(address),
            Self::Disconnected => None,
        }
    }

    /// Chain name, if connected and reported by the source.
    pub fn chain_name(&self) -> Option<&str> {
        match self {
            Self::Connected { chain_name, .. } => chain_name.as_deref(),
            Self::Disconnected => None,
        }
    }
}
