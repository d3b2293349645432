//! Balance-query collaborator.

use crate::error::Result;
use async_trait::async_trait;
use remit_core::{TokenBalance, WalletAddress};

/// External balance-query service.
///
/// May be slow or fail; the observer cancels by discarding the
/// result, so implementations need no cancellation support of
/// their own.
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Fetch the balance for an address.
    async fn fetch(&self, address: &WalletAddress) -> Result<TokenBalance>;
}
