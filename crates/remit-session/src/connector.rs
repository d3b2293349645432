//! Secondary connector-modal collaborator.

use crate::error::Result;
use async_trait::async_trait;

/// Connector-modal adapter (e.g. a WalletConnect-style modal).
///
/// `open` is user-driven: it may take arbitrarily long and may
/// reject (adapter error) or cancel (user dismissed the modal).
/// Opening an already-open modal must be a no-op, so repeated
/// connect requests are idempotent.
#[async_trait]
pub trait ConnectorModal: Send + Sync {
    /// Request the connector modal to open.
    async fn open(&self) -> Result<()>;
}
