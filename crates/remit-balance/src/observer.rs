//! Race-safe balance observer.
//!
//! Each query is tagged with a generation marker: the address it was
//! issued for. A result is applied only while that address is still
//! the live one, so an in-flight query superseded by an address
//! change (or a disconnect) can never clobber the display.

use crate::provider::BalanceProvider;
use parking_lot::Mutex;
use remit_core::{Balance, WalletAddress, WalletSession};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Observes the canonical session and resolves balances for it.
///
/// Single writer of the `Balance` watch channel; UI readers
/// subscribe. Must be driven from within a tokio runtime (queries
/// run on spawned tasks).
pub struct BalanceObserver {
    provider: Arc<dyn BalanceProvider>,
    tx: watch::Sender<Balance>,
    /// Live address cell; doubles as the generation marker store.
    live: Arc<Mutex<Option<WalletAddress>>>,
}

impl BalanceObserver {
    pub fn new(provider: Arc<dyn BalanceProvider>) -> Self {
        let (tx, _rx) = watch::channel(Balance::Unknown);
        Self {
            provider,
            tx,
            live: Arc::new(Mutex::new(None)),
        }
    }

    /// Subscribe to balance updates.
    pub fn subscribe(&self) -> watch::Receiver<Balance> {
        self.tx.subscribe()
    }

    /// Current balance snapshot.
    pub fn balance(&self) -> Balance {
        self.tx.borrow().clone()
    }

    /// React to a (possibly unchanged) canonical session.
    ///
    /// - Disconnect resets to `Unknown` synchronously, without
    ///   waiting on any in-flight query.
    /// - A new address publishes `Pending` and issues a query.
    /// - An unchanged address is a no-op (no refetch).
    pub fn on_session_change(&self, session: &WalletSession) {
        match session {
            WalletSession::Disconnected => {
                let mut live = self.live.lock();
                if live.take().is_some() {
                    self.tx.send_replace(Balance::Unknown);
                }
            }
            WalletSession::Connected { address, .. } => {
                {
                    let mut live = self.live.lock();
                    if live.as_ref() == Some(address) {
                        return;
                    }
                    *live = Some(address.clone());
                }
                self.tx.send_replace(Balance::Pending);
                self.spawn_query(address.clone());
            }
        }
    }

    fn spawn_query(&self, address: WalletAddress) {
        let provider = Arc::clone(&self.provider);
        let live = Arc::clone(&self.live);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let result = provider.fetch(&address).await;

            // Generation check: apply only if this address is still live.
            let guard = live.lock();
            if guard.as_ref() != Some(&address) {
                debug!(address = %address.short(), "Discarding stale balance result");
                return;
            }

            match result {
                Ok(balance) => {
                    debug!(address = %address.short(), balance = %balance, "Balance resolved");
                    tx.send_replace(Balance::Resolved(balance));
                }
                Err(err) => {
                    warn!(address = %address.short(), error = %err, "Balance query failed");
                    tx.send_replace(Balance::Unknown);
                }
            }
        });
    }
}
