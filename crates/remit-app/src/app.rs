//! Main application orchestration.
//!
//! Owns the reconciler, the balance observer, the connect notifier,
//! and the fee comparator. One update cycle:
//!
//! ```text
//! source update -> Application::handle_sources_update()
//!                      |
//!                reconciler.reconcile(primary, secondary)
//!                      |
//!            observer.on_session_change(session)
//!                      |
//!       [Disconnected -> Connected edge] notifier.notify(...)
//! ```

use crate::config::AppConfig;
use crate::error::AppResult;
use remit_balance::{BalanceObserver, BalanceProvider};
use remit_core::{Balance, CoreError, TransferAmount, WalletSession};
use remit_pricing::{FeeComparator, FeeComparison, RateTable};
use remit_session::{
    ConnectionReconciler, ConnectorModal, NotificationEmitter, NotificationSink, SessionTransition,
    SourceSnapshot,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Main application.
pub struct Application {
    reconciler: ConnectionReconciler,
    observer: BalanceObserver,
    notifier: NotificationEmitter,
    notice_duration: Duration,
    comparator: FeeComparator,
}

impl Application {
    /// Create the application from config and the two fire-and-forget
    /// collaborators (notification surface, balance-query service).
    pub fn new(
        config: AppConfig,
        sink: Arc<dyn NotificationSink>,
        provider: Arc<dyn BalanceProvider>,
    ) -> AppResult<Self> {
        let table = RateTable::try_from(config.pricing)?;

        Ok(Self {
            reconciler: ConnectionReconciler::new(),
            observer: BalanceObserver::new(provider),
            notifier: NotificationEmitter::new(sink),
            notice_duration: config.notification.duration(),
            comparator: FeeComparator::new(table),
        })
    }

    /// Run one reconciliation cycle over fresh source snapshots.
    ///
    /// Either source may have updated (or neither); the cycle is
    /// idempotent, so callers can invoke it on every upstream push
    /// without duplicating side effects.
    pub fn handle_sources_update(&self, primary: &SourceSnapshot, secondary: &SourceSnapshot) {
        let transition = self.reconciler.reconcile(primary, secondary);
        let session = self.reconciler.session();

        // Observer is fed every cycle: address switches inside a
        // connected session carry no edge but still need a refetch.
        self.observer.on_session_change(&session);

        if transition == SessionTransition::Connected {
            self.notifier
                .notify(&connect_message(&session), self.notice_duration);
        }
    }

    /// Ask the secondary connector modal to open.
    ///
    /// Failure is logged and swallowed; see
    /// `ConnectionReconciler::request_connect`.
    pub async fn request_connect(&self, modal: &dyn ConnectorModal) {
        self.reconciler.request_connect(modal).await;
    }

    /// Current canonical session snapshot.
    pub fn session(&self) -> WalletSession {
        self.reconciler.session()
    }

    /// Current balance snapshot.
    pub fn balance(&self) -> Balance {
        self.observer.balance()
    }

    /// Subscribe to canonical session updates.
    pub fn subscribe_session(&self) -> watch::Receiver<WalletSession> {
        self.reconciler.subscribe()
    }

    /// Subscribe to balance updates.
    pub fn subscribe_balance(&self) -> watch::Receiver<Balance> {
        self.observer.subscribe()
    }

    /// Fee comparison for an in-domain amount.
    pub fn compare(&self, amount: TransferAmount) -> FeeComparison {
        self.comparator.compare(amount)
    }

    /// Fee comparison for a raw amount; rejects out-of-domain values.
    pub fn compare_amount(&self, raw: i64) -> Result<FeeComparison, CoreError> {
        self.comparator.compare_amount(raw)
    }

    /// The fee comparator (for presentation callers).
    pub fn comparator(&self) -> &FeeComparator {
        &self.comparator
    }
}

/// Connect notification message, naming the chain when known.
fn connect_message(session: &WalletSession) -> String {
    format!(
        "Connected to {}!",
        session.chain_name().unwrap_or("Wallet")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use remit_core::WalletAddress;

    #[test]
    fn test_connect_message_names_chain() {
        let addr = WalletAddress::new("0xAAA").unwrap();
        let with_chain = WalletSession::connected(addr.clone(), Some("Polygon".to_string()));
        assert_eq!(connect_message(&with_chain), "Connected to Polygon!");

        let without_chain = WalletSession::connected(addr, None);
        assert_eq!(connect_message(&without_chain), "Connected to Wallet!");
    }
}
