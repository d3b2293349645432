//! End-to-end flow over the wired application: source updates through
//! reconciliation, balance resolution, and the one-shot connect
//! notification.

use async_trait::async_trait;
use parking_lot::Mutex;
use remit_app::{AppConfig, Application};
use remit_balance::{BalanceError, BalanceProvider};
use remit_core::{Balance, TokenBalance, WalletAddress, WalletSession};
use remit_session::{ConnectorModal, NotificationSink, SessionError, SourceSnapshot};
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct RecordingSink {
    shown: Mutex<Vec<String>>,
    dismissed: AtomicUsize,
}

impl NotificationSink for RecordingSink {
    fn show(&self, message: &str) {
        self.shown.lock().push(message.to_string());
    }

    fn dismiss(&self) {
        self.dismissed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Provider that resolves instantly with a fixed balance.
struct InstantProvider;

#[async_trait]
impl BalanceProvider for InstantProvider {
    async fn fetch(&self, _address: &WalletAddress) -> Result<TokenBalance, BalanceError> {
        Ok(TokenBalance::new(dec!(12.5), "MATIC"))
    }
}

struct CancellingModal {
    opens: AtomicUsize,
}

#[async_trait]
impl ConnectorModal for CancellingModal {
    async fn open(&self) -> Result<(), SessionError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        Err(SessionError::ConnectCancelled)
    }
}

fn addr(s: &str) -> WalletAddress {
    WalletAddress::new(s).unwrap()
}

fn app(sink: Arc<RecordingSink>) -> Application {
    Application::new(AppConfig::default(), sink, Arc::new(InstantProvider)).unwrap()
}

async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn connect_cycle_notifies_once_and_resolves_balance() {
    let sink = Arc::new(RecordingSink::default());
    let app = app(sink.clone());

    assert_eq!(app.session(), WalletSession::Disconnected);
    assert_eq!(app.balance(), Balance::Unknown);

    // Secondary (connector modal) reports the connection first.
    let primary = SourceSnapshot::disconnected();
    let secondary = SourceSnapshot::connected(addr("0xBBB"), None);
    app.handle_sources_update(&primary, &secondary);

    assert_eq!(app.session().address().unwrap().as_str(), "0xBBB");
    assert_eq!(*sink.shown.lock(), vec!["Connected to Wallet!"]);

    settle().await;
    assert_eq!(
        app.balance().resolved().unwrap(),
        &TokenBalance::new(dec!(12.5), "MATIC")
    );

    // Re-pushing identical snapshots fires no second notification
    // and keeps the resolved balance.
    app.handle_sources_update(&primary, &secondary);
    assert_eq!(sink.shown.lock().len(), 1);
    assert!(app.balance().is_resolved());
}

#[tokio::test]
async fn primary_takeover_keeps_session_without_renotifying() {
    let sink = Arc::new(RecordingSink::default());
    let app = app(sink.clone());

    let secondary = SourceSnapshot::connected(addr("0xBBB"), None);
    app.handle_sources_update(&SourceSnapshot::disconnected(), &secondary);
    assert_eq!(sink.shown.lock().len(), 1);

    // Primary comes up with its own address; precedence switches the
    // canonical address without crossing a connect edge.
    let primary = SourceSnapshot::connected(addr("0xAAA"), Some("Polygon".to_string()));
    app.handle_sources_update(&primary, &secondary);

    assert_eq!(app.session().address().unwrap().as_str(), "0xAAA");
    assert_eq!(app.session().chain_name(), Some("Polygon"));
    assert_eq!(sink.shown.lock().len(), 1);
}

#[tokio::test]
async fn disconnect_resets_balance_and_allows_renotify() {
    let sink = Arc::new(RecordingSink::default());
    let app = app(sink.clone());

    let secondary = SourceSnapshot::connected(addr("0xBBB"), None);
    app.handle_sources_update(&SourceSnapshot::disconnected(), &secondary);
    settle().await;
    assert!(app.balance().is_resolved());

    app.handle_sources_update(&SourceSnapshot::disconnected(), &SourceSnapshot::disconnected());
    assert_eq!(app.session(), WalletSession::Disconnected);
    assert_eq!(app.balance(), Balance::Unknown);

    // A fresh connect edge notifies again.
    app.handle_sources_update(&SourceSnapshot::disconnected(), &secondary);
    assert_eq!(sink.shown.lock().len(), 2);
}

#[tokio::test]
async fn cancelled_connect_request_is_swallowed() {
    let sink = Arc::new(RecordingSink::default());
    let app = app(sink.clone());

    let modal = CancellingModal {
        opens: AtomicUsize::new(0),
    };
    app.request_connect(&modal).await;
    app.request_connect(&modal).await;

    assert_eq!(modal.opens.load(Ordering::SeqCst), 2);
    assert_eq!(app.session(), WalletSession::Disconnected);
    assert!(sink.shown.lock().is_empty());
}

#[tokio::test]
async fn fee_comparison_available_independent_of_session() {
    let sink = Arc::new(RecordingSink::default());
    let app = app(sink);

    // No wallet connected; pricing still works.
    let comparison = app.compare_amount(1_000).unwrap();
    assert_eq!(comparison.savings.inner(), dec!(75.00));
    assert!(app.compare_amount(50).is_err());
}
