//! One-shot connect notification with auto-dismiss.
//!
//! At most one active notification at a time: a new `notify` call
//! replaces the message and resets the dismissal timer instead of
//! queuing a duplicate.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::debug;

/// Notification surface collaborator.
///
/// `show` replaces any currently visible message; `dismiss` hides it.
/// Both are fire-and-forget from the emitter's point of view.
pub trait NotificationSink: Send + Sync {
    fn show(&self, message: &str);
    fn dismiss(&self);
}

/// Transient notification emitter.
///
/// Guarantees the message disappears after the configured duration
/// even with no further input, by arming a dismissal timer task on
/// every `notify`. Must be called from within a tokio runtime.
pub struct NotificationEmitter {
    sink: Arc<dyn NotificationSink>,
    /// Abort handle for the pending dismissal timer, if any.
    pending: Mutex<Option<AbortHandle>>,
}

impl NotificationEmitter {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            sink,
            pending: Mutex::new(None),
        }
    }

    /// Show a notification and arm its auto-dismiss timer.
    ///
    /// Supersedes any pending dismissal: the previous timer is
    /// aborted before the new one is armed, so the notification
    /// stays visible for a full duration from now.
    pub fn notify(&self, message: &str, duration: Duration) {
        if let Some(prev) = self.pending.lock().take() {
            debug!("Superseding pending notification dismissal");
            prev.abort();
        }

        self.sink.show(message);

        let sink = Arc::clone(&self.sink);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            sink.dismiss();
        });
        *self.pending.lock() = Some(handle.abort_handle());
    }
}
