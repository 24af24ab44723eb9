//! Transient notification presenter.
//!
//! Holds the single popup message and its auto-hide timer. Re-notifying
//! before the delay elapses cancels the pending hide and re-arms it, so at
//! most one hide timer is ever pending and a later message immediately
//! replaces an unshown one. There is no queue.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// The popup notification region and its dismissal timer.
pub struct Notifier {
    inner: Arc<NotifierInner>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

struct NotifierInner {
    message: Mutex<Option<String>>,
    /// Bumped on every notify; a hide task only clears the message it was
    /// armed for.
    epoch: AtomicU64,
    hide_after: Duration,
}

impl Notifier {
    /// Create a presenter whose messages auto-hide after `hide_after`.
    #[must_use]
    pub fn new(hide_after: Duration) -> Self {
        Self {
            inner: Arc::new(NotifierInner {
                message: Mutex::new(None),
                epoch: AtomicU64::new(0),
                hide_after,
            }),
            pending: Mutex::new(None),
        }
    }

    /// Show `message`, replacing any currently visible one, and re-arm the
    /// hide timer.
    pub async fn notify(&self, message: impl Into<String>) {
        let epoch = self.inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        *self.inner.message.lock().await = Some(message.into());

        let mut pending = self.pending.lock().await;
        if let Some(handle) = pending.take() {
            handle.abort();
        }
        let inner = Arc::clone(&self.inner);
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.hide_after).await;
            // A newer notification may have replaced this one while we slept.
            if inner.epoch.load(Ordering::SeqCst) == epoch {
                *inner.message.lock().await = None;
            }
        }));
    }

    /// The currently visible message, if the hide timer has not fired yet.
    pub async fn current(&self) -> Option<String> {
        self.inner.message.lock().await.clone()
    }

    /// Abort the pending hide without touching the visible message.
    pub async fn cancel(&self) {
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
        }
    }
}
