//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use sari_sari_core::CartStore;

use crate::config::StorefrontConfig;
use crate::notify::Notifier;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// injected cart store and the notification presenter.
///
/// Every cart operation performs its load, transform, and save while holding
/// the store lock, which gives the sequence the run-to-completion atomicity
/// of a single-threaded UI loop.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Mutex<Box<dyn CartStore + Send>>,
    notifier: Notifier,
}

impl AppState {
    /// Create a new application state around an injected cart store.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Box<dyn CartStore + Send>) -> Self {
        let notifier = Notifier::new(config.notice_hide());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: Mutex::new(store),
                notifier,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store behind its operation lock.
    #[must_use]
    pub fn store(&self) -> &Mutex<Box<dyn CartStore + Send>> {
        &self.inner.store
    }

    /// Get a reference to the notification presenter.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }
}
