//! File-backed cart store.
//!
//! Persists the serialized entry list as `<data_dir>/cart.json`, the
//! storefront's stand-in for a browser storage scope. Reads that fail to
//! parse fall back to an empty cart; the contents are never merged, every
//! save fully replaces the file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use sari_sari_core::{CART_KEY, Cart, CartStore, StoreError};

/// Cart store persisting to a JSON file under the configured data directory.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store persisting to `<data_dir>/cart.json`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{CART_KEY}.json")),
        }
    }

    /// The file the cart is persisted to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Cart {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "stored cart does not parse, starting empty"
                );
                Cart::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Cart::new(),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "stored cart is unreadable, starting empty"
                );
                Cart::new()
            }
        }
    }

    fn save(&mut self, cart: &Cart) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(cart)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
