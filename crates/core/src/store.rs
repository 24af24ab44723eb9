//! The key-value persistence seam for the cart.
//!
//! The cart lives as a serialized JSON list under one fixed key. The store
//! is injected into the storefront so the file-backed implementation can be
//! swapped for [`MemoryStore`] in tests.

use std::collections::HashMap;

use thiserror::Error;

use crate::cart::Cart;

/// The fixed key the serialized cart is stored under.
pub const CART_KEY: &str = "cart";

/// Errors from writing or clearing the persisted cart.
///
/// Loading never fails: absent or unparsable contents load as an empty cart.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read or write cart data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize cart data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value persistence for the cart.
pub trait CartStore {
    /// Read the cart under [`CART_KEY`].
    ///
    /// Returns an empty cart when the key is absent or its contents do not
    /// parse as an entry list. Never raises to the caller.
    fn load(&self) -> Cart;

    /// Serialize `cart` and write it under [`CART_KEY`], fully replacing
    /// prior contents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when serialization or the underlying write
    /// fails.
    fn save(&mut self, cart: &Cart) -> Result<(), StoreError>;

    /// Remove [`CART_KEY`] entirely. Clearing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the underlying removal fails.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-memory store used by unit and integration tests.
///
/// Holds the serialized JSON string in a key-value map, mirroring the
/// string-valued storage scope the file-backed store persists to disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw serialized value under [`CART_KEY`], if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.slots.get(CART_KEY).map(String::as_str)
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Cart {
        self.slots
            .get(CART_KEY)
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    fn save(&mut self, cart: &Cart) -> Result<(), StoreError> {
        let raw = serde_json::to_string(cart)?;
        self.slots.insert(CART_KEY.to_owned(), raw);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.slots.remove(CART_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn load_defaults_to_empty_when_key_is_absent() {
        let store = MemoryStore::new();
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_defaults_to_empty_on_unparsable_contents() {
        let mut store = MemoryStore::new();
        store
            .slots
            .insert(CART_KEY.to_owned(), "{not a list".to_owned());
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut cart = Cart::new();
        cart.add("Tee", Decimal::new(10000, 2), "/img/tee.png")
            .expect("add");

        let mut store = MemoryStore::new();
        store.save(&cart).expect("save");
        assert_eq!(store.load(), cart);
    }

    #[test]
    fn save_of_loaded_cart_is_byte_idempotent() {
        let mut cart = Cart::new();
        cart.add("Tee", Decimal::new(10000, 2), "/img/tee.png")
            .expect("add");
        cart.add("Dried Mangoes", Decimal::new(18500, 2), "/img/mango.png")
            .expect("add");

        let mut store = MemoryStore::new();
        store.save(&cart).expect("save");
        let first = store.raw().expect("stored").to_owned();

        let loaded = store.load();
        store.save(&loaded).expect("save again");
        assert_eq!(store.raw().expect("stored"), first);
    }

    #[test]
    fn save_fully_replaces_prior_contents() {
        let mut a = Cart::new();
        a.add("Tee", Decimal::new(10000, 2), "/img/tee.png")
            .expect("add");
        let mut b = Cart::new();
        b.add("Ube Halaya", Decimal::new(16000, 2), "/img/ube.png")
            .expect("add");

        let mut store = MemoryStore::new();
        store.save(&a).expect("save");
        store.save(&b).expect("save");
        assert_eq!(store.load(), b);
    }

    #[test]
    fn clear_removes_the_key_and_is_idempotent() {
        let mut cart = Cart::new();
        cart.add("Tee", Decimal::new(10000, 2), "/img/tee.png")
            .expect("add");

        let mut store = MemoryStore::new();
        store.save(&cart).expect("save");
        store.clear().expect("clear");
        assert!(store.raw().is_none());
        assert!(store.load().is_empty());

        store.clear().expect("clear of absent key succeeds");
    }
}
