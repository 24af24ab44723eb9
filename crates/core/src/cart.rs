//! The ordered cart and its mutating operations.
//!
//! A [`Cart`] is an insertion-ordered list of [`CartEntry`] values. It
//! serializes transparently as a plain JSON list, which is the exact shape
//! persisted under the store's fixed key.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::CartEntry;

/// Errors from cart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// An item name was empty or all whitespace.
    #[error("item name must not be empty")]
    EmptyName,

    /// An item price was below zero.
    #[error("item price must not be negative")]
    NegativePrice,

    /// An index did not refer to an entry in the current list.
    #[error("index {index} is out of range for a cart of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered sequence of cart entries; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one unit of an item.
    ///
    /// If an entry with the same (trimmed) name exists its quantity is
    /// incremented; otherwise a new entry is appended with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyName`] or [`CartError::NegativePrice`] when
    /// the item fails validation; the cart is unchanged in that case.
    pub fn add(&mut self, name: &str, price: Decimal, image: &str) -> Result<(), CartError> {
        let entry = CartEntry::new(name, price, image)?;
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name() == entry.name()) {
            existing.increment();
        } else {
            self.entries.push(entry);
        }
        Ok(())
    }

    /// Set the quantity of the entry at `index`.
    ///
    /// The requested quantity is clamped to a minimum of 1; a non-positive
    /// request leaves the entry at quantity 1 rather than removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] when `index` does not refer to
    /// an entry; the cart is unchanged in that case.
    pub fn set_quantity(&mut self, index: usize, requested: i64) -> Result<(), CartError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;
        let quantity = u32::try_from(requested.max(1)).unwrap_or(u32::MAX);
        entry.set_quantity(quantity);
        Ok(())
    }

    /// Remove the entry at `index`; later entries shift one position earlier.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] when `index` does not refer to
    /// an entry; the cart is unchanged in that case.
    pub fn remove(&mut self, index: usize) -> Result<CartEntry, CartError> {
        let len = self.entries.len();
        if index >= len {
            return Err(CartError::IndexOutOfRange { index, len });
        }
        Ok(self.entries.remove(index))
    }

    /// `sum(price * quantity)` across all entries.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// `sum(quantity)` across all entries; this is the badge value.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0_u32, |sum, e| sum.saturating_add(e.quantity()))
    }
}
