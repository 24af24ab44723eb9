//! Cart line item type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartError;

/// One distinct product line in the cart.
///
/// The `name` is the entry's identity: no two entries in a cart share a
/// name, and adding a name that is already present increments its quantity
/// instead of appending. `quantity` is always at least 1; an entry that
/// would reach zero is removed from the cart rather than retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    name: String,
    price: Decimal,
    image: String,
    quantity: u32,
}

impl CartEntry {
    /// Create a new entry with quantity 1.
    ///
    /// The name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyName`] for a blank name and
    /// [`CartError::NegativePrice`] for a price below zero.
    pub fn new(name: &str, price: Decimal, image: &str) -> Result<Self, CartError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CartError::EmptyName);
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(CartError::NegativePrice);
        }
        Ok(Self {
            name: name.to_owned(),
            price,
            image: image.to_owned(),
            quantity: 1,
        })
    }

    /// The entry's display name, unique within its cart.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// URL or path of the display asset.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Current quantity, always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    pub(crate) fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }
}
