//! Products
//!
//! Catalog entries with a display name, an immutable price and a mutable
//! stock quantity.

use rusty_money::{Money, iso::Currency};

/// A catalog entry.
///
/// The name doubles as the product's identity throughout the store: cart
/// lines and stock adjustments are matched by name, not by a surrogate id.
/// The price is fixed at creation; only the stock quantity changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Money<'static, Currency>,
    quantity: u32,
}

impl Product {
    /// Creates a new product with the given name, price and stock quantity.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Money<'static, Currency>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product price.
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Returns the units currently in stock.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Replaces the stock quantity.
    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Removes one unit from stock, stopping at zero.
    pub(crate) fn take_one(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }
}
