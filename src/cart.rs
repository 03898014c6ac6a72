//! Cart
//!
//! An aggregating cart: one line per product name, in first-added order.

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};

use crate::products::Product;

/// One product's reserved units in the cart.
///
/// The price is a snapshot taken when the line was created; later catalog
/// changes never alter a line that is already in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    name: String,
    price: Money<'static, Currency>,
    cart_quantity: u32,
}

impl CartLine {
    /// Returns the product name for this line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price snapshotted when the line was created.
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Returns the number of units reserved in the cart.
    pub fn cart_quantity(&self) -> u32 {
        self.cart_quantity
    }
}

/// The active cart.
///
/// Lines are kept in first-added order for display; lookups go through a
/// name index so repeated adds aggregate instead of duplicating lines.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    index: FxHashMap<String, usize>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the given product to the cart.
    ///
    /// Increments the existing line for the product's name, or appends a new
    /// line with a snapshot of the product's name and price.
    pub(crate) fn add_one(&mut self, product: &Product) {
        if let Some(&position) = self.index.get(product.name()) {
            if let Some(line) = self.lines.get_mut(position) {
                line.cart_quantity += 1;
                return;
            }
        }

        self.index
            .insert(product.name().to_owned(), self.lines.len());
        self.lines.push(CartLine {
            name: product.name().to_owned(),
            price: *product.price(),
            cart_quantity: 1,
        });
    }

    /// Empties the cart, returning the lines in first-added order.
    pub(crate) fn take_lines(&mut self) -> Vec<CartLine> {
        self.index.clear();
        std::mem::take(&mut self.lines)
    }

    /// Returns the cart lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterates over the cart lines in first-added order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Returns the number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
