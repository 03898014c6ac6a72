//! Store
//!
//! The store state machine: one owned container holding the product
//! catalog, the active cart and the order history, driven by four
//! synchronous operations. Every operation runs to completion before the
//! next one can observe the state, so consumers only ever see consistent
//! snapshots.

use chrono::Local;
use rustc_hash::FxHashMap;
use rusty_money::iso::{self, Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::Cart,
    orders::{DATE_FORMAT, Order, PaymentMethod},
    pricing::{PricingError, cart_total},
    products::Product,
};

/// Errors related to store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A product's currency differs from the store currency.
    #[error("product {0} is priced in {1}, but the store uses {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// Wrapped pricing error from totalling the cart.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// The single source of truth for the shop.
///
/// Products, cart lines and orders are all kept in insertion order, which
/// is also their display order. Product lookups go through a name index;
/// name-based identity is a deliberate compatibility choice, and
/// `Store::position_of` is the one place it would change if products ever
/// grew a surrogate id.
#[derive(Debug)]
pub struct Store {
    products: Vec<Product>,
    index: FxHashMap<String, usize>,
    cart: Cart,
    orders: Vec<Order>,
    currency: &'static Currency,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store trading in euros.
    #[must_use]
    pub fn new() -> Self {
        Self::with_currency(iso::EUR)
    }

    /// Creates an empty store trading in the given currency.
    #[must_use]
    pub fn with_currency(currency: &'static Currency) -> Self {
        Self {
            products: Vec::new(),
            index: FxHashMap::default(),
            cart: Cart::new(),
            orders: Vec::new(),
            currency,
        }
    }

    /// Creates a store stocked with the given catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::CurrencyMismatch`] if any product is priced
    /// in a different currency than the first one.
    pub fn with_catalog(products: impl IntoIterator<Item = Product>) -> Result<Self, StoreError> {
        let mut products = products.into_iter();

        let mut store = match products.next() {
            Some(first) => {
                let mut store = Self::with_currency(first.price().currency());
                store.add_product(first)?;
                store
            }
            None => Self::new(),
        };

        for product in products {
            store.add_product(product)?;
        }

        Ok(store)
    }

    /// Appends a new product to the end of the catalog.
    ///
    /// Duplicate names are not rejected; the earlier entry keeps winning
    /// lookups, later ones only show up in catalog listings.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::CurrencyMismatch`] if the product's currency
    /// differs from the store currency.
    pub fn add_product(&mut self, product: Product) -> Result<(), StoreError> {
        let product_currency = product.price().currency();

        if product_currency != self.currency {
            return Err(StoreError::CurrencyMismatch(
                product.name().to_owned(),
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        debug!(name = product.name(), quantity = product.quantity(), "product added");

        self.index
            .entry(product.name().to_owned())
            .or_insert(self.products.len());
        self.products.push(product);

        Ok(())
    }

    /// Replaces a product's stock quantity.
    ///
    /// Silently ignores unknown names. Stock set this way is not reconciled
    /// with units already reserved in the cart; a manual adjustment while
    /// the cart holds the same product leaves the two views out of step.
    /// That mirrors the shipped behaviour and stays until a product
    /// decision says otherwise.
    pub fn set_quantity(&mut self, name: &str, quantity: u32) {
        match self.position_of(name) {
            Some(position) => {
                if let Some(product) = self.products.get_mut(position) {
                    debug!(name, quantity, "stock replaced");
                    product.set_quantity(quantity);
                }
            }
            None => debug!(name, "stock update for unknown product ignored"),
        }
    }

    /// Adjusts a product's stock by a signed delta, clamped at zero.
    ///
    /// This is the operation behind the inventory view's +1/-1 buttons.
    /// Silently ignores unknown names.
    pub fn adjust_quantity(&mut self, name: &str, delta: i64) {
        let Some(position) = self.position_of(name) else {
            debug!(name, delta, "stock adjustment for unknown product ignored");
            return;
        };

        if let Some(product) = self.products.get_mut(position) {
            let adjusted = i64::from(product.quantity()).saturating_add(delta).max(0);
            product.set_quantity(u32::try_from(adjusted).unwrap_or(u32::MAX));
            debug!(name, delta, quantity = product.quantity(), "stock adjusted");
        }
    }

    /// Moves one unit of the named product from stock into the cart.
    ///
    /// Decrements the product's stock by one and aggregates the unit into
    /// the cart: the existing line's quantity grows, or a new line is
    /// appended with a snapshot of the product's name and price. A no-op
    /// for unknown names and for products that are out of stock.
    pub fn add_to_cart(&mut self, name: &str) {
        let Some(position) = self.position_of(name) else {
            debug!(name, "add to cart for unknown product ignored");
            return;
        };

        let Some(product) = self.products.get_mut(position) else {
            return;
        };

        if product.quantity() == 0 {
            debug!(name, "add to cart ignored, product out of stock");
            return;
        }

        product.take_one();
        debug!(name, stock = product.quantity(), "unit moved into cart");

        let snapshot = product.clone();
        self.cart.add_one(&snapshot);
    }

    /// Converts the current cart into an order and clears the cart.
    ///
    /// The new order holds a deep copy of the cart lines, the rounded
    /// total, a formatted local timestamp and the payment method. Stock is
    /// untouched; it was already decremented when the units entered the
    /// cart. A no-op returning `Ok(None)` when the cart is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError::Pricing`] if the cart lines cannot be
    /// totalled in the store currency. This cannot happen for carts built
    /// through [`Store::add_to_cart`], which only snapshots prices already
    /// validated against the store currency.
    pub fn complete_purchase(
        &mut self,
        payment_method: PaymentMethod,
    ) -> Result<Option<&Order>, StoreError> {
        if self.cart.is_empty() {
            debug!("checkout on empty cart ignored");
            return Ok(None);
        }

        let total = cart_total(self.cart.lines(), self.currency)?;
        let items = self.cart.take_lines();
        let date = Local::now().format(DATE_FORMAT).to_string();

        debug!(
            %payment_method,
            lines = items.len(),
            total = %total.amount(),
            "purchase completed"
        );

        self.orders
            .push(Order::new(items, total, date, payment_method));

        Ok(self.orders.last())
    }

    /// Returns the catalog in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the active cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns the order history, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Returns the store currency.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Looks up a product's catalog position by name.
    ///
    /// The single lookup policy point: products are keyed by display name,
    /// and for duplicate names the first catalog entry wins.
    fn position_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use rusty_money::{
        Money,
        iso::{EUR, USD},
    };
    use testresult::TestResult;

    use crate::fixtures::seed_catalog;

    use super::*;

    fn seeded() -> Result<Store, StoreError> {
        Store::with_catalog(seed_catalog())
    }

    fn quantity_of(store: &Store, name: &str) -> Option<u32> {
        store
            .products()
            .iter()
            .find(|product| product.name() == name)
            .map(Product::quantity)
    }

    #[test]
    fn add_product_appends_to_the_catalog() -> TestResult {
        let mut store = seeded()?;

        store.add_product(Product::new("Test Item", Money::from_minor(1000, EUR), 5))?;

        assert_eq!(store.products().len(), 9);
        let last = store.products().last();
        assert!(
            matches!(last, Some(product) if product.name() == "Test Item"),
            "expected Test Item at the end of the catalog, got {last:?}"
        );

        Ok(())
    }

    #[test]
    fn add_product_rejects_foreign_currency() -> TestResult {
        let mut store = seeded()?;

        let result = store.add_product(Product::new("Eagle", Money::from_minor(100, USD), 1));

        assert_eq!(
            result,
            Err(StoreError::CurrencyMismatch(
                "Eagle".to_owned(),
                USD.iso_alpha_code,
                EUR.iso_alpha_code,
            ))
        );

        Ok(())
    }

    #[test]
    fn set_quantity_replaces_stock() -> TestResult {
        let mut store = seeded()?;

        store.set_quantity("Shark Repellent", 99);

        assert_eq!(quantity_of(&store, "Shark Repellent"), Some(99));

        Ok(())
    }

    #[test]
    fn set_quantity_ignores_unknown_products() -> TestResult {
        let mut store = seeded()?;

        store.set_quantity("Flux Capacitor", 3);

        assert_eq!(store.products().len(), 8);

        Ok(())
    }

    #[test]
    fn adjust_quantity_clamps_at_zero() -> TestResult {
        let mut store = seeded()?;

        store.adjust_quantity("Invisible Pen", -1);

        assert_eq!(quantity_of(&store, "Invisible Pen"), Some(0));

        Ok(())
    }

    #[test]
    fn adjust_quantity_moves_stock_up_and_down() -> TestResult {
        let mut store = seeded()?;

        store.adjust_quantity("Giant Rubber Duck", 1);
        assert_eq!(quantity_of(&store, "Giant Rubber Duck"), Some(16));

        store.adjust_quantity("Giant Rubber Duck", -2);
        assert_eq!(quantity_of(&store, "Giant Rubber Duck"), Some(14));

        Ok(())
    }

    // Scenario: one unit of the rubber duck moves into the cart.
    #[test]
    fn add_to_cart_reserves_one_unit() -> TestResult {
        let mut store = seeded()?;

        store.add_to_cart("Giant Rubber Duck");

        assert_eq!(quantity_of(&store, "Giant Rubber Duck"), Some(14));
        assert_eq!(store.cart().len(), 1);

        let quantities: Vec<u32> = store
            .cart()
            .iter()
            .map(crate::cart::CartLine::cart_quantity)
            .collect();
        assert_eq!(quantities, vec![1]);

        Ok(())
    }

    #[test]
    fn add_to_cart_twice_aggregates_into_one_line() -> TestResult {
        let mut store = seeded()?;

        store.add_to_cart("Giant Rubber Duck");
        store.add_to_cart("Giant Rubber Duck");

        assert_eq!(quantity_of(&store, "Giant Rubber Duck"), Some(13));
        assert_eq!(store.cart().len(), 1);

        let totals: Vec<_> = store.cart().iter().map(crate::pricing::row_total).collect();
        assert_eq!(totals, vec![Money::from_minor(9998, EUR)]);

        Ok(())
    }

    #[test]
    fn add_to_cart_ignores_unknown_products() -> TestResult {
        let mut store = seeded()?;

        store.add_to_cart("Flux Capacitor");

        assert!(store.cart().is_empty());

        Ok(())
    }

    #[test]
    fn add_to_cart_ignores_out_of_stock_products() -> TestResult {
        let mut store = seeded()?;

        store.add_to_cart("Invisible Pen");

        assert_eq!(quantity_of(&store, "Invisible Pen"), Some(0));
        assert!(store.cart().is_empty());

        Ok(())
    }

    #[test]
    fn complete_purchase_records_an_order_and_clears_the_cart() -> TestResult {
        let mut store = seeded()?;
        store.add_product(Product::new("Test Item", Money::from_minor(1000, EUR), 5))?;
        for _ in 0..3 {
            store.add_to_cart("Test Item");
        }

        let order = store
            .complete_purchase(PaymentMethod::Visa)?
            .ok_or("expected an order for a non-empty cart")?;

        assert_eq!(order.total(), &Money::from_minor(3000, EUR));
        assert_eq!(order.payment_method(), PaymentMethod::Visa);
        assert_eq!(order.items().len(), 1);

        assert!(store.cart().is_empty());
        assert_eq!(store.orders().len(), 1);
        assert_eq!(quantity_of(&store, "Test Item"), Some(2));

        Ok(())
    }

    #[test]
    fn complete_purchase_on_empty_cart_is_a_no_op() -> TestResult {
        let mut store = seeded()?;

        let order = store.complete_purchase(PaymentMethod::PayPal)?;

        assert!(order.is_none(), "expected no order for an empty cart");
        assert!(store.orders().is_empty());

        Ok(())
    }

    #[test]
    fn order_snapshot_is_independent_of_later_cart_activity() -> TestResult {
        let mut store = seeded()?;
        store.add_to_cart("Giant Rubber Duck");

        store.complete_purchase(PaymentMethod::Klarna)?;
        store.add_to_cart("Giant Rubber Duck");
        store.add_to_cart("Giant Rubber Duck");

        let first = store.orders().first().ok_or("expected a recorded order")?;
        let quantities: Vec<u32> = first
            .items()
            .iter()
            .map(crate::cart::CartLine::cart_quantity)
            .collect();
        assert_eq!(quantities, vec![1]);

        Ok(())
    }

    #[test]
    fn order_date_matches_the_declared_format() -> TestResult {
        let mut store = seeded()?;
        store.add_to_cart("Dog Sunglasses");

        let order = store
            .complete_purchase(PaymentMethod::MbWay)?
            .ok_or("expected an order")?;

        NaiveDateTime::parse_from_str(order.date(), DATE_FORMAT)?;

        Ok(())
    }

    #[test]
    fn stock_never_goes_negative_under_mixed_operations() -> TestResult {
        let mut store = seeded()?;

        for _ in 0..10 {
            store.add_to_cart("Shark Repellent");
        }
        store.adjust_quantity("Shark Repellent", -5);
        store.set_quantity("Shark Repellent", 0);
        store.adjust_quantity("Shark Repellent", -1);

        assert_eq!(quantity_of(&store, "Shark Repellent"), Some(0));

        Ok(())
    }

    #[test]
    fn manual_stock_adjustment_does_not_touch_the_cart() -> TestResult {
        // Known gap carried over from the shipped behaviour: stock replaced
        // while units sit in the cart is not reconciled with them.
        let mut store = seeded()?;
        store.add_to_cart("Giant Rubber Duck");

        store.set_quantity("Giant Rubber Duck", 100);

        assert_eq!(quantity_of(&store, "Giant Rubber Duck"), Some(100));
        let quantities: Vec<u32> = store
            .cart()
            .iter()
            .map(crate::cart::CartLine::cart_quantity)
            .collect();
        assert_eq!(quantities, vec![1]);

        Ok(())
    }
}
