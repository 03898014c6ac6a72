//! Render
//!
//! Text views of the store state and the display strings the end-to-end
//! flows assert on. Amounts always carry exactly two decimals, cart and
//! order lines read `"<quantity> x <name>"`, and totals read
//! `"Total: €<amount>"`.

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{builder::Builder, settings::Style};
use thiserror::Error;

use crate::{
    cart::CartLine,
    orders::Order,
    pricing::{cart_total, row_total},
    store::Store,
};

/// Errors that can occur while writing a view.
#[derive(Debug, Error)]
pub enum RenderError {
    /// IO error writing the view.
    #[error("IO error")]
    Io(#[from] io::Error),

    /// Wrapped pricing error from totalling the cart.
    #[error(transparent)]
    Pricing(#[from] crate::pricing::PricingError),
}

/// Formats a monetary amount with exactly two decimals, e.g. `49.99`.
#[must_use]
pub fn format_amount(money: &Money<'static, Currency>) -> String {
    format!("{:.2}", money.amount())
}

/// Formats a monetary amount with its currency symbol, e.g. `€49.99`.
#[must_use]
pub fn format_symbol_amount(money: &Money<'static, Currency>) -> String {
    format!("{}{}", money.currency().symbol, format_amount(money))
}

/// Formats a cart or order line label, e.g. `2 x Giant Rubber Duck`.
#[must_use]
pub fn line_label(line: &CartLine) -> String {
    format!("{} x {}", line.cart_quantity(), line.name())
}

/// Formats a total label, e.g. `Total: €99.98`.
#[must_use]
pub fn total_label(total: &Money<'static, Currency>) -> String {
    format!("Total: {}", format_symbol_amount(total))
}

/// Writes the catalog view: one row per product, in catalog order.
///
/// # Errors
///
/// Returns a [`RenderError`] if the view cannot be written.
pub fn write_catalog(out: &mut impl io::Write, store: &Store) -> Result<(), RenderError> {
    let mut builder = Builder::default();
    builder.push_record(["Product", "Price", "Stock"]);

    for product in store.products() {
        builder.push_record([
            product.name().to_string(),
            format_symbol_amount(product.price()),
            product.quantity().to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Writes the cart view: one row per line plus the running total.
///
/// # Errors
///
/// Returns a [`RenderError`] if the cart cannot be totalled or the view
/// cannot be written.
pub fn write_cart(out: &mut impl io::Write, store: &Store) -> Result<(), RenderError> {
    if store.cart().is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    let mut builder = Builder::default();
    builder.push_record(["Item", "Unit Price", "Row Total"]);

    for line in store.cart().iter() {
        builder.push_record([
            line_label(line),
            format_symbol_amount(line.price()),
            format_symbol_amount(&row_total(line)),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::sharp());

    let total = cart_total(store.cart().lines(), store.currency())?;

    writeln!(out, "{table}")?;
    writeln!(out, "{}", total_label(&total))?;

    Ok(())
}

/// Writes the order history view, oldest order first.
///
/// # Errors
///
/// Returns a [`RenderError`] if the view cannot be written.
pub fn write_orders(out: &mut impl io::Write, store: &Store) -> Result<(), RenderError> {
    if store.orders().is_empty() {
        writeln!(out, "No orders registered.")?;
        return Ok(());
    }

    for order in store.orders() {
        write_order(out, order)?;
    }

    Ok(())
}

fn write_order(out: &mut impl io::Write, order: &Order) -> Result<(), RenderError> {
    writeln!(out, "Date: {}", order.date())?;
    writeln!(out, "Payment Method: {}", order.payment_method())?;

    for line in order.items() {
        writeln!(
            out,
            "  {}  {}",
            line_label(line),
            format_symbol_amount(&row_total(line))
        )?;
    }

    writeln!(out, "{}", total_label(order.total()))?;

    Ok(())
}
