//! Shopping Trip Demo
//!
//! Walks the full store lifecycle: stock the catalog, reserve a few
//! products into the cart, confirm the payment and show the order history.
//!
//! Use `-c` to load a catalog fixture file instead of the seed catalog
//! Use `-p` to pick the payment method (default `Visa`)

use std::io;

use anyhow::Result;

use clap::Parser;
use storefront::{
    fixtures::{load_catalog, seed_catalog},
    orders::PaymentMethod,
    render::{write_cart, write_catalog, write_orders},
    store::Store,
    utils::DemoStoreArgs,
};

/// Shopping Trip Demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = DemoStoreArgs::parse();

    let catalog = match args.catalog.as_deref() {
        Some(path) => load_catalog(path)?,
        None => seed_catalog(),
    };
    let payment_method: PaymentMethod = args.payment_method.parse()?;

    let mut store = Store::with_catalog(catalog)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    println!("Catalog:");
    write_catalog(&mut handle, &store)?;

    for name in ["Giant Rubber Duck", "Giant Rubber Duck", "Dog Sunglasses"] {
        store.add_to_cart(name);
    }

    println!("\nCart:");
    write_cart(&mut handle, &store)?;

    store.complete_purchase(payment_method)?;

    println!("\nOrders:");
    write_orders(&mut handle, &store)?;

    println!("\nCatalog after checkout:");
    write_catalog(&mut handle, &store)?;

    Ok(())
}
