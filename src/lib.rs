//! Storefront
//!
//! Storefront is an in-memory shop state engine: a seeded product catalog,
//! an aggregating cart and an append-only order history, driven by four
//! synchronous operations (add product, adjust stock, add to cart, complete
//! purchase).

pub mod cart;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod render;
pub mod store;
pub mod utils;
