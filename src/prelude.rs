//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartLine},
    fixtures::{FixtureError, load_catalog, seed_catalog},
    orders::{DATE_FORMAT, Order, ParsePaymentMethodError, PaymentMethod},
    pricing::{PricingError, cart_total, row_total},
    products::Product,
    render::{RenderError, format_amount, line_label, total_label},
    store::{Store, StoreError},
};
