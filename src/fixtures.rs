//! Fixtures
//!
//! The built-in seed catalog and a YAML loader for custom catalogs.

use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;
use thiserror::Error;

use crate::products::Product;

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading a fixture file.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format.
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid stock quantity.
    #[error("Invalid stock quantity: {0}")]
    InvalidQuantity(String),

    /// Unknown currency code.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Wrapper for a catalog in YAML.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in display order.
    pub products: Vec<ProductFixture>,
}

/// One product entry in a catalog fixture.
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name.
    pub name: String,

    /// Product price (e.g., "49.99 EUR").
    pub price: String,

    /// Stock quantity; fractional values are truncated.
    pub quantity: Decimal,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;
        let quantity = parse_quantity(fixture.quantity)?;

        Ok(Product::new(
            fixture.name,
            Money::from_minor(minor_units, currency),
            quantity,
        ))
    }
}

/// Parse a price string (e.g., "49.99 EUR") into minor units and currency.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code is
/// not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = iso::find(currency_code)
        .ok_or_else(|| FixtureError::UnknownCurrency((*currency_code).to_string()))?;

    Ok((minor_units, currency))
}

/// Coerce a fixture quantity to a non-negative whole number of units.
///
/// Fractional input is truncated, matching the original inventory form's
/// integer parsing. Negative quantities are rejected.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidQuantity`] if the quantity is negative or
/// too large for a stock count.
pub fn parse_quantity(quantity: Decimal) -> Result<u32, FixtureError> {
    if quantity.is_sign_negative() {
        return Err(FixtureError::InvalidQuantity(quantity.to_string()));
    }

    quantity
        .trunc()
        .to_u32()
        .ok_or_else(|| FixtureError::InvalidQuantity(quantity.to_string()))
}

/// Parse a catalog from a YAML string.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed or any entry has an
/// invalid price, quantity or currency.
pub fn catalog_from_str(contents: &str) -> Result<Vec<Product>, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(contents)?;

    fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect()
}

/// Load a catalog from a YAML fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, FixtureError> {
    let contents = fs::read_to_string(path)?;

    catalog_from_str(&contents)
}

/// The catalog every fresh store starts from.
///
/// These eight entries are fixtures for the end-to-end flows; names, prices
/// and quantities must stay exactly as shipped.
#[must_use]
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new(
            "Lightsaber (Star Wars)",
            Money::from_minor(999_999, iso::EUR),
            2,
        ),
        Product::new("Giant Rubber Duck", Money::from_minor(4999, iso::EUR), 15),
        Product::new("Shark Repellent", Money::from_minor(29_999, iso::EUR), 5),
        Product::new(
            "Aluminum Helmet for Protection Against Alien Mind Control",
            Money::from_minor(1999, iso::EUR),
            50,
        ),
        Product::new(
            "Sonic Screwdriver (Doctor Who)",
            Money::from_minor(7999, iso::EUR),
            7,
        ),
        Product::new("Bacon-Scented Candle", Money::from_minor(1499, iso::EUR), 20),
        Product::new("Invisible Pen", Money::from_minor(999, iso::EUR), 0),
        Product::new("Dog Sunglasses", Money::from_minor(2499, iso::EUR), 12),
    ]
}
