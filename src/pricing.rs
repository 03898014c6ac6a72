//! Pricing
//!
//! Row and cart total arithmetic. All monetary totals are rounded to two
//! decimal places with a single rule, half away from zero, so that every
//! view of the same cart agrees to the cent.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::cart::CartLine;

/// Decimal places used for every monetary total.
pub const MONEY_SCALE: u32 = 2;

/// Errors that can occur while totalling cart lines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A line's currency differs from the expected currency.
    #[error("line {0} has currency {1}, but the store uses {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),
}

/// Rounds a monetary amount to [`MONEY_SCALE`] decimals, half away from zero.
#[must_use]
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the total for one cart line: unit price times quantity.
#[must_use]
pub fn row_total(line: &CartLine) -> Money<'static, Currency> {
    let amount = round_amount(line.price().amount() * Decimal::from(line.cart_quantity()));

    Money::from_decimal(amount, line.price().currency())
}

/// Calculates the total of a list of cart lines in the given currency.
///
/// An empty list totals to zero.
///
/// # Errors
///
/// Returns [`PricingError::CurrencyMismatch`] if any line's price is not in
/// the given currency.
pub fn cart_total(
    lines: &[CartLine],
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let mut sum = Decimal::ZERO;

    for (i, line) in lines.iter().enumerate() {
        let line_currency = line.price().currency();

        if line_currency != currency {
            return Err(PricingError::CurrencyMismatch(
                i,
                line_currency.iso_alpha_code,
                currency.iso_alpha_code,
            ));
        }

        sum += *row_total(line).amount();
    }

    Ok(Money::from_decimal(round_amount(sum), currency))
}
