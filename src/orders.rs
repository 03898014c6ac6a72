//! Orders
//!
//! Immutable records of completed checkouts and the accepted payment
//! methods.

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::cart::CartLine;

/// Timestamp format used for [`Order::date`].
pub const DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// A payment method accepted at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// MB WAY mobile payments.
    #[serde(rename = "MBWay")]
    MbWay,
    /// Klarna.
    Klarna,
    /// Multibanco reference payments.
    Multibanco,
    /// PayPal.
    PayPal,
    /// Visa card payment.
    Visa,
}

impl PaymentMethod {
    /// All accepted payment methods, in the order they are offered.
    pub const ALL: [Self; 5] = [
        Self::MbWay,
        Self::Klarna,
        Self::Multibanco,
        Self::PayPal,
        Self::Visa,
    ];

    /// Returns the display name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MbWay => "MBWay",
            Self::Klarna => "Klarna",
            Self::Multibanco => "Multibanco",
            Self::PayPal => "PayPal",
            Self::Visa => "Visa",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown payment method name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct ParsePaymentMethodError(pub String);

impl FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ParsePaymentMethodError(s.to_owned()))
    }
}

/// An immutable record of one completed checkout.
///
/// Holds a deep copy of the cart lines at the moment of purchase, the
/// rounded total, a formatted timestamp and the payment method. Orders are
/// only ever appended to the store's history, never changed or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    items: SmallVec<[CartLine; 4]>,
    total: Money<'static, Currency>,
    date: String,
    payment_method: PaymentMethod,
}

impl Order {
    /// Creates a new order from a cart snapshot.
    pub(crate) fn new(
        items: impl IntoIterator<Item = CartLine>,
        total: Money<'static, Currency>,
        date: String,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            items: items.into_iter().collect(),
            total,
            date,
            payment_method,
        }
    }

    /// Returns the purchased lines in the order they appeared in the cart.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Returns the order total.
    pub fn total(&self) -> &Money<'static, Currency> {
        &self.total
    }

    /// Returns the creation timestamp, formatted with [`DATE_FORMAT`].
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the payment method used at checkout.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn payment_methods_display_their_exact_names() {
        let names: Vec<String> = PaymentMethod::ALL
            .into_iter()
            .map(|method| method.to_string())
            .collect();

        assert_eq!(
            names,
            vec!["MBWay", "Klarna", "Multibanco", "PayPal", "Visa"]
        );
    }

    #[test]
    fn payment_methods_parse_from_their_display_names() -> TestResult {
        for method in PaymentMethod::ALL {
            let parsed: PaymentMethod = method.as_str().parse()?;
            assert_eq!(parsed, method);
        }

        Ok(())
    }

    #[test]
    fn unknown_payment_method_fails_to_parse() {
        let result = "Cheque".parse::<PaymentMethod>();

        assert_eq!(
            result,
            Err(ParsePaymentMethodError("Cheque".to_owned())),
            "expected an unknown payment method error"
        );
    }

    #[test]
    fn payment_method_serde_uses_display_names() -> TestResult {
        let yaml = serde_norway::to_string(&PaymentMethod::MbWay)?;

        assert_eq!(yaml.trim(), "MBWay");

        let parsed: PaymentMethod = serde_norway::from_str("Multibanco")?;
        assert_eq!(parsed, PaymentMethod::Multibanco);

        Ok(())
    }
}
