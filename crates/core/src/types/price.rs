//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in the store currency.
///
/// The store sells in Brazilian reais only, so the currency is fixed and the
/// type only carries the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Currency symbol prefixed to every displayed amount.
    pub const SYMBOL: &'static str = "R$";

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in centavos.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

/// Formats as `R$ 12.34`, always with two decimal places.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", Self::SYMBOL, self.0.round_dp(2))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::new(Decimal::new(499, 1)).to_string(), "R$ 49.90");
        assert_eq!(Price::from_cents(1234).to_string(), "R$ 12.34");
        assert_eq!(Price::new(Decimal::from(10)).to_string(), "R$ 10.00");
    }

    #[test]
    fn test_display_rounds_extra_precision() {
        assert_eq!(Price::new(Decimal::new(19_999, 3)).to_string(), "R$ 20.00");
    }
}
