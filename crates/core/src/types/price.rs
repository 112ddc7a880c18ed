//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are plain amounts in the shop's currency. Formatting (currency
//! symbol, digit grouping) belongs to whatever renders them.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative price amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole-unit amount.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Apply a percentage discount.
    ///
    /// `price - price * discount / 100`, computed exactly. A zero discount
    /// returns the price unchanged.
    #[must_use]
    pub fn discounted(self, discount: Discount) -> Self {
        if !discount.is_active() {
            return self;
        }
        let reduction = self.0 * Decimal::from(discount.percent()) / Decimal::ONE_HUNDRED;
        Self(self.0 - reduction)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// An integer percentage discount (0-100).
///
/// The store does not range-check the value; anything that fits in a `u8`
/// is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Discount(u8);

impl Discount {
    /// No discount.
    pub const NONE: Self = Self(0);

    /// Create a discount from a whole percentage.
    #[must_use]
    pub const fn percent_off(percent: u8) -> Self {
        Self(percent)
    }

    /// The discount as a whole percentage.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.0
    }

    /// Whether this discount reduces the price at all.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discounted_price() {
        let price = Price::from_units(50_000);
        assert_eq!(
            price.discounted(Discount::percent_off(5)),
            Price::from_units(47_500)
        );
    }

    #[test]
    fn test_zero_discount_is_identity() {
        let price = Price::new(Decimal::new(1_234_567, 2));
        assert_eq!(price.discounted(Discount::NONE), price);
        assert!(!Discount::NONE.is_active());
    }

    #[test]
    fn test_fractional_result_is_exact() {
        // 1500 at 15% off is 1275; 8000 at 12% off is 7040
        assert_eq!(
            Price::from_units(1_500).discounted(Discount::percent_off(15)),
            Price::from_units(1_275)
        );
        assert_eq!(
            Price::from_units(8_000).discounted(Discount::percent_off(12)),
            Price::from_units(7_040)
        );
        // 999 at 10% off keeps its fraction
        assert_eq!(
            Price::from_units(999).discounted(Discount::percent_off(10)),
            Price::new(Decimal::new(8_991, 1))
        );
    }

    #[test]
    fn test_full_discount_is_free() {
        let price = Price::from_units(120_000);
        assert_eq!(price.discounted(Discount::percent_off(100)).amount(), Decimal::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_units(35_000).to_string(), "35000");
        assert_eq!(Discount::percent_off(8).to_string(), "8%");
    }

    #[test]
    fn test_price_deserializes_from_number() {
        let price: Price = serde_json::from_str("50000").expect("deserialize");
        assert_eq!(price, Price::from_units(50_000));

        let discount: Discount = serde_json::from_str("5").expect("deserialize");
        assert_eq!(discount.percent(), 5);
    }
}
