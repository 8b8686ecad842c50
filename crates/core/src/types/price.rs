//! Type-safe price representation using decimal arithmetic.
//!
//! The storefront sells in a single currency, so a price is just a
//! non-negative amount in the currency's standard unit (dollars, not cents).
//! On the wire a price is a plain JSON number, e.g. `29.99`.
//!
//! JSON numbers are read and written as `f64`, so a price is limited to
//! [`Price::MAX_SCALE`] decimal places and an amount below [`Price::LIMIT`].
//! Every such value has at most 13 significant digits and comes back from
//! storage unchanged.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::quantity::Quantity;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Prices cannot be negative.
    #[error("price cannot be negative, got {0}")]
    Negative(Decimal),

    /// More decimal places than a stored price keeps.
    #[error("price {0} has more than {max} decimal places", max = Price::MAX_SCALE)]
    TooPrecise(Decimal),

    /// Amount too large to store exactly.
    #[error("price {0} must be below {limit}", limit = Price::LIMIT)]
    TooLarge(Decimal),
}

/// A non-negative unit price.
///
/// ```
/// use rust_decimal::Decimal;
/// use shopverse_core::Price;
///
/// let price = Price::new(Decimal::new(2999, 2)).unwrap();
/// assert_eq!(price.display(), "$29.99");
/// assert!(Price::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Most decimal places a price may carry.
    pub const MAX_SCALE: u32 = 4;

    /// Exclusive upper bound on the amount.
    pub const LIMIT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

    /// Create a new price.
    ///
    /// Trailing zeros are dropped, so `29.990` and `29.99` are the same price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if the amount is below zero,
    /// `PriceError::TooPrecise` if it has more than [`Self::MAX_SCALE`]
    /// decimal places, and `PriceError::TooLarge` if it is not below
    /// [`Self::LIMIT`].
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        let amount = amount.normalize();
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount.scale() > Self::MAX_SCALE {
            return Err(PriceError::TooPrecise(amount));
        }
        if amount >= Self::LIMIT {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if `cents` is below zero and
    /// `PriceError::TooLarge` if the amount reaches [`Self::LIMIT`].
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Decimal {
        self.0 * Decimal::from(quantity.get())
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(self) -> String {
        format_amount(self.0)
    }
}

/// Format a decimal amount the way prices are shown to shoppers.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}
