//! Line item quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities must be at least one.
    #[error("quantity must be at least 1, got {0}")]
    NotPositive(i64),
    /// The value does not fit in a quantity.
    #[error("quantity must be at most {max}, got {value}")]
    TooLarge {
        /// The rejected value.
        value: i64,
        /// Maximum allowed quantity.
        max: u32,
    },
    /// Adding two quantities overflowed.
    #[error("quantity overflow")]
    Overflow,
}

/// A positive number of units of one product.
///
/// A cart line never carries zero or a negative quantity; those states are
/// expressed by the line not existing.
///
/// ```
/// use shopverse_core::Quantity;
///
/// assert_eq!(Quantity::new(3).unwrap().get(), 3);
/// assert!(Quantity::new(0).is_err());
/// assert!(Quantity::from_signed(-2).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(1);

    /// Create a quantity.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::NotPositive` for zero.
    pub const fn new(value: u32) -> Result<Self, QuantityError> {
        if value == 0 {
            return Err(QuantityError::NotPositive(0));
        }
        Ok(Self(value))
    }

    /// Interpret a signed caller-supplied quantity.
    ///
    /// Returns `Ok(None)` for zero and negative values, which callers treat as
    /// "no line".
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::TooLarge` if the value exceeds `u32::MAX`.
    pub fn from_signed(value: i64) -> Result<Option<Self>, QuantityError> {
        if value <= 0 {
            return Ok(None);
        }
        u32::try_from(value)
            .map(|v| Some(Self(v)))
            .map_err(|_| QuantityError::TooLarge {
                value,
                max: u32::MAX,
            })
    }

    /// Returns the number of units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add two quantities.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::Overflow` if the sum exceeds `u32::MAX`.
    pub const fn checked_add(self, other: Self) -> Result<Self, QuantityError> {
        match self.0.checked_add(other.0) {
            Some(sum) => Ok(Self(sum)),
            None => Err(QuantityError::Overflow),
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_signed(value)?.ok_or(QuantityError::NotPositive(value))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(Quantity::new(0), Err(QuantityError::NotPositive(0)));
        assert_eq!(Quantity::new(1).unwrap(), Quantity::ONE);
    }

    #[test]
    fn test_from_signed() {
        assert_eq!(Quantity::from_signed(0).unwrap(), None);
        assert_eq!(Quantity::from_signed(-5).unwrap(), None);
        assert_eq!(Quantity::from_signed(5).unwrap().unwrap().get(), 5);
        assert!(matches!(
            Quantity::from_signed(i64::from(u32::MAX) + 1),
            Err(QuantityError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_checked_add() {
        let a = Quantity::new(1).unwrap();
        let b = Quantity::new(2).unwrap();
        assert_eq!(a.checked_add(b).unwrap().get(), 3);

        let max = Quantity::new(u32::MAX).unwrap();
        assert_eq!(max.checked_add(a), Err(QuantityError::Overflow));
    }

    #[test]
    fn test_serde() {
        let q = Quantity::new(4).unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "4");
        assert_eq!(serde_json::from_str::<Quantity>("4").unwrap(), q);
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
        assert!(serde_json::from_str::<Quantity>("1.5").is_err());
    }
}
