//! Product identifier type.
//!
//! Product IDs are opaque strings issued by the catalog. The cart keys its
//! lines by product ID, so two lines with equal IDs are the same product.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty or only whitespace.
    #[error("product id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("product id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// An opaque product identifier.
///
/// ## Constraints
///
/// - Must contain at least one non-whitespace character
/// - Length: at most 128 characters
///
/// ## Examples
///
/// ```
/// use shopverse_core::ProductId;
///
/// assert!(ProductId::parse("1").is_ok());
/// assert!(ProductId::parse("sku-4821").is_ok());
///
/// assert!(ProductId::parse("").is_err());
/// assert!(ProductId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Maximum length of a product ID.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or longer than 128 characters.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.trim().is_empty() {
            return Err(IdError::Empty);
        }

        if s.chars().count() > Self::MAX_LENGTH {
            return Err(IdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
