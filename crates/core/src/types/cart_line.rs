//! Cart line item.
//!
//! A line is a snapshot of a product taken when the shopper added it: the
//! name, unit price and image are copied at add-time and never re-fetched
//! from the catalog.
//!
//! # Wire format
//!
//! ```json
//! {"id": "1", "name": "Sample Product", "price": 29.99, "image": "/sample.jpg", "quantity": 1}
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{IdError, ProductId};
use super::price::{Price, PriceError};
use super::quantity::{Quantity, QuantityError};

/// Errors that can occur when building a [`CartLine`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The product id is invalid.
    #[error("invalid id: {0}")]
    Id(#[from] IdError),
    /// The display name is empty.
    #[error("line name cannot be empty")]
    EmptyName,
    /// The unit price is invalid.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),
    /// The quantity is invalid.
    #[error("invalid quantity: {0}")]
    Quantity(#[from] QuantityError),
}

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartLineRecord")]
pub struct CartLine {
    id: ProductId,
    name: String,
    price: Price,
    image: String,
    quantity: Quantity,
}

/// Unvalidated shape of a persisted line.
#[derive(Deserialize)]
struct CartLineRecord {
    id: ProductId,
    name: String,
    price: Price,
    image: String,
    quantity: Quantity,
}

impl TryFrom<CartLineRecord> for CartLine {
    type Error = LineError;

    fn try_from(record: CartLineRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.id,
            record.name,
            record.price,
            record.image,
            record.quantity,
        )
    }
}

impl CartLine {
    /// Create a new cart line.
    ///
    /// # Errors
    ///
    /// Returns `LineError::EmptyName` if `name` is blank.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        image: impl Into<String>,
        quantity: Quantity,
    ) -> Result<Self, LineError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LineError::EmptyName);
        }

        Ok(Self {
            id,
            name,
            price,
            image: image.into(),
            quantity,
        })
    }

    /// Build a line from unvalidated caller input.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn parse(
        id: &str,
        name: &str,
        price: Decimal,
        image: &str,
        quantity: i64,
    ) -> Result<Self, LineError> {
        let quantity = Quantity::try_from(quantity)?;
        Self::new(
            ProductId::parse(id)?,
            name,
            Price::new(price)?,
            image,
            quantity,
        )
    }

    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns this line with a different quantity; other fields are kept.
    #[must_use]
    pub fn with_quantity(self, quantity: Quantity) -> Self {
        Self { quantity, ..self }
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}
