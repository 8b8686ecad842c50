//! Cart operation error types.

use thiserror::Error;

use shopverse_core::{LineError, ProductId, QuantityError};

/// Errors returned to callers of cart operations.
///
/// These are contract violations by the caller; when one is returned the
/// cart and its durable mirror are left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The line to add failed validation.
    #[error("invalid cart line: {0}")]
    InvalidLine(#[from] LineError),

    /// The requested quantity is not usable.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// Merging quantities would exceed the maximum quantity.
    #[error("quantity overflow for product {0}")]
    QuantityOverflow(ProductId),
}
