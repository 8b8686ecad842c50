//! CLI command implementations.
//!
//! Commands render their output to a `String` so they can be tested without
//! capturing stdout.

pub mod cart;
pub mod products;

use thiserror::Error;

use shopverse_core::{IdError, PriceError, ProductId};
use shopverse_storefront::CartError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Product ID argument is not a valid ID.
    #[error("Invalid product id: {0}")]
    InvalidId(#[from] IdError),

    /// No product in the catalog has this ID.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// Price argument is not a valid price.
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// Rating argument is outside 0-5.
    #[error("Invalid rating: {0}. Ratings range from 0 to 5")]
    InvalidRating(f32),

    /// The cart rejected the operation.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Rendering JSON output failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
