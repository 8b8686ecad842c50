//! Core types for ShopVerse.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart_line;
pub mod id;
pub mod price;
pub mod quantity;

pub use cart_line::{CartLine, LineError};
pub use id::{IdError, ProductId};
pub use price::{Price, PriceError, format_amount};
pub use quantity::{Quantity, QuantityError};
