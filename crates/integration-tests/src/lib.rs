//! Integration tests for ShopVerse.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopverse-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - End-to-end shopper scenarios against the cart container
//! - `cart_properties` - Property tests for cart invariants
//! - `cart_persistence` - Reload behavior with the file-backed store
//!
//! This library holds the fixtures shared by those test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;
use serde_json::Value;
use shopverse_core::{CartLine, ProductId};
use shopverse_storefront::DurableStore;

/// The line used throughout the scenarios.
///
/// # Panics
///
/// Never in practice: the fixture values are valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_line(quantity: i64) -> CartLine {
    CartLine::parse(
        "1",
        "Sample Product",
        Decimal::new(2999, 2),
        "/sample.jpg",
        quantity,
    )
    .unwrap()
}

/// A line with a generic name and a price of $1.00.
///
/// # Panics
///
/// Panics if `id` is blank or `quantity` is not positive.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn line(id: &str, quantity: i64) -> CartLine {
    CartLine::parse(id, "Item", Decimal::ONE, "/item.jpg", quantity).unwrap()
}

/// A line with a generic name and the given unit price.
///
/// # Panics
///
/// Panics if `id` is blank, `price` is not a valid price or `quantity` is not
/// positive.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn priced_line(id: &str, price: Decimal, quantity: i64) -> CartLine {
    CartLine::parse(id, "Item", price, "/item.jpg", quantity).unwrap()
}

/// Parse a product id.
///
/// # Panics
///
/// Panics if `id` is blank.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product_id(id: &str) -> ProductId {
    ProductId::parse(id).unwrap()
}

/// Read and parse the JSON value stored under `key`.
///
/// # Panics
///
/// Panics if the key is absent or does not hold JSON.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn stored_json(store: &impl DurableStore, key: &str) -> Value {
    let raw = store.get(key).unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}
