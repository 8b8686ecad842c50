//! Cart state container.
//!
//! [`CartStore`] owns the shopper's cart and keeps a durable mirror of it so
//! a reload does not lose the cart.
//!
//! # Lifecycle
//!
//! 1. `CartStore::hydrate` reads the cart key once from the durable store and
//!    decodes it (see [`hydrate`]). Unusable data is dropped with a warning.
//!    Nothing is written until the first operation.
//! 2. Callers mutate the cart only through `add_to_cart`, `remove_from_cart`
//!    and `update_quantity`.
//! 3. Every successful operation writes the whole cart back to the durable
//!    store (write-through). A failed write is logged and remembered but never
//!    returned: the in-memory cart stays authoritative.
//!
//! The container is built once at application start and handed to whatever
//! needs it by reference. There is no way to reach the operations before
//! hydration has finished.

mod error;
pub mod hydrate;
mod lines;
mod view;

use rust_decimal::Decimal;
use tracing::instrument;

use shopverse_core::{CartLine, ProductId, Quantity};

use crate::catalog::Product;
use crate::storage::{DurableStore, StorageError};

pub use error::CartError;
pub use hydrate::{Hydrated, HydrationWarning};
pub use lines::Cart;
pub use view::{CartItemView, CartView};

/// Default durable key for the cart.
pub const DEFAULT_CART_KEY: &str = "cart";

/// The authoritative in-memory cart plus its durable mirror.
#[derive(Debug)]
pub struct CartStore<S> {
    store: S,
    key: String,
    cart: Cart,
    warnings: Vec<HydrationWarning>,
    last_persist_error: Option<StorageError>,
}

impl<S: DurableStore> CartStore<S> {
    /// Load the cart from `store` under `key`.
    ///
    /// Never fails: a missing value gives an empty cart, and corrupt or
    /// malformed data is dropped and reported through
    /// [`hydration_warnings`](Self::hydration_warnings). Hydration never
    /// writes; the stored value is replaced by the first operation.
    #[instrument(skip(store))]
    pub fn hydrate(store: S, key: &str) -> Self {
        let hydrated = match store.get(key) {
            Ok(Some(raw)) => hydrate::decode_persisted(&raw),
            Ok(None) => {
                tracing::debug!("No stored cart, starting empty");
                Hydrated::default()
            }
            Err(e) => Hydrated {
                cart: Cart::new(),
                warnings: vec![HydrationWarning::Unreadable(e.to_string())],
            },
        };

        for warning in &hydrated.warnings {
            tracing::warn!(%warning, "Discarded stored cart data");
        }
        tracing::info!(lines = hydrated.cart.len(), "Cart hydrated");

        Self {
            store,
            key: key.to_string(),
            cart: hydrated.cart,
            warnings: hydrated.warnings,
            last_persist_error: None,
        }
    }

    /// Current cart snapshot.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Durable key this container writes to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying durable store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Problems found while loading persisted state.
    #[must_use]
    pub fn hydration_warnings(&self) -> &[HydrationWarning] {
        &self.warnings
    }

    /// The most recent durable write failure, cleared by the next successful write.
    #[must_use]
    pub const fn last_persist_error(&self) -> Option<&StorageError> {
        self.last_persist_error.as_ref()
    }

    /// Add `item`, merging into an existing line with the same id.
    ///
    /// On merge only the quantity changes; the existing line's name, price and
    /// image are kept.
    ///
    /// # Errors
    ///
    /// Returns `CartError::QuantityOverflow` if the merged quantity does not
    /// fit. The cart is unchanged in that case.
    #[instrument(skip(self, item), fields(id = %item.id(), quantity = %item.quantity()))]
    pub fn add_to_cart(&mut self, item: CartLine) -> Result<(), CartError> {
        let id = item.id().clone();
        self.cart
            .merge(item)
            .map_err(|_| CartError::QuantityOverflow(id))?;
        self.persist();
        Ok(())
    }

    /// Add `quantity` units of a catalog product.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidQuantity` if `quantity` is not positive, and
    /// the errors of [`add_to_cart`](Self::add_to_cart).
    pub fn add_product(&mut self, product: &Product, quantity: i64) -> Result<(), CartError> {
        let quantity = Quantity::try_from(quantity)?;
        let line = product.to_cart_line(quantity)?;
        self.add_to_cart(line)
    }

    /// Remove the line for `id`. Removing an absent id is a no-op.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        if !self.cart.remove(id) {
            tracing::debug!("No line to remove");
        }
        self.persist();
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or less removes the line. A positive quantity for an
    /// id that is not in the cart does nothing.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidQuantity` if `quantity` exceeds the maximum.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), CartError> {
        match Quantity::from_signed(quantity)? {
            None => {
                self.remove_from_cart(id);
            }
            Some(quantity) => {
                if !self.cart.set_quantity(id, quantity) {
                    tracing::debug!("No line to update");
                }
                self.persist();
            }
        }
        Ok(())
    }

    /// Number of distinct lines (the header badge count).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.cart.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Sum of `price * quantity` across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.cart.subtotal()
    }

    /// Display model of the current cart.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    /// Overwrite the durable value with the current cart.
    fn persist(&mut self) {
        let result = serde_json::to_string(&self.cart)
            .map_err(|e| StorageError::Unavailable(format!("failed to serialize cart: {e}")))
            .and_then(|json| self.store.set(&self.key, &json));

        match result {
            Ok(()) => {
                tracing::debug!(key = %self.key, lines = self.cart.len(), "Cart persisted");
                self.last_persist_error = None;
            }
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "Failed to persist cart");
                self.last_persist_error = Some(e);
            }
        }
    }
}
