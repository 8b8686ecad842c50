//! The ordered, id-unique collection of cart lines.

use rust_decimal::Decimal;
use serde::Serialize;

use shopverse_core::{CartLine, ProductId, Quantity, QuantityError};

/// What the shopper intends to buy.
///
/// Lines keep insertion order and no two lines share a product id. The only
/// way to change a `Cart` from outside this crate is through
/// [`CartStore`](super::CartStore), which keeps the durable mirror in sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the line for a product.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity().get()))
            .sum()
    }

    /// Sum of `price * quantity` across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Add a line, merging quantities into an existing line with the same id.
    ///
    /// On merge the existing line's name, price and image are kept and the
    /// incoming ones are discarded.
    pub(crate) fn merge(&mut self, item: CartLine) -> Result<(), QuantityError> {
        if let Some(existing) = self.lines.iter_mut().find(|line| line.id() == item.id()) {
            let quantity = existing.quantity().checked_add(item.quantity())?;
            *existing = existing.clone().with_quantity(quantity);
        } else {
            self.lines.push(item);
        }
        Ok(())
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub(crate) fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    /// Replace the quantity of an existing line. Returns whether a line matched.
    pub(crate) fn set_quantity(&mut self, id: &ProductId, quantity: Quantity) -> bool {
        let Some(line) = self.lines.iter_mut().find(|line| line.id() == id) else {
            return false;
        };
        *line = line.clone().with_quantity(quantity);
        true
    }

    /// Build a cart from lines already known to have distinct ids.
    pub(crate) const fn from_unique_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
