//! Display models for the cart page and header badge.

use serde::Serialize;

use shopverse_core::{CartLine, format_amount};

use super::lines::Cart;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    /// Number of distinct lines, shown on the header badge.
    pub item_count: usize,
    pub total_quantity: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
            total_quantity: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.iter().map(CartItemView::from).collect(),
            subtotal: format_amount(cart.subtotal()),
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
        }
    }
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id().to_string(),
            name: line.name().to_string(),
            image: line.image().to_string(),
            quantity: line.quantity().get(),
            price: line.price().display(),
            line_price: format_amount(line.line_total()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn empty_cart_matches_empty_view() {
        assert_eq!(CartView::from(&Cart::new()), CartView::empty());
        assert!(CartView::empty().is_empty());
    }

    #[test]
    fn formats_prices() {
        let mut cart = Cart::new();
        cart.merge(
            CartLine::parse("1", "Sample Product", Decimal::new(2999, 2), "/s.jpg", 3).unwrap(),
        )
        .unwrap();

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 1);
        assert_eq!(view.total_quantity, 3);
        assert_eq!(view.subtotal, "$89.97");

        let item = &view.items[0];
        assert_eq!(item.price, "$29.99");
        assert_eq!(item.line_price, "$89.97");
        assert_eq!(item.quantity, 3);
    }
}
