//! Product listing filters.

use shopverse_core::Price;

use super::Product;

/// Criteria for narrowing the product listing.
///
/// All criteria must hold for a product to match. The default filter
/// matches every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact category; `None` means all categories.
    pub category: Option<String>,
    /// Minimum rating, inclusive.
    pub min_rating: f32,
    /// Maximum unit price, inclusive; `None` means no limit.
    pub max_price: Option<Price>,
}

impl ProductFilter {
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub const fn min_rating(mut self, rating: f32) -> Self {
        self.min_rating = rating;
        self
    }

    #[must_use]
    pub const fn max_price(mut self, price: Price) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Whether no criteria are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.min_rating <= 0.0 && self.max_price.is_none()
    }

    /// Whether `product` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.category
            .as_deref()
            .is_none_or(|category| product.category == category)
            && product.rating >= self.min_rating
            && self.max_price.is_none_or(|max| product.price <= max)
    }
}
