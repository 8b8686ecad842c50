//! Read-only product catalog.
//!
//! The catalog is static data shipped with the storefront (or loaded from a
//! JSON file). It supports the browsing side of the store: listing,
//! filtering by category, rating and price, and related-product lookups.
//! Adding a product to the cart copies its display fields into a
//! [`CartLine`] at add-time.

mod filter;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopverse_core::{CartLine, LineError, Price, ProductId, Quantity};

pub use filter::ProductFilter;

/// Catalog bundled with the storefront.
const BUNDLED_CATALOG: &str = include_str!("../../data/products.json");

/// Number of related products shown on a product page.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Highest possible product rating.
pub const MAX_RATING: f32 = 5.0;

/// Errors that can occur when loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is invalid.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A rating is outside `0..=5`.
    #[error("product {id} has invalid rating {rating}")]
    InvalidRating { id: ProductId, rating: f32 },
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub rating: f32,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Snapshot this product into a cart line.
    ///
    /// # Errors
    ///
    /// Returns `LineError::EmptyName` if the product has no name.
    pub fn to_cart_line(&self, quantity: Quantity) -> Result<CartLine, LineError> {
        CartLine::new(
            self.id.clone(),
            self.name.clone(),
            self.price,
            self.image.clone(),
            quantity,
        )
    }
}

/// The full set of products, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids or ratings outside `0..=5`.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !(0.0..=MAX_RATING).contains(&product.rating) {
                return Err(CatalogError::InvalidRating {
                    id: product.id.clone(),
                    rating: product.rating,
                });
            }
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or fails validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The catalog bundled with the storefront.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products matching `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Lowest and highest price, or `None` for an empty catalog.
    #[must_use]
    pub fn price_range(&self) -> Option<(Price, Price)> {
        let min = self.products.iter().map(|p| p.price).min()?;
        let max = self.products.iter().map(|p| p.price).max()?;
        Some((min, max))
    }

    /// Other products in the same category as `id`, at most `limit`.
    #[must_use]
    pub fn related(&self, id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }
}
