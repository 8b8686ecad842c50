//! Product browsing commands.

use rust_decimal::Decimal;

use shopverse_core::{Price, ProductId};
use shopverse_storefront::catalog::{DEFAULT_RELATED_LIMIT, MAX_RATING};
use shopverse_storefront::{CartStore, Catalog, DurableStore, Product, ProductFilter};

use super::CommandError;

/// Build a listing filter from command-line arguments.
///
/// # Errors
///
/// Returns an error for a negative price or a rating outside 0-5.
pub fn build_filter(
    category: Option<String>,
    min_rating: f32,
    max_price: Option<Decimal>,
) -> Result<ProductFilter, CommandError> {
    if !(0.0..=MAX_RATING).contains(&min_rating) {
        return Err(CommandError::InvalidRating(min_rating));
    }

    let mut filter = ProductFilter::default().min_rating(min_rating);
    if let Some(category) = category {
        filter = filter.category(category);
    }
    if let Some(max_price) = max_price {
        filter = filter.max_price(Price::new(max_price)?);
    }
    Ok(filter)
}

/// Render the product listing.
pub fn list<S: DurableStore>(
    catalog: &Catalog,
    filter: &ProductFilter,
    cart: &CartStore<S>,
) -> String {
    let products = catalog.filter(filter);

    let mut lines = Vec::with_capacity(products.len() + 3);
    lines.push(format!(
        "Categories: {} | Cart ({})",
        catalog.categories().join(", "),
        cart.line_count()
    ));
    lines.extend(products.iter().map(|p| summary(p)));
    lines.push(format!("{} products found.", products.len()));

    lines.join("\n") + "\n"
}

/// Render a product page with related products.
///
/// # Errors
///
/// Returns an error if the id is invalid or not in the catalog.
pub fn detail(catalog: &Catalog, id: &str) -> Result<String, CommandError> {
    let id = ProductId::parse(id)?;
    let product = catalog
        .get(&id)
        .ok_or_else(|| CommandError::UnknownProduct(id.clone()))?;

    let mut lines = vec![
        format!("Home / {} / {}", product.category, product.name),
        product.name.clone(),
        format!("{}  rating {:.1}", product.price, product.rating),
        product.description.clone(),
    ];

    let related = catalog.related(&id, DEFAULT_RELATED_LIMIT);
    if !related.is_empty() {
        lines.push(String::new());
        lines.push("Related products:".to_string());
        lines.extend(related.iter().map(|p| summary(p)));
    }

    Ok(lines.join("\n") + "\n")
}

fn summary(product: &Product) -> String {
    format!(
        "[{}] {} | {} | rating {:.1} | {}",
        product.id, product.name, product.price, product.rating, product.category
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopverse_storefront::MemoryStore;
    use shopverse_storefront::cart::DEFAULT_CART_KEY;

    use super::*;

    #[test]
    fn test_build_filter_validates() {
        assert!(matches!(
            build_filter(None, 6.0, None),
            Err(CommandError::InvalidRating(_))
        ));
        assert!(matches!(
            build_filter(None, 0.0, Some(Decimal::new(-1, 0))),
            Err(CommandError::InvalidPrice(_))
        ));

        let filter = build_filter(Some("Audio".to_string()), 4.0, Some(Decimal::new(50, 0))).unwrap();
        assert_eq!(filter.category.as_deref(), Some("Audio"));
        assert_eq!(filter.max_price, Some(Price::from_cents(5000).unwrap()));
    }

    #[test]
    fn test_list_counts_products() {
        let catalog = Catalog::bundled().unwrap();
        let cart = CartStore::hydrate(MemoryStore::new(), DEFAULT_CART_KEY);

        let all = list(&catalog, &ProductFilter::default(), &cart);
        assert!(all.ends_with(&format!("{} products found.\n", catalog.len())));
        assert!(all.starts_with("Categories: Audio, Wearables, Accessories | Cart (0)"));

        let none = list(
            &catalog,
            &ProductFilter::default().category("Nonexistent"),
            &cart,
        );
        assert!(none.contains("0 products found."));
    }

    #[test]
    fn test_detail_lists_related() {
        let catalog = Catalog::bundled().unwrap();
        let output = detail(&catalog, "1").unwrap();
        assert!(output.contains("Wireless Headphones"));
        assert!(output.contains("$99.99"));
        assert!(output.contains("Related products:"));
        assert!(!output.contains("[5]"));
    }

    #[test]
    fn test_detail_unknown_product() {
        let catalog = Catalog::bundled().unwrap();
        assert!(matches!(
            detail(&catalog, "404"),
            Err(CommandError::UnknownProduct(_))
        ));
        assert!(matches!(
            detail(&catalog, ""),
            Err(CommandError::InvalidId(_))
        ));
    }
}
