//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! shopverse cart add 1 -q 2
//! shopverse cart update 1 0   # removes the line
//! shopverse cart show
//! ```

use shopverse_core::ProductId;
use shopverse_storefront::{CartStore, CartView, Catalog, DurableStore};

use super::CommandError;

/// Render the cart page.
///
/// # Errors
///
/// Returns an error if JSON rendering fails.
pub fn show<S: DurableStore>(cart: &CartStore<S>, json: bool) -> Result<String, CommandError> {
    let view = cart.view();
    if json {
        return Ok(serde_json::to_string_pretty(&view)? + "\n");
    }
    Ok(render(&view))
}

/// Add a catalog product to the cart.
///
/// # Errors
///
/// Returns an error for an unknown product or a non-positive quantity.
pub fn add<S: DurableStore>(
    cart: &mut CartStore<S>,
    catalog: &Catalog,
    id: &str,
    quantity: i64,
) -> Result<String, CommandError> {
    let id = ProductId::parse(id)?;
    let product = catalog
        .get(&id)
        .ok_or_else(|| CommandError::UnknownProduct(id.clone()))?;

    cart.add_product(product, quantity)?;
    tracing::info!(%id, quantity, "Added to cart");

    let in_cart = cart.cart().get(&id).map_or(0, |line| line.quantity().get());
    Ok(format!(
        "Added {} x{quantity} ({in_cart} in cart). Cart ({})\n",
        product.name,
        cart.line_count()
    ))
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns an error if the id is invalid.
pub fn remove<S: DurableStore>(cart: &mut CartStore<S>, id: &str) -> Result<String, CommandError> {
    let id = ProductId::parse(id)?;
    let existed = cart.cart().contains(&id);
    cart.remove_from_cart(&id);

    Ok(if existed {
        format!("Removed {id}. Cart ({})\n", cart.line_count())
    } else {
        format!("{id} was not in the cart. Cart ({})\n", cart.line_count())
    })
}

/// Set the quantity of a product in the cart.
///
/// # Errors
///
/// Returns an error if the id or quantity is invalid.
pub fn update<S: DurableStore>(
    cart: &mut CartStore<S>,
    id: &str,
    quantity: i64,
) -> Result<String, CommandError> {
    let id = ProductId::parse(id)?;
    cart.update_quantity(&id, quantity)?;

    Ok(match cart.cart().get(&id) {
        Some(line) => format!("{id} quantity is now {}\n", line.quantity()),
        None => format!("{id} is not in the cart. Cart ({})\n", cart.line_count()),
    })
}

fn render(view: &CartView) -> String {
    if view.is_empty() {
        return "Your cart is empty.\n".to_string();
    }

    let mut lines: Vec<String> = view
        .items
        .iter()
        .map(|item| {
            format!(
                "[{}] {} | {} x {} = {}",
                item.id, item.name, item.price, item.quantity, item.line_price
            )
        })
        .collect();
    lines.push(format!(
        "Total: {} ({} items)",
        view.subtotal, view.total_quantity
    ));

    lines.join("\n") + "\n"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopverse_storefront::MemoryStore;
    use shopverse_storefront::cart::DEFAULT_CART_KEY;

    use super::*;

    fn setup() -> (Catalog, CartStore<MemoryStore>) {
        (
            Catalog::bundled().unwrap(),
            CartStore::hydrate(MemoryStore::new(), DEFAULT_CART_KEY),
        )
    }

    #[test]
    fn test_show_empty() {
        let (_, cart) = setup();
        assert_eq!(show(&cart, false).unwrap(), "Your cart is empty.\n");
    }

    #[test]
    fn test_add_then_show() {
        let (catalog, mut cart) = setup();
        add(&mut cart, &catalog, "1", 1).unwrap();
        let output = add(&mut cart, &catalog, "1", 2).unwrap();
        assert!(output.contains("(3 in cart)"));

        let shown = show(&cart, false).unwrap();
        assert!(shown.contains("[1] Wireless Headphones | $99.99 x 3 = $299.97"));
        assert!(shown.contains("Total: $299.97 (3 items)"));
    }

    #[test]
    fn test_show_json() {
        let (catalog, mut cart) = setup();
        add(&mut cart, &catalog, "2", 1).unwrap();

        let json: serde_json::Value = serde_json::from_str(&show(&cart, true).unwrap()).unwrap();
        assert_eq!(json["item_count"], 1);
        assert_eq!(json["items"][0]["id"], "2");
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (catalog, mut cart) = setup();
        assert!(matches!(
            add(&mut cart, &catalog, "404", 1),
            Err(CommandError::UnknownProduct(_))
        ));
        assert!(matches!(
            add(&mut cart, &catalog, "1", 0),
            Err(CommandError::Cart(_))
        ));
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn test_update_and_remove() {
        let (catalog, mut cart) = setup();
        add(&mut cart, &catalog, "1", 1).unwrap();

        assert_eq!(update(&mut cart, "1", 5).unwrap(), "1 quantity is now 5\n");
        assert_eq!(
            update(&mut cart, "1", -1).unwrap(),
            "1 is not in the cart. Cart (0)\n"
        );

        add(&mut cart, &catalog, "1", 1).unwrap();
        assert_eq!(remove(&mut cart, "1").unwrap(), "Removed 1. Cart (0)\n");
        assert_eq!(
            remove(&mut cart, "1").unwrap(),
            "1 was not in the cart. Cart (0)\n"
        );
    }
}
