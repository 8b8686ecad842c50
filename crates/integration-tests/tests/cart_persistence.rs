//! Integration tests for cart persistence on disk.
//!
//! Each `CartStore::hydrate` against the same directory stands in for a page
//! load. Two live containers on one directory behave like two browser tabs.

#![allow(clippy::unwrap_used)]

use shopverse_integration_tests::{line, product_id, sample_line, stored_json};
use shopverse_storefront::cart::DEFAULT_CART_KEY;
use shopverse_storefront::{CartStore, FileStore, StorefrontConfig};

#[test]
fn test_cart_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut cart = CartStore::hydrate(FileStore::new(dir.path()), DEFAULT_CART_KEY);
        cart.add_to_cart(sample_line(1)).unwrap();
        cart.add_to_cart(sample_line(2)).unwrap();
    }

    let cart = CartStore::hydrate(FileStore::new(dir.path()), DEFAULT_CART_KEY);
    assert_eq!(cart.cart().len(), 1);
    assert_eq!(cart.cart().lines()[0].quantity().get(), 3);
    assert!(cart.hydration_warnings().is_empty());
}

#[test]
fn test_first_visit_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let cart = CartStore::hydrate(FileStore::new(dir.path()), DEFAULT_CART_KEY);

    assert!(cart.cart().is_empty());
    assert!(!dir.path().join("cart.json").exists());
}

#[test]
fn test_corrupt_file_is_replaced_by_next_operation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cart.json");
    std::fs::write(&path, "]]garbage").unwrap();

    let store = FileStore::new(dir.path());
    let mut cart = CartStore::hydrate(&store, DEFAULT_CART_KEY);

    assert!(cart.cart().is_empty());
    assert_eq!(cart.hydration_warnings().len(), 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "]]garbage");

    cart.add_to_cart(sample_line(1)).unwrap();
    assert_eq!(stored_json(&store, DEFAULT_CART_KEY)[0]["id"], "1");
}

#[test]
fn test_keys_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let mut main = CartStore::hydrate(&store, "cart");
    let mut wishlist = CartStore::hydrate(&store, "wishlist");
    main.add_to_cart(line("a", 1)).unwrap();
    wishlist.add_to_cart(line("b", 1)).unwrap();

    assert_eq!(stored_json(&store, "cart")[0]["id"], "a");
    assert_eq!(stored_json(&store, "wishlist")[0]["id"], "b");
}

#[test]
fn test_two_tabs_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let mut tab_one = CartStore::hydrate(&store, DEFAULT_CART_KEY);
    let mut tab_two = CartStore::hydrate(&store, DEFAULT_CART_KEY);

    tab_one.add_to_cart(line("a", 1)).unwrap();
    tab_two.add_to_cart(line("b", 1)).unwrap();

    // Each tab keeps its own in-memory cart
    assert!(tab_one.cart().contains(&product_id("a")));
    assert!(!tab_one.cart().contains(&product_id("b")));

    // Storage holds whichever tab wrote last
    let reloaded = CartStore::hydrate(&store, DEFAULT_CART_KEY);
    let ids: Vec<&str> = reloaded.cart().iter().map(|l| l.id().as_str()).collect();
    assert_eq!(ids, ["b"]);
}

#[test]
fn test_default_config_key_is_usable_by_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorefrontConfig {
        data_dir: dir.path().join("data"),
        ..StorefrontConfig::default()
    };

    let store = FileStore::new(&config.data_dir);
    let mut cart = CartStore::hydrate(store, &config.cart_key);
    assert!(!config.data_dir.exists());

    cart.add_to_cart(sample_line(1)).unwrap();

    assert!(cart.last_persist_error().is_none());
    assert!(config.data_dir.join("cart.json").exists());
}
