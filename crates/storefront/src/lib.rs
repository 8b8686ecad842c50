//! ShopVerse Storefront library.
//!
//! This crate provides the storefront's stateful core as a library, so the
//! command-line front end and the tests drive exactly the same code.
//!
//! # Modules
//!
//! - [`cart`] - Cart state container with write-through persistence
//! - [`storage`] - Durable key-value stores (memory and file-backed)
//! - [`catalog`] - Read-only product catalog and listing filters
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod storage;

pub use cart::{Cart, CartError, CartStore, CartView};
pub use catalog::{Catalog, Product, ProductFilter};
pub use config::StorefrontConfig;
pub use storage::{DurableStore, FileStore, MemoryStore, StorageError};
