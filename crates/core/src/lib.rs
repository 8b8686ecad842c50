//! ShopVerse Core - Shared types library.
//!
//! This crate provides the domain types used across all ShopVerse components:
//! - `storefront` - Cart state container, durable storage and catalog browsing
//! - `cli` - Command-line front end for browsing products and editing the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no logging.
//! Every type validates itself on construction and on deserialization, so a
//! value that exists is a value that satisfies the cart invariants.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, quantities and cart lines

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
