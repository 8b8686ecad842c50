//! ShopVerse CLI - Browse the catalog and manage the shopping cart.
//!
//! # Usage
//!
//! ```bash
//! # List products, optionally filtered
//! shopverse products --category Audio --min-rating 4 --max-price 100
//!
//! # Show one product with related products
//! shopverse product 1
//!
//! # Cart operations
//! shopverse cart add 1 -q 2
//! shopverse cart update 1 5
//! shopverse cart remove 1
//! shopverse cart show --json
//! ```
//!
//! Each cart invocation behaves like a page load: the cart is hydrated from
//! the data directory, one operation is applied, and the result is written
//! back. Browsing commands only read the cart, for the header badge.
//!
//! # Environment Variables
//!
//! See [`shopverse_storefront::config`]. Logging is controlled with `RUST_LOG`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use shopverse_storefront::{Catalog, CartStore, FileStore, StorefrontConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "shopverse")]
#[command(author, version, about = "ShopVerse storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in the catalog
    Products {
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,

        /// Minimum rating (0-5)
        #[arg(short = 'r', long, default_value_t = 0.0)]
        min_rating: f32,

        /// Maximum unit price
        #[arg(short = 'p', long)]
        max_price: Option<Decimal>,
    },
    /// Show a product and related products
    Product {
        /// Product ID
        id: String,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show {
        /// Print the cart view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a product to the cart
    Add {
        /// Product ID
        id: String,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: String,
    },
    /// Set the quantity of a product already in the cart (0 or less removes it)
    Update {
        /// Product ID
        id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
}

fn main() {
    // Logs go to stderr so command output stays clean on stdout
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopverse_storefront=warn,shopverse_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled()?,
    };

    // Loading the cart only reads; nothing is written until a cart operation
    let open_cart = || CartStore::hydrate(FileStore::new(&config.data_dir), &config.cart_key);

    let output = match cli.command {
        Commands::Products {
            category,
            min_rating,
            max_price,
        } => {
            let filter = commands::products::build_filter(category, min_rating, max_price)?;
            commands::products::list(&catalog, &filter, &open_cart())
        }
        Commands::Product { id } => commands::products::detail(&catalog, &id)?,
        Commands::Cart { action } => {
            let mut cart = open_cart();
            let output = match action {
                CartAction::Show { json } => commands::cart::show(&cart, json)?,
                CartAction::Add { id, quantity } => {
                    commands::cart::add(&mut cart, &catalog, &id, quantity)?
                }
                CartAction::Remove { id } => commands::cart::remove(&mut cart, &id)?,
                CartAction::Update { id, quantity } => {
                    commands::cart::update(&mut cart, &id, quantity)?
                }
            };
            if let Some(e) = cart.last_persist_error() {
                tracing::warn!("Cart changes were not saved: {e}");
            }
            output
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    Ok(())
}
