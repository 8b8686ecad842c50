//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPVERSE_DATA_DIR` - Directory of the file-backed durable store (default: .shopverse)
//! - `SHOPVERSE_CART_KEY` - Durable key the cart is stored under (default: cart)
//! - `SHOPVERSE_CATALOG_PATH` - JSON product catalog (default: bundled catalog)

use std::path::PathBuf;

use thiserror::Error;

use crate::cart::DEFAULT_CART_KEY;
use crate::storage;

const DEFAULT_DATA_DIR: &str = ".shopverse";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory backing the durable store
    pub data_dir: PathBuf,
    /// Durable key for the cart
    pub cart_key: String,
    /// Product catalog file; `None` uses the bundled catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = non_empty(&lookup, "SHOPVERSE_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let cart_key =
            non_empty(&lookup, "SHOPVERSE_CART_KEY").unwrap_or_else(|| DEFAULT_CART_KEY.to_string());
        storage::validate_key(&cart_key).map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPVERSE_CART_KEY".to_string(), e.to_string())
        })?;

        let catalog_path = non_empty(&lookup, "SHOPVERSE_CATALOG_PATH").map(PathBuf::from);

        Ok(Self {
            data_dir,
            cart_key,
            catalog_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating blank values as unset.
fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}
