//! Durable key-value storage for cart state.
//!
//! The cart container mirrors its state into a [`DurableStore`]: a
//! synchronous string store keyed by name that outlives the process. Two
//! backends are provided:
//!
//! - [`MemoryStore`] - process-local map, used by tests and embedders
//! - [`FileStore`] - one JSON file per key in a data directory
//!
//! Stores are shared by reference: `&T`, `Arc<T>` and `Box<T>` are stores too,
//! so a caller can keep a handle to the same store the container writes to.

mod file;
mod memory;

use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors that can occur when reading or writing a durable store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be used by this backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The backend is unavailable (e.g. disabled or full).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A synchronous string store keyed by name.
pub trait DurableStore {
    /// Read the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: DurableStore + ?Sized> DurableStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: DurableStore + ?Sized> DurableStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: DurableStore + ?Sized> DurableStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Check that a key is safe to use as a file stem.
///
/// Keys are limited to ASCII alphanumerics, `-` and `_`.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key.len() <= 64
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
