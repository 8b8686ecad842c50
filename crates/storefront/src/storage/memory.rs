//! In-memory durable store.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{DurableStore, StorageError};

/// Process-local key-value store.
///
/// An optional byte quota mimics browser storage limits: a write whose value
/// would exceed the quota fails with `StorageError::Unavailable` and leaves
/// the previous value in place.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that rejects values larger than `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RwLock::default(),
            quota: Some(bytes),
        }
    }

    /// Create a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Remove every entry.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota.filter(|&quota| value.len() > quota) {
            return Err(StorageError::Unavailable(format!(
                "quota of {quota} bytes exceeded"
            )));
        }

        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Unavailable("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn set_overwrites() {
        let store = MemoryStore::new();
        store.set("cart", "[1]").unwrap();
        store.set("cart", "[2]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn quota_rejects_large_values_and_keeps_previous() {
        let store = MemoryStore::with_quota(4);
        store.set("cart", "[]").unwrap();

        let err = store.set("cart", "[1,2,3]").unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn clear_removes_entries() {
        let store = MemoryStore::with_entry("cart", "[]");
        store.clear();
        assert_eq!(store.get("cart").unwrap(), None);
    }
}
