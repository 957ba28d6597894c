//! In-memory preference namespace.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use callerinfo_core::{KeyValueStore, PrefValue, StoreError};

/// A namespace held entirely in memory.
///
/// `commit` always succeeds and only counts how often it was called, so
/// tests can check that a logical update committed exactly once.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, PrefValue>>,
    commits: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<PrefValue>,
    {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Mutex::new(values),
            commits: Mutex::new(0),
        }
    }

    /// Number of `commit` calls so far.
    pub fn commit_count(&self) -> usize {
        *self.commits.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, PrefValue>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.values().get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.values().contains_key(key)
    }

    fn put(&self, key: &str, value: PrefValue) {
        self.values().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values().remove(key);
    }

    fn commit(&self) -> Result<(), StoreError> {
        *self.commits.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_entries_prepopulates_values() {
        let store = MemoryStore::with_entries([("a", PrefValue::Int(1)), ("b", PrefValue::Bool(true))]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a"), Some(PrefValue::Int(1)));
    }

    #[test]
    fn test_put_remove_and_commit_count() {
        // Arrange
        let store = MemoryStore::new();

        // Act
        store.put("k", PrefValue::from("v"));
        store.commit().expect("commit");
        store.remove("k");
        store.remove("missing");
        store.commit().expect("commit");

        // Assert
        assert!(store.is_empty());
        assert_eq!(store.commit_count(), 2);
    }
}
