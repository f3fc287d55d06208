//! In-memory storage implementation

use super::error::{Result, StoreError};
use super::KeyValueStore;
use siphasher::sip::SipHasher13;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

/// Type alias for our hash map with SipHasher
type StoreMap = HashMap<String, String, BuildHasherDefault<SipHasher13>>;

/// In-memory key-value store
///
/// The single backend behind [`KeyValueStore`]: a plain hash map that
/// exclusively owns its entries. At any time the map holds exactly the
/// keys most recently set and not yet deleted.
pub struct MemoryStore {
    /// The main storage map
    store: StoreMap,
}

impl MemoryStore {
    /// Create a new memory store with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new memory store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        MemoryStore {
            store: HashMap::with_capacity_and_hasher(
                capacity,
                BuildHasherDefault::<SipHasher13>::default(),
            ),
        }
    }

    /// Get the number of stored keys
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn set(&mut self, key: String, value: String) -> Result<()> {
        self.store.insert(key, value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String> {
        self.store.get(key).cloned().ok_or(StoreError::NotFound)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.store
            .remove(key)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_set_get() {
        let mut store = MemoryStore::new();
        store.set("key1".to_string(), "value1".to_string()).unwrap();

        assert_eq!(store.get("key1").unwrap(), "value1");
    }

    #[test]
    fn test_overwrite() {
        let mut store = MemoryStore::new();
        store.set("key1".to_string(), "v1".to_string()).unwrap();
        store.set("key1".to_string(), "v2".to_string()).unwrap();

        assert_eq!(store.get("key1").unwrap(), "v2");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let store = MemoryStore::new();

        assert_eq!(store.get("nope"), Err(StoreError::NotFound));
    }

    #[test]
    fn test_delete() {
        let mut store = MemoryStore::new();
        store.set("key1".to_string(), "value1".to_string()).unwrap();

        assert!(store.delete("key1").is_ok());
        assert_eq!(store.get("key1"), Err(StoreError::NotFound));
    }

    #[test]
    fn test_delete_missing() {
        let mut store = MemoryStore::new();

        assert_eq!(store.delete("nope"), Err(StoreError::NotFound));
    }

    #[test]
    fn test_delete_twice() {
        let mut store = MemoryStore::new();
        store.set("key1".to_string(), "value1".to_string()).unwrap();

        assert!(store.delete("key1").is_ok());
        assert_eq!(store.delete("key1"), Err(StoreError::NotFound));
    }

    #[test]
    fn test_empty_key_and_value() {
        let mut store = MemoryStore::new();
        store.set(String::new(), String::new()).unwrap();

        assert_eq!(store.get("").unwrap(), "");
        assert!(store.delete("").is_ok());
    }

    #[test]
    fn test_len_is_empty() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("a".to_string(), "1".to_string()).unwrap();
        store.set("b".to_string(), "2".to_string()).unwrap();
        assert_eq!(store.len(), 2);

        store.delete("a").unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }
}
