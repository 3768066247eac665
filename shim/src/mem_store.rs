//! In-memory state store.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` for ordered key
//! iteration. It backs `MockStub` when no other store is supplied.

use std::collections::BTreeMap;

use crate::error::HostError;
use crate::state_store::StateStore;

/// In-memory state store backed by `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: BTreeMap<String, Vec<u8>>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key-value pair into the store.
    pub fn insert(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.data.insert(key.into(), value);
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        Ok(self.data.get(key).cloned())
    }

    fn apply(&mut self, writes: BTreeMap<String, Vec<u8>>) -> Result<(), HostError> {
        self.data.extend(writes);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = MemStore::new();
        store.insert("key1", b"value1".to_vec());

        assert_eq!(store.get("key1").unwrap(), Some(b"value1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_overwrite() {
        let mut store = MemStore::new();
        store.insert("key1", b"v1".to_vec());
        store.insert("key1", b"v2".to_vec());

        assert_eq!(store.get("key1").unwrap(), Some(b"v2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_apply_merges_writes() {
        let mut store = MemStore::new();
        store.insert("a", b"old".to_vec());

        let mut writes = BTreeMap::new();
        writes.insert("a".to_string(), b"new".to_vec());
        writes.insert("b".to_string(), b"2".to_vec());
        store.apply(writes).unwrap();

        assert_eq!(store.get("a").unwrap(), Some(b"new".to_vec()));
        assert_eq!(store.get("b").unwrap(), Some(b"2".to_vec()));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_iter_in_key_order() {
        let mut store = MemStore::new();
        store.insert("b", b"2".to_vec());
        store.insert("a", b"1".to_vec());

        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_value() {
        let mut store = MemStore::new();
        store.insert("empty_val", vec![]);
        assert_eq!(store.get("empty_val").unwrap(), Some(vec![]));
    }
}
