//! Per-transaction write overlay.
//!
//! The overlay buffers `put_state` writes during one invocation and makes
//! them visible to later reads in the same invocation. When the invocation
//! succeeds the host commits the buffered writes in one step; when it fails
//! they are discarded, so a failed invocation has no partial effects.

use std::collections::BTreeMap;

/// Write buffer overlaying committed ledger state.
///
/// `BTreeMap` keeps the drained write set ordered by key.
#[derive(Debug, Clone, Default)]
pub struct StateOverlay {
    writes: BTreeMap<String, Vec<u8>>,
    /// Total bytes written (keys + values) for enforcing `max_write_bytes`.
    total_write_bytes: u64,
}

impl StateOverlay {
    /// Create a new empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key-value pair in the overlay.
    ///
    /// If the key was previously written in this overlay, the previous
    /// entry is replaced and its bytes no longer count toward the total.
    pub fn set(&mut self, key: String, value: Vec<u8>) {
        let new_bytes = (key.len() + value.len()) as u64;
        if let Some(prev) = self.writes.get(&key) {
            let prev_bytes = (key.len() + prev.len()) as u64;
            self.total_write_bytes = self.total_write_bytes.saturating_sub(prev_bytes);
        }
        self.total_write_bytes = self.total_write_bytes.saturating_add(new_bytes);
        self.writes.insert(key, value);
    }

    /// Look up a key written in this overlay.
    ///
    /// `None` means the key has not been touched and the caller must check
    /// committed state.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.writes.get(key).map(Vec::as_slice)
    }

    /// Bytes the write set would total if `key` were set to a value of
    /// `value_len` bytes.
    pub fn projected_write_bytes(&self, key: &str, value_len: usize) -> u64 {
        let prev = self
            .writes
            .get(key)
            .map(|v| (key.len() + v.len()) as u64)
            .unwrap_or(0);
        self.total_write_bytes
            .saturating_sub(prev)
            .saturating_add((key.len() + value_len) as u64)
    }

    /// Consume the overlay and return all buffered writes, ordered by key.
    pub fn drain(self) -> BTreeMap<String, Vec<u8>> {
        self.writes
    }

    /// Returns the number of keys written in this overlay.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Returns true if no writes have been buffered.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Returns the total bytes written (keys + values).
    pub fn total_write_bytes(&self) -> u64 {
        self.total_write_bytes
    }
}
