//! Committed state backend abstraction.
//!
//! `StateStore` is the committed ledger state a transaction runs against.
//! `TxStub` layers a `StateOverlay` on top of it: reads check the overlay
//! first, then fall through to the store. `MockStub` applies the overlay's
//! writes to the store once a transaction succeeds.

use std::collections::BTreeMap;

use crate::error::HostError;

/// Abstraction over committed ledger state.
pub trait StateStore: Send + Sync {
    /// Get the committed value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Apply a successful transaction's write set.
    fn apply(&mut self, writes: BTreeMap<String, Vec<u8>>) -> Result<(), HostError>;
}
