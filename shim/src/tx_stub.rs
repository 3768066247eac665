//! Per-transaction stub state.
//!
//! `TxStub` combines the invocation input, the committed state store, the
//! configured limits, and a fresh `StateOverlay` for the duration of one
//! transaction. It is dropped (or turned into its overlay) when the
//! transaction ends.

use chaincode_primitives::{ChaincodeInput, StateOverlay};

use crate::config::StubConfig;
use crate::error::HostError;
use crate::state_store::StateStore;
use crate::traits::ChaincodeStub;

/// `ChaincodeStub` for a single transaction.
pub struct TxStub<'a> {
    tx_id: String,
    input: ChaincodeInput,
    /// Committed state backend (read-only during the transaction).
    store: &'a dyn StateStore,
    config: &'a StubConfig,
    /// Write buffer overlaying committed state.
    overlay: StateOverlay,
}

impl<'a> TxStub<'a> {
    /// Create the stub for one transaction.
    pub fn new(
        tx_id: impl Into<String>,
        input: ChaincodeInput,
        store: &'a dyn StateStore,
        config: &'a StubConfig,
    ) -> Self {
        Self {
            tx_id: tx_id.into(),
            input,
            store,
            config,
            overlay: StateOverlay::new(),
        }
    }

    /// Writes buffered so far.
    pub fn overlay(&self) -> &StateOverlay {
        &self.overlay
    }

    /// End the transaction, returning its buffered writes.
    pub fn into_overlay(self) -> StateOverlay {
        self.overlay
    }
}

impl ChaincodeStub for TxStub<'_> {
    fn input(&self) -> &ChaincodeInput {
        &self.input
    }

    fn tx_id(&self) -> &str {
        &self.tx_id
    }

    fn channel_id(&self) -> &str {
        &self.config.channel_id
    }

    /// Check the overlay first, then committed state.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        match self.overlay.get(key) {
            Some(value) => Ok(Some(value.to_vec())),
            None => self.store.get(key),
        }
    }

    /// Buffer a write. Enforces key/value size and total write byte limits;
    /// a rejected write leaves the overlay unchanged.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        if key.is_empty() {
            return Err(HostError::empty_key());
        }
        if key.len() > self.config.max_key_len {
            return Err(HostError::key_too_large());
        }
        if value.len() > self.config.max_value_len {
            return Err(HostError::value_too_large());
        }
        if self.overlay.projected_write_bytes(key, value.len()) > self.config.max_write_bytes {
            return Err(HostError::write_limit());
        }
        self.overlay.set(key.to_string(), value.to_vec());
        Ok(())
    }
}
