//! In-process host that drives a chaincode through transactions.
//!
//! `MockStub` plays the peer's part without a network: for each
//! transaction it builds a `TxStub`, calls the chaincode, and then either
//! commits the buffered writes to its `StateStore` (success) or discards
//! them (failure).
//!
//! Transactions run one at a time; ordering and endorsement are out of
//! scope.

use chaincode_primitives::{
    codec::{decode_chaincode_input, encode_response},
    ChaincodeInput, Response,
};
use tracing::{debug, warn};

use crate::config::StubConfig;
use crate::error::HostError;
use crate::mem_store::MemStore;
use crate::state_store::StateStore;
use crate::traits::Chaincode;
use crate::tx_stub::TxStub;

/// Mock peer hosting a single chaincode.
pub struct MockStub<C, S = MemStore> {
    name: String,
    chaincode: C,
    store: S,
    config: StubConfig,
}

impl<C: Chaincode> MockStub<C, MemStore> {
    /// Host `chaincode` over an empty in-memory store with default limits.
    pub fn new(name: impl Into<String>, chaincode: C) -> Self {
        Self::with_store(name, chaincode, MemStore::new(), StubConfig::default())
    }
}

impl<C: Chaincode, S: StateStore> MockStub<C, S> {
    /// Host `chaincode` over the given store and configuration.
    pub fn with_store(name: impl Into<String>, chaincode: C, store: S, config: StubConfig) -> Self {
        Self {
            name: name.into(),
            chaincode,
            store,
            config,
        }
    }

    /// Name the chaincode is hosted under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Committed state backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// Read committed state outside of any transaction.
    pub fn state(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        self.store.get(key)
    }

    /// Run the chaincode's `init` with the given arguments.
    pub fn mock_init<I, A>(&mut self, tx_id: &str, args: I) -> Response
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u8]>,
    {
        self.execute(tx_id, collect_input(args).into_init())
    }

    /// Run the chaincode's `invoke` with the given arguments.
    pub fn mock_invoke<I, A>(&mut self, tx_id: &str, args: I) -> Response
    where
        I: IntoIterator<Item = A>,
        A: AsRef<[u8]>,
    {
        self.execute(tx_id, collect_input(args))
    }

    /// Run one transaction from an encoded `ChaincodeInput` and return the
    /// encoded `Response`.
    ///
    /// Fails only when the input cannot be decoded or the response does not
    /// fit the length prefixes; chaincode failures are carried inside the
    /// encoded response.
    pub fn invoke_encoded(&mut self, tx_id: &str, data: &[u8]) -> Result<Vec<u8>, HostError> {
        let input = decode_chaincode_input(data).map_err(|err| {
            warn!(chaincode = %self.name, tx_id, error = %err, "rejecting malformed input");
            HostError::from(err)
        })?;
        let response = self.execute(tx_id, input);
        Ok(encode_response(&response)?)
    }

    /// Run one transaction and settle its writes.
    pub fn execute(&mut self, tx_id: &str, input: ChaincodeInput) -> Response {
        let is_init = input.is_init;
        debug!(chaincode = %self.name, tx_id, is_init, "transaction started");

        let mut stub = TxStub::new(tx_id, input, &self.store, &self.config);
        let response = if is_init {
            self.chaincode.init(&mut stub)
        } else {
            self.chaincode.invoke(&mut stub)
        };
        let overlay = stub.into_overlay();

        if !response.is_ok() {
            warn!(
                chaincode = %self.name,
                tx_id,
                message = %response.message,
                discarded = overlay.len(),
                "transaction failed, writes discarded"
            );
            return response;
        }

        let writes = overlay.len();
        if let Err(err) = self.store.apply(overlay.drain()) {
            warn!(chaincode = %self.name, tx_id, error = %err, "commit failed");
            return Response::error(err.to_string());
        }
        debug!(chaincode = %self.name, tx_id, writes, "transaction committed");
        response
    }
}

fn collect_input<I, A>(args: I) -> ChaincodeInput
where
    I: IntoIterator<Item = A>,
    A: AsRef<[u8]>,
{
    ChaincodeInput::new(args.into_iter().map(|a| a.as_ref().to_vec()).collect())
}
