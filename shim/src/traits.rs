//! Chaincode-facing traits and response constructors.
//!
//! A chaincode implements `Chaincode`. The host calls `init` once when the
//! chaincode is instantiated and `invoke` for every later transaction,
//! passing a `ChaincodeStub` scoped to that transaction.

use chaincode_primitives::{ChaincodeInput, Response};

use crate::error::HostError;

/// Accessor a chaincode uses during one transaction.
///
/// Exposes the invocation's arguments and synchronous access to ledger
/// state. Writes become visible to later reads in the same transaction and
/// are committed only if the transaction succeeds.
pub trait ChaincodeStub {
    /// The invocation input for this transaction.
    fn input(&self) -> &ChaincodeInput;

    /// Transaction identifier assigned by the host.
    fn tx_id(&self) -> &str;

    /// Channel the transaction runs on.
    fn channel_id(&self) -> &str;

    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), HostError>;

    /// Raw invocation arguments, function name first.
    fn args(&self) -> &[Vec<u8>] {
        &self.input().args
    }

    /// Invocation arguments decoded as text.
    fn string_args(&self) -> Vec<String> {
        self.input().string_args()
    }

    /// The function name (first argument) and its parameters.
    fn function_and_parameters(&self) -> (String, Vec<String>) {
        self.input().function_and_parameters()
    }
}

/// Entry points of a chaincode.
pub trait Chaincode: Send + Sync {
    /// Called once when the chaincode is instantiated or upgraded.
    fn init(&self, stub: &mut dyn ChaincodeStub) -> Response;

    /// Called for every transaction proposal.
    fn invoke(&self, stub: &mut dyn ChaincodeStub) -> Response;
}

/// Successful response with an optional payload.
pub fn success(payload: Option<Vec<u8>>) -> Response {
    Response::success(payload)
}

/// Failed response carrying `message`.
pub fn error(message: impl Into<String>) -> Response {
    Response::error(message)
}
