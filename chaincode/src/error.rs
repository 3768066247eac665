//! Chaincode error types.
//!
//! Every variant is terminal: the dispatcher turns it into a failure
//! `Response` whose message is the variant's `Display` output.

use chaincode_primitives::Response;
use chaincode_shim::HostError;

use crate::function::Function;

/// Failure of a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChaincodeError {
    /// The function name matched neither `put` nor `get`.
    #[error("No function name : {function} found")]
    UnknownFunction { function: String },

    /// The function was called with the wrong number of parameters.
    #[error("Incorrect number of arguments. Expecting {expected}")]
    IncorrectArgCount {
        function: Function,
        expected: usize,
        got: usize,
    },

    /// The host rejected a write. The message is the host's, verbatim.
    #[error(transparent)]
    PutState(HostError),

    /// The host failed to read the key.
    #[error("Failed to get state for {key}")]
    StateRead {
        key: String,
        #[source]
        source: HostError,
    },

    /// The key holds no value.
    ///
    /// Shares its message with `StateRead`; callers that need to tell the
    /// two apart match on the variant.
    #[error("Failed to get state for {key}")]
    StateNotFound { key: String },
}

impl ChaincodeError {
    /// Returns true if the error means the key is absent rather than the
    /// read having failed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StateNotFound { .. })
    }
}

impl From<ChaincodeError> for Response {
    fn from(err: ChaincodeError) -> Self {
        Response::error(err.to_string())
    }
}
