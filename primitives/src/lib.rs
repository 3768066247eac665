//! `chaincode-primitives` — foundational types for the chaincode boundary.
//!
//! This crate provides the values that cross the boundary between a
//! chaincode and the peer hosting it: the invocation input, the response,
//! host error codes, the per-transaction write overlay, and a deterministic
//! binary encoding for inputs and responses.
//!
//! It has no knowledge of any particular chaincode; see `chaincode-shim`
//! for the host interface and `simple-chaincode` for the contract itself.

pub mod types;
pub mod error;
pub mod input;
pub mod response;
pub mod state;
pub mod codec;

// Re-export commonly used types at the crate root for convenience.
pub use types::{MAX_KEY_LEN, MAX_VALUE_LEN, MAX_WRITE_BYTES, STATUS_ERROR, STATUS_OK};
pub use error::{CodecError, ErrorCode};
pub use input::ChaincodeInput;
pub use response::{Response, Status};
pub use state::StateOverlay;
