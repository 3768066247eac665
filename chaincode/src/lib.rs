//! `simple-chaincode` — a key/value chaincode with two functions.
//!
//! - `put <key> <value>` stores the value's bytes under the key
//! - `get <key>` returns the bytes stored under the key
//!
//! All state lives in the host ledger and is reached through the
//! `ChaincodeStub` passed to each call; the chaincode itself keeps nothing
//! between invocations.
//!
//! ## Architecture
//!
//! - [`function::Function`] — recognized function names and their arity
//! - [`error::ChaincodeError`] — failure taxonomy, converted to a failure
//!   `Response` at the dispatcher
//! - [`contract::SimpleChaincode`] — `init`, the `invoke` dispatcher, and
//!   the `put` / `get` handlers

pub mod contract;
pub mod error;
pub mod function;

pub use contract::SimpleChaincode;
pub use error::ChaincodeError;
pub use function::Function;
