//! `chaincode-shim` — host interface for chaincode execution.
//!
//! This crate defines the interface a chaincode uses to reach the peer
//! hosting it, plus an in-process host for running chaincode without a
//! peer. It provides:
//!
//! - `ChaincodeStub` trait — the accessor a chaincode reads its input from
//!   and reads/writes ledger state through
//! - `Chaincode` trait — the `init`/`invoke` entry points a chaincode implements
//! - `success` / `error` — response constructors
//! - `StateStore` trait — committed state backend abstraction
//! - `MemStore` — in-memory `StateStore`
//! - `TxStub` — per-transaction `ChaincodeStub` buffering writes in a `StateOverlay`
//! - `MockStub` — drives a chaincode through transactions and commits their writes
//! - `StubConfig` — channel and state size limits
//! - `HostError` — host-side error type with `ErrorCode` conversion
//!
//! Ordering, endorsement, and the peer transport are not modelled here.

pub mod error;
pub mod config;
pub mod state_store;
pub mod mem_store;
pub mod traits;
pub mod tx_stub;
pub mod mock_stub;

// Re-export commonly used types at the crate root.
pub use error::HostError;
pub use config::StubConfig;
pub use state_store::StateStore;
pub use mem_store::MemStore;
pub use traits::{error, success, Chaincode, ChaincodeStub};
pub use tx_stub::TxStub;
pub use mock_stub::MockStub;
