//! Shared test helpers for integration tests.
//!
//! Provides a recording stub that counts state calls and can inject host
//! failures, a store whose reads always fail, ledger factories, and
//! tracing setup including log capture.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeMap;
use std::io;
use std::sync::{Arc, Mutex};

use chaincode_primitives::ChaincodeInput;
use chaincode_shim::{ChaincodeStub, HostError, MemStore, MockStub, StateStore, StubConfig};
use simple_chaincode::SimpleChaincode;

// ── Tracing ──

/// Install a test-writer subscriber once per test binary.
///
/// Honours `RUST_LOG`; silent by default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Shared in-memory sink for formatted log output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that formats every event into a buffer and
/// return the captured text.
pub fn capture_logs<F: FnOnce()>(f: F) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

// ── Recording stub ──

/// `ChaincodeStub` over a plain map that records every state call.
pub struct RecordingStub {
    input: ChaincodeInput,
    pub state: BTreeMap<String, Vec<u8>>,
    reads: Cell<usize>,
    pub writes: usize,
    pub read_error: Option<HostError>,
    pub write_error: Option<HostError>,
}

impl RecordingStub {
    pub fn new(args: &[&str]) -> Self {
        Self {
            input: ChaincodeInput::from_strs(args),
            state: BTreeMap::new(),
            reads: Cell::new(0),
            writes: 0,
            read_error: None,
            write_error: None,
        }
    }

    pub fn with_state(mut self, key: &str, value: &[u8]) -> Self {
        self.state.insert(key.to_string(), value.to_vec());
        self
    }

    pub fn failing_reads(mut self, err: HostError) -> Self {
        self.read_error = Some(err);
        self
    }

    pub fn failing_writes(mut self, err: HostError) -> Self {
        self.write_error = Some(err);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl ChaincodeStub for RecordingStub {
    fn input(&self) -> &ChaincodeInput {
        &self.input
    }

    fn tx_id(&self) -> &str {
        "recording-tx"
    }

    fn channel_id(&self) -> &str {
        "recording-channel"
    }

    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        self.reads.set(self.reads.get() + 1);
        match &self.read_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.state.get(key).cloned()),
        }
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        self.writes += 1;
        if let Some(err) = &self.write_error {
            return Err(err.clone());
        }
        self.state.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

// ── Stores ──

/// Committed store whose reads always fail.
pub struct UnreadableStore;

impl StateStore for UnreadableStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, HostError> {
        Err(HostError::internal("state database unavailable"))
    }

    fn apply(&mut self, _writes: BTreeMap<String, Vec<u8>>) -> Result<(), HostError> {
        Ok(())
    }
}

// ── Ledger factories ──

/// Fresh ledger hosting the chaincode over an empty in-memory store.
pub fn ledger() -> MockStub<SimpleChaincode> {
    init_tracing();
    MockStub::new("simple", SimpleChaincode::new())
}

/// Ledger with custom limits.
pub fn ledger_with_config(config: StubConfig) -> MockStub<SimpleChaincode> {
    init_tracing();
    MockStub::with_store("simple", SimpleChaincode::new(), MemStore::new(), config)
}

/// Ledger whose committed reads always fail.
pub fn unreadable_ledger() -> MockStub<SimpleChaincode, UnreadableStore> {
    init_tracing();
    MockStub::with_store(
        "simple",
        SimpleChaincode::new(),
        UnreadableStore,
        StubConfig::default(),
    )
}
