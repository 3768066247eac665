//! Constants shared by the chaincode, the stub, and the mock ledger.

/// Response status for a successful invocation.
pub const STATUS_OK: i32 = 200;

/// Response status for a failed invocation.
pub const STATUS_ERROR: i32 = 500;

/// Default maximum length of a state key in bytes.
pub const MAX_KEY_LEN: usize = 256;

/// Default maximum length of a state value in bytes.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// Default maximum bytes (keys + values) a single transaction may write.
pub const MAX_WRITE_BYTES: u64 = 4 * 1024 * 1024; // 4 MiB
