//! Host-side error types for chaincode state access.
//!
//! `HostError` is the error type returned by `ChaincodeStub` and
//! `StateStore` methods. It wraps `ErrorCode` from `chaincode-primitives`
//! for classified failures and provides an `Internal` variant for backend
//! failures that carry their own description.

use chaincode_primitives::{CodecError, ErrorCode};

/// Host-side error type returned by state accessors.
///
/// The `Display` output is what a chaincode passes back to its caller, so
/// it must be self-describing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// A classified error code.
    #[error("host error: {0}")]
    Code(ErrorCode),
    /// A backend failure with a descriptive message.
    /// Reported as `ERR_INTERNAL`.
    #[error("internal host error: {0}")]
    Internal(String),
}

impl HostError {
    /// Convert to the numeric error code.
    pub fn to_error_code(&self) -> i32 {
        match self {
            Self::Code(code) => code.as_i32(),
            Self::Internal(_) => ErrorCode::Internal.as_i32(),
        }
    }

    /// Create an empty-key error.
    pub fn empty_key() -> Self {
        Self::Code(ErrorCode::EmptyKey)
    }

    /// Create a key-too-large error.
    pub fn key_too_large() -> Self {
        Self::Code(ErrorCode::KeyTooLarge)
    }

    /// Create a value-too-large error.
    pub fn value_too_large() -> Self {
        Self::Code(ErrorCode::ValueTooLarge)
    }

    /// Create a write-limit error.
    pub fn write_limit() -> Self {
        Self::Code(ErrorCode::WriteLimit)
    }

    /// Create an invalid-encoding error.
    pub fn invalid_encoding() -> Self {
        Self::Code(ErrorCode::InvalidEncoding)
    }

    /// Create an internal error with a message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ErrorCode> for HostError {
    fn from(code: ErrorCode) -> Self {
        Self::Code(code)
    }
}

impl From<CodecError> for HostError {
    fn from(err: CodecError) -> Self {
        Self::Code(err.code())
    }
}
