//! Error types for the chaincode boundary.
//!
//! `ErrorCode` is the numeric table the host uses to classify state access
//! failures. `CodecError` covers malformed boundary encodings.

use core::fmt;

/// Host error codes.
///
/// The repr values are stable: they appear in host logs and may be carried
/// across a process boundary by a real peer transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    EmptyKey = 1,
    KeyTooLarge = 2,
    ValueTooLarge = 3,
    WriteLimit = 4,
    InvalidEncoding = 5,
    Internal = 6,
}

impl ErrorCode {
    /// Return the i32 representation of this error code.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => write!(f, "ERR_EMPTY_KEY"),
            Self::KeyTooLarge => write!(f, "ERR_KEY_TOO_LARGE"),
            Self::ValueTooLarge => write!(f, "ERR_VALUE_TOO_LARGE"),
            Self::WriteLimit => write!(f, "ERR_WRITE_LIMIT"),
            Self::InvalidEncoding => write!(f, "ERR_INVALID_ENCODING"),
            Self::Internal => write!(f, "ERR_INTERNAL"),
        }
    }
}

/// Failure while decoding a boundary message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("unexpected end of data: needed {needed} bytes at offset {offset}")]
    UnexpectedEof { needed: usize, offset: usize },

    #[error("invalid bool value: {0}")]
    InvalidBool(u8),

    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,

    #[error("invalid status: {0}")]
    InvalidStatus(i32),

    #[error("{0} trailing bytes after message")]
    TrailingBytes(usize),

    #[error("field of {0} bytes exceeds the u32 length prefix")]
    TooLong(usize),
}

impl CodecError {
    /// All codec failures are reported to the host as `InvalidEncoding`.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidEncoding
    }
}
