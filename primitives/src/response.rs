//! Invocation response returned by a chaincode to the peer.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::types::{STATUS_ERROR, STATUS_OK};

/// Outcome class of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum Status {
    /// The invocation succeeded; its writes may be endorsed.
    Ok = STATUS_OK,
    /// The invocation failed; its writes must be discarded.
    Error = STATUS_ERROR,
}

impl Status {
    /// Returns true if the invocation succeeded.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Convert from the numeric wire status.
    pub fn from_i32(v: i32) -> Option<Self> {
        match v {
            STATUS_OK => Some(Self::Ok),
            STATUS_ERROR => Some(Self::Error),
            _ => None,
        }
    }

    /// Return the numeric wire status.
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Response of a single invocation.
///
/// A success carries an optional payload and an empty message; a failure
/// carries a message and an empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    /// Successful response with an optional payload.
    pub fn success(payload: Option<Vec<u8>>) -> Self {
        Self {
            status: Status::Ok,
            message: String::new(),
            payload: payload.unwrap_or_default(),
        }
    }

    /// Failed response carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Returns true if the invocation succeeded.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Ok => write!(f, "{} ({} byte payload)", self.status, self.payload.len()),
            Status::Error => write!(f, "{}: {}", self.status, self.message),
        }
    }
}
