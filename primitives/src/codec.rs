//! Deterministic serialization for chaincode boundary types.
//!
//! All numeric values are little-endian.
//!
//! Encoding format:
//! - Fixed-size fields (u32, i32, bool) are written directly
//! - Variable-length fields (`Vec<u8>`, `String`) are length-prefixed (u32 LE)
//! - Repeated fields are count-prefixed (u32 LE) then concatenated
//!
//! ```text
//! ChaincodeInput: [is_init: u8] [count: u32] ([len: u32] [arg])*
//! Response:       [status: i32] [len: u32] [message] [len: u32] [payload]
//! ```
//!
//! Decoding is strict: a message must be consumed exactly. Encoding fails
//! with `CodecError::TooLong` when a field or argument count does not fit
//! its u32 prefix.

use crate::error::CodecError;
use crate::input::ChaincodeInput;
use crate::response::{Response, Status};

/// A cursor for reading bytes during decoding.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if n > self.remaining() {
            return Err(CodecError::UnexpectedEof {
                needed: n,
                offset: self.pos,
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8, CodecError> {
        let bytes = self.read_bytes(1)?;
        Ok(bytes[0])
    }

    fn read_u32(&mut self) -> Result<u32, CodecError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_i32(&mut self) -> Result<i32, CodecError> {
        let bytes = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_bool(&mut self) -> Result<bool, CodecError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            b => Err(CodecError::InvalidBool(b)),
        }
    }

    fn read_var_bytes(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read_u32()? as usize;
        Ok(self.read_bytes(len)?.to_vec())
    }

    fn read_string(&mut self) -> Result<String, CodecError> {
        let bytes = self.read_var_bytes()?;
        String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)
    }

    fn finish(self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }
}

// ── Encoding helpers ──

fn write_u8(buf: &mut Vec<u8>, v: u8) {
    buf.push(v);
}

fn write_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn write_i32(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn write_bool(buf: &mut Vec<u8>, v: bool) {
    write_u8(buf, if v { 1 } else { 0 });
}

fn checked_len(len: usize) -> Result<u32, CodecError> {
    u32::try_from(len).map_err(|_| CodecError::TooLong(len))
}

fn write_var_bytes(buf: &mut Vec<u8>, data: &[u8]) -> Result<(), CodecError> {
    write_u32(buf, checked_len(data.len())?);
    buf.extend_from_slice(data);
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, s: &str) -> Result<(), CodecError> {
    write_var_bytes(buf, s.as_bytes())
}

// ── ChaincodeInput ──

/// Encode a `ChaincodeInput` to deterministic bytes.
pub fn encode_chaincode_input(input: &ChaincodeInput) -> Result<Vec<u8>, CodecError> {
    let body: usize = input.args.iter().map(|a| 4 + a.len()).sum();
    let mut buf = Vec::with_capacity(5 + body);

    write_bool(&mut buf, input.is_init);
    write_u32(&mut buf, checked_len(input.args.len())?);
    for arg in &input.args {
        write_var_bytes(&mut buf, arg)?;
    }

    Ok(buf)
}

/// Decode a `ChaincodeInput` from bytes.
pub fn decode_chaincode_input(data: &[u8]) -> Result<ChaincodeInput, CodecError> {
    let mut r = Reader::new(data);

    let is_init = r.read_bool()?;
    let count = r.read_u32()? as usize;
    // Each argument needs at least its 4-byte length prefix.
    let mut args = Vec::with_capacity(count.min(r.remaining() / 4));
    for _ in 0..count {
        args.push(r.read_var_bytes()?);
    }
    r.finish()?;

    Ok(ChaincodeInput { args, is_init })
}

// ── Response ──

/// Encode a `Response` to deterministic bytes.
pub fn encode_response(resp: &Response) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::with_capacity(12 + resp.message.len() + resp.payload.len());

    write_i32(&mut buf, resp.status.as_i32());
    write_string(&mut buf, &resp.message)?;
    write_var_bytes(&mut buf, &resp.payload)?;

    Ok(buf)
}

/// Decode a `Response` from bytes.
pub fn decode_response(data: &[u8]) -> Result<Response, CodecError> {
    let mut r = Reader::new(data);

    let raw_status = r.read_i32()?;
    let status = Status::from_i32(raw_status).ok_or(CodecError::InvalidStatus(raw_status))?;
    let message = r.read_string()?;
    let payload = r.read_var_bytes()?;
    r.finish()?;

    Ok(Response {
        status,
        message,
        payload,
    })
}
