//! Response framing
//!
//! `*` + command letter + device id (natural width) + 3 payload bytes + `\n`.
//! Requests end with `\r` but responses end with `\n`; hosts expect exactly
//! this asymmetry.

use core::fmt::{self, Write};

use heapless::String;

use crate::device::{DeviceId, DeviceState};
use crate::error::ErrorCode;

/// Response start byte
pub const RESPONSE_START: u8 = b'*';

/// Response terminator
pub const RESPONSE_TERMINATOR: u8 = b'\n';

/// Letter used for error responses
pub const ERROR_CODE: u8 = b'E';

/// Payload of commands that carry no value
pub const PLACEHOLDER: [u8; 3] = *b"OOO";

/// Encoded response capacity
pub const MAX_RESPONSE_LEN: usize = 16;

/// `*` + code + up to 3 id digits + payload + `\n`
const LONGEST_RESPONSE: usize = 1 + 1 + 3 + 3 + 1;

// `encode` relies on this to never truncate
const _: () = assert!(MAX_RESPONSE_LEN >= LONGEST_RESPONSE);

/// Encoded response bytes, terminator included
pub type EncodedResponse = String<MAX_RESPONSE_LEN>;

/// A single response frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    code: u8,
    device_id: DeviceId,
    payload: [u8; 3],
}

impl Response {
    pub const fn new(code: u8, device_id: DeviceId, payload: [u8; 3]) -> Self {
        Self {
            code,
            device_id,
            payload,
        }
    }

    /// Acknowledge with the `OOO` placeholder
    pub const fn ack(code: u8, device_id: DeviceId) -> Self {
        Self::new(code, device_id, PLACEHOLDER)
    }

    /// Zero-padded 3-digit value, e.g. `007`
    pub const fn value(code: u8, device_id: DeviceId, value: u8) -> Self {
        Self::new(
            code,
            device_id,
            [
                b'0' + value / 100,
                b'0' + (value / 10) % 10,
                b'0' + value % 10,
            ],
        )
    }

    /// `S` response built from the current state
    pub const fn status(state: &DeviceState) -> Self {
        Self::new(b'S', state.device_id, state.status_digits())
    }

    pub const fn error(device_id: DeviceId, error: ErrorCode) -> Self {
        Self::new(ERROR_CODE, device_id, error.as_payload())
    }

    pub const fn code(&self) -> u8 {
        self.code
    }

    pub const fn payload(&self) -> &[u8; 3] {
        &self.payload
    }

    pub const fn is_error(&self) -> bool {
        self.code == ERROR_CODE
    }

    /// Encode the full frame including the `\n` terminator
    pub fn encode(&self) -> EncodedResponse {
        let mut out = EncodedResponse::new();
        let _ = write!(out, "{self}");
        let _ = out.push(char::from(RESPONSE_TERMINATOR));
        out
    }
}

/// Formats the frame without its terminator
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(char::from(RESPONSE_START))?;
        f.write_char(char::from(self.code))?;
        write!(f, "{}", self.device_id)?;
        for &byte in &self.payload {
            f.write_char(char::from(byte))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_ack_with_terminator() {
        let response = Response::ack(b'P', DeviceId::FlipFlat);
        assert_eq!(response.encode().as_str(), "*P99OOO\n");
    }

    #[test]
    fn pads_values_to_three_digits() {
        assert_eq!(
            Response::value(b'J', DeviceId::FlatMan, 7).encode().as_str(),
            "*J19007\n"
        );
        assert_eq!(
            Response::value(b'B', DeviceId::FlatMan, 255).encode().as_str(),
            "*B19255\n"
        );
        assert_eq!(
            Response::value(b'B', DeviceId::FlatManL, 40).encode().as_str(),
            "*B10040\n"
        );
    }

    #[test]
    fn longest_response_is_not_truncated() {
        let response = Response::value(b'J', DeviceId::FlipFlat, 255);
        let encoded = response.encode();
        assert_eq!(encoded.as_str(), "*J99255\n");
        assert!(encoded.len() <= LONGEST_RESPONSE);
    }

    #[test]
    fn error_response_carries_device_id() {
        let response = Response::error(DeviceId::FlipFlat, ErrorCode::UnknownCommand);
        assert!(response.is_error());
        assert_eq!(response.encode().as_str(), "*E99000\n");
    }
}
