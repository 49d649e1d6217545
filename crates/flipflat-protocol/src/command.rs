//! Request parsing
//!
//! A request is `>` + command letter + 3 payload bytes. The terminator has
//! already been stripped by the frame reader. Bytes after the payload are
//! ignored, as real Alnitak panels do.

use core::fmt;

use crate::error::{FrameError, PayloadError};

/// Request start byte
pub const START_BYTE: u8 = b'>';

/// Start byte + code + payload
pub const REQUEST_LEN: usize = 5;

/// Raw 3-byte command payload
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Payload([u8; 3]);

impl Payload {
    pub const fn new(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// Parse the payload as a 3-digit decimal brightness value
    pub fn as_brightness(&self) -> Result<u8, PayloadError> {
        let value = self.as_number()?;
        u8::try_from(value).map_err(|_| PayloadError::OutOfRange(value))
    }

    /// Parse the payload as a 3-digit decimal number (000-999)
    pub fn as_number(&self) -> Result<u16, PayloadError> {
        self.0.iter().try_fold(0u16, |acc, &byte| {
            if byte.is_ascii_digit() {
                Ok(acc * 10 + u16::from(byte - b'0'))
            } else {
                Err(PayloadError::NotNumeric)
            }
        })
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match core::str::from_utf8(&self.0) {
            Ok(text) => write!(f, "Payload({text:?})"),
            Err(_) => write!(f, "Payload({:?})", self.0),
        }
    }
}

/// Parsed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `P` - ping
    Ping,
    /// `O` - open the cover
    OpenCover,
    /// `C` - close the cover
    CloseCover,
    /// `L` - turn the light on at the stored brightness
    LightOn,
    /// `D` - turn the light off, brightness is kept
    LightOff,
    /// `B` - store a new brightness
    SetBrightness(Payload),
    /// `J` - read the stored brightness
    GetBrightness,
    /// `S` - read motor, light and cover status
    GetStatus,
    /// `V` - read the firmware version
    GetVersion,
    /// Any other command letter
    Unknown(u8),
}

impl Command {
    /// Parse a complete frame (without terminator)
    pub fn parse(frame: &[u8]) -> Result<Self, FrameError> {
        match frame {
            [START_BYTE, code, a, b, c, ..] => Ok(Self::from_parts(*code, Payload([*a, *b, *c]))),
            [START_BYTE, ..] => Err(FrameError::TooShort),
            _ => Err(FrameError::MissingStart),
        }
    }

    /// Map a command letter to its variant. Only `B` keeps its payload.
    pub const fn from_parts(code: u8, payload: Payload) -> Self {
        match code {
            b'P' => Command::Ping,
            b'O' => Command::OpenCover,
            b'C' => Command::CloseCover,
            b'L' => Command::LightOn,
            b'D' => Command::LightOff,
            b'B' => Command::SetBrightness(payload),
            b'J' => Command::GetBrightness,
            b'S' => Command::GetStatus,
            b'V' => Command::GetVersion,
            other => Command::Unknown(other),
        }
    }

    /// Command letter as sent on the wire
    pub const fn code(&self) -> u8 {
        match self {
            Command::Ping => b'P',
            Command::OpenCover => b'O',
            Command::CloseCover => b'C',
            Command::LightOn => b'L',
            Command::LightOff => b'D',
            Command::SetBrightness(_) => b'B',
            Command::GetBrightness => b'J',
            Command::GetStatus => b'S',
            Command::GetVersion => b'V',
            Command::Unknown(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_letter() {
        let cases: [(&[u8], Command); 9] = [
            (b">P000", Command::Ping),
            (b">O000", Command::OpenCover),
            (b">C000", Command::CloseCover),
            (b">L000", Command::LightOn),
            (b">D000", Command::LightOff),
            (b">B128", Command::SetBrightness(Payload::new(*b"128"))),
            (b">J000", Command::GetBrightness),
            (b">S000", Command::GetStatus),
            (b">V000", Command::GetVersion),
        ];
        for (frame, expected) in cases {
            assert_eq!(Command::parse(frame), Ok(expected));
            assert_eq!(expected.code(), frame[1]);
        }
    }

    #[test]
    fn unknown_letter_is_kept() {
        assert_eq!(Command::parse(b">Z000"), Ok(Command::Unknown(b'Z')));
        assert_eq!(Command::parse(b">p000"), Ok(Command::Unknown(b'p')));
    }

    #[test]
    fn rejects_malformed_frames() {
        assert_eq!(Command::parse(b"P000"), Err(FrameError::MissingStart));
        assert_eq!(Command::parse(b"*P99000"), Err(FrameError::MissingStart));
        assert_eq!(Command::parse(b""), Err(FrameError::MissingStart));
        assert_eq!(Command::parse(b">"), Err(FrameError::TooShort));
        assert_eq!(Command::parse(b">B12"), Err(FrameError::TooShort));
    }

    #[test]
    fn ignores_trailing_bytes() {
        assert_eq!(Command::parse(b">P000xyz"), Ok(Command::Ping));
    }

    #[test]
    fn brightness_payload_bounds() {
        assert_eq!(Payload::new(*b"000").as_brightness(), Ok(0));
        assert_eq!(Payload::new(*b"255").as_brightness(), Ok(255));
        assert_eq!(
            Payload::new(*b"256").as_brightness(),
            Err(PayloadError::OutOfRange(256))
        );
        assert_eq!(
            Payload::new(*b"999").as_brightness(),
            Err(PayloadError::OutOfRange(999))
        );
        assert_eq!(
            Payload::new(*b"1a0").as_brightness(),
            Err(PayloadError::NotNumeric)
        );
        assert_eq!(
            Payload::new(*b" 12").as_brightness(),
            Err(PayloadError::NotNumeric)
        );
    }
}
