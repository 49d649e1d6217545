use core::fmt;

/// Reasons a complete frame is dropped without a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// First byte is not `>`
    MissingStart,
    /// Fewer than start byte + code + 3 payload bytes
    TooShort,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::MissingStart => f.write_str("frame does not start with '>'"),
            FrameError::TooShort => f.write_str("frame is shorter than 5 bytes"),
        }
    }
}

/// Invalid numeric payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadError {
    /// Payload contains something other than ASCII digits
    NotNumeric,
    /// Parsed value does not fit the 0-255 brightness range
    OutOfRange(u16),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::NotNumeric => f.write_str("payload is not a 3-digit number"),
            PayloadError::OutOfRange(value) => write!(f, "value {value} is out of range 0-255"),
        }
    }
}

/// Error code carried in the payload of an `*E` response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnknownCommand,
    InvalidPayload,
}

impl ErrorCode {
    pub const fn as_payload(self) -> [u8; 3] {
        match self {
            ErrorCode::UnknownCommand => *b"000",
            ErrorCode::InvalidPayload => *b"001",
        }
    }
}
