#![no_std]

//! Alnitak (Flip-Flat / Flat-Man) command protocol engine
//!
//! Architecture layers:
//! - `frame` - Request framing (`\r`-terminated lines, bounded buffer)
//! - `command` - Fixed-length command parsing into [`Command`]
//! - `device` - Device identity and the mutable [`DeviceState`]
//! - `response` - Response framing (`*`-prefixed, `\n`-terminated)
//! - `pwm` - Output abstraction ([`PwmOutput`] trait) and duty scaling
//! - `processor` - Command dispatch and state machine
//! - `transport` - Byte transport abstraction ([`ByteTransport`] trait + serial adapter)
//! - `selector` - Wired / wireless transport arbitration
//!
//! The crate is hardware-agnostic: the firmware provides a [`PwmOutput`]
//! and one or two [`ByteTransport`]s, everything else lives here.

pub mod command;
pub mod config;
pub mod device;
pub mod error;
pub mod frame;
pub mod processor;
pub mod pwm;
pub mod response;
pub mod selector;
pub mod transport;

// Command exports
pub use command::{Command, Payload};

// Config exports
pub use config::{BrightnessPolicy, ProcessorConfig};

// Device exports
pub use device::{CoverStatus, DeviceId, DeviceState, MotorStatus};

// Error exports
pub use error::{ErrorCode, FrameError, PayloadError};

// Frame exports
pub use frame::{Frame, FrameReader, MAX_FRAME_LEN, REQUEST_TERMINATOR};

// Processor exports
pub use processor::CommandProcessor;

// PWM exports
pub use pwm::{DutyRange, PwmOutput};

// Response exports
pub use response::{EncodedResponse, RESPONSE_TERMINATOR, Response};

// Transport exports
pub use selector::{ActiveTransport, TransportSelector};
pub use transport::{AlwaysLinked, ByteTransport, LinkStatus, NullTransport, SerialTransport, StatePin};
