//! Infrastructure layer - Port implementations
//!
//! This module contains concrete implementations of the protocol crate's
//! ports (`PwmOutput`, `ByteTransport`) using the ESP32 peripherals.

pub mod drivers;
pub mod tasks;
pub mod types;
