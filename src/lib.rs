#![no_std]

//! ESP32 firmware emulating an Alnitak flat panel
//!
//! The protocol itself lives in `flipflat-protocol`; this crate wires it to
//! the LEDC dimmer and the serial ports.

pub mod config;
pub mod infrastructure;
