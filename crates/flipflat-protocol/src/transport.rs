//! Byte transport abstraction layer
//!
//! A transport is anything that can report whether a host is attached, hand
//! out the bytes that are already available without blocking, and write a
//! response back. [`SerialTransport`] adapts any `embedded-io` serial port.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;
use embedded_io::{Read, ReadReady, Write};

/// Abstract byte transport
pub trait ByteTransport {
    type Error: core::fmt::Debug;

    /// Whether a host is attached to this transport
    fn is_connected(&mut self) -> bool;

    /// Read bytes that are already available. Returns `Ok(0)` instead of
    /// blocking when there are none.
    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write the whole buffer
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Read and drop everything that is already available.
    ///
    /// Returns the number of bytes dropped.
    fn discard_pending(&mut self) -> Result<usize, Self::Error> {
        let mut buf = [0u8; 16];
        let mut dropped = 0;
        loop {
            match self.read_available(&mut buf)? {
                0 => return Ok(dropped),
                read => dropped += read,
            }
        }
    }
}

/// Link presence source of a transport
pub trait LinkStatus {
    fn is_linked(&mut self) -> bool;
}

/// Wired links are always present
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysLinked;

impl LinkStatus for AlwaysLinked {
    fn is_linked(&mut self) -> bool {
        true
    }
}

/// Link presence read from a GPIO that is high while a client is connected,
/// like the STATE output of HC-05 style Bluetooth serial modules.
pub struct StatePin<P: InputPin> {
    pin: P,
}

impl<P: InputPin> StatePin<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> LinkStatus for StatePin<P> {
    fn is_linked(&mut self) -> bool {
        self.pin.is_high().unwrap_or(false)
    }
}

/// Serial port transport
pub struct SerialTransport<T, L = AlwaysLinked> {
    io: T,
    link: L,
}

impl<T> SerialTransport<T, AlwaysLinked>
where
    T: Read + Write + ReadReady,
{
    /// Wired port, always connected
    pub fn new(io: T) -> Self {
        Self {
            io,
            link: AlwaysLinked,
        }
    }
}

impl<T, L> SerialTransport<T, L>
where
    T: Read + Write + ReadReady,
    L: LinkStatus,
{
    /// Port whose connection state is reported by `link`
    pub fn with_link(io: T, link: L) -> Self {
        Self { io, link }
    }

    pub fn inner(&self) -> &T {
        &self.io
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.io
    }
}

impl<T, L> ByteTransport for SerialTransport<T, L>
where
    T: Read + Write + ReadReady,
    L: LinkStatus,
{
    type Error = T::Error;

    fn is_connected(&mut self) -> bool {
        self.link.is_linked()
    }

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() || !self.io.read_ready()? {
            return Ok(0);
        }
        self.io.read(buf)
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.io.write_all(bytes)?;
        self.io.flush()
    }
}

/// Transport that is never connected, used for an absent wireless link
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransport;

impl ByteTransport for NullTransport {
    type Error = Infallible;

    fn is_connected(&mut self) -> bool {
        false
    }

    fn read_available(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(0)
    }

    fn write_all(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }
}
