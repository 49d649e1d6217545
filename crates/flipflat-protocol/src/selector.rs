//! Wired / wireless transport arbitration
//!
//! Exactly one transport feeds the frame reader per poll. The wireless link
//! takes over while it reports a connected client; otherwise the wired port
//! is used. Any switch, and any I/O error, drops the partial frame of the
//! link that was active. Bytes arriving on the inactive link are dropped
//! too, so neither link resumes with input from an earlier session.

use crate::frame::FrameReader;
use crate::processor::CommandProcessor;
use crate::pwm::PwmOutput;
use crate::transport::ByteTransport;

/// Bytes read from a transport per poll
pub const READ_CHUNK: usize = 16;

/// Transport currently feeding the frame reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTransport {
    Wired,
    Wireless,
}

/// Transport selector state machine
pub struct TransportSelector<W: ByteTransport, R: ByteTransport> {
    wired: W,
    wireless: R,
    active: ActiveTransport,
    reader: FrameReader,
}

impl<W: ByteTransport, R: ByteTransport> TransportSelector<W, R> {
    pub fn new(wired: W, wireless: R) -> Self {
        Self {
            wired,
            wireless,
            active: ActiveTransport::Wired,
            reader: FrameReader::new(),
        }
    }

    pub fn active(&self) -> ActiveTransport {
        self.active
    }

    /// Bytes of the frame in progress on the active transport
    pub fn pending(&self) -> usize {
        self.reader.pending()
    }

    pub fn wired(&mut self) -> &mut W {
        &mut self.wired
    }

    pub fn wireless(&mut self) -> &mut R {
        &mut self.wireless
    }

    /// Run one cooperative iteration: pick the transport, read what is
    /// available and process every completed frame.
    ///
    /// Returns the number of bytes consumed, 0 when there was nothing to do.
    pub fn poll<P: PwmOutput>(&mut self, processor: &mut CommandProcessor<P>) -> usize {
        self.select();

        match self.active {
            ActiveTransport::Wired => {
                drain(&mut self.wireless, "wireless");
                service(&mut self.wired, &mut self.reader, processor, "wired")
            }
            ActiveTransport::Wireless => {
                drain(&mut self.wired, "wired");
                service(&mut self.wireless, &mut self.reader, processor, "wireless")
            }
        }
    }

    fn select(&mut self) {
        let next = if self.wireless.is_connected() {
            ActiveTransport::Wireless
        } else {
            ActiveTransport::Wired
        };

        if next != self.active {
            log::info!("selector: switching {:?} -> {:?}", self.active, next);
            self.reader.reset();
            self.active = next;
        }
    }
}

fn drain<T: ByteTransport>(transport: &mut T, name: &str) {
    match transport.discard_pending() {
        Ok(0) => {}
        Ok(dropped) => log::debug!("selector: dropped {} bytes from inactive {}", dropped, name),
        Err(e) => log::warn!("selector: {} drain failed: {:?}", name, e),
    }
}

fn service<T: ByteTransport, P: PwmOutput>(
    transport: &mut T,
    reader: &mut FrameReader,
    processor: &mut CommandProcessor<P>,
    name: &str,
) -> usize {
    let mut buf = [0u8; READ_CHUNK];
    let read = match transport.read_available(&mut buf) {
        Ok(read) => read,
        Err(e) => {
            log::warn!("selector: {} read failed: {:?}", name, e);
            reader.reset();
            return 0;
        }
    };

    for &byte in &buf[..read.min(READ_CHUNK)] {
        let Some(frame) = reader.push(byte) else {
            continue;
        };
        let Some(response) = processor.process(&frame) else {
            continue;
        };
        if let Err(e) = transport.write_all(response.encode().as_bytes()) {
            log::warn!("selector: {} write failed: {:?}", name, e);
        }
    }

    read
}
