//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use flipflat_protocol::{
    CommandProcessor, NullTransport, ProcessorConfig, PwmOutput, SerialTransport, StatePin,
    TransportSelector,
};

// -----------------------------------------------------------------------------
// PWM
// -----------------------------------------------------------------------------

/// Records every duty value written
#[derive(Debug, Default)]
pub struct RecordingPwm {
    pub writes: Vec<u32>,
}

impl RecordingPwm {
    pub fn last(&self) -> Option<u32> {
        self.writes.last().copied()
    }
}

impl PwmOutput for RecordingPwm {
    type Error = Infallible;

    fn set_duty(&mut self, duty: u32) -> Result<(), Self::Error> {
        self.writes.push(duty);
        Ok(())
    }
}

#[derive(Debug)]
pub struct PwmFault;

/// Output that rejects every write
#[derive(Debug, Default)]
pub struct FaultyPwm {
    pub attempts: usize,
}

impl PwmOutput for FaultyPwm {
    type Error = PwmFault;

    fn set_duty(&mut self, _duty: u32) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err(PwmFault)
    }
}

// -----------------------------------------------------------------------------
// Serial
// -----------------------------------------------------------------------------

#[derive(Debug)]
pub struct SerialFault;

impl embedded_io::Error for SerialFault {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

/// In-memory serial port: `rx` is what the host sent, `tx` what the device wrote
#[derive(Debug, Default)]
pub struct MockSerial {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
    pub fail_next_read: bool,
}

impl MockSerial {
    pub fn send(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    pub fn take_output(&mut self) -> String {
        String::from_utf8(std::mem::take(&mut self.tx)).unwrap()
    }
}

impl embedded_io::ErrorType for MockSerial {
    type Error = SerialFault;
}

impl embedded_io::ReadReady for MockSerial {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(self.fail_next_read || !self.rx.is_empty())
    }
}

impl embedded_io::Read for MockSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(SerialFault);
        }
        let count = buf.len().min(self.rx.len());
        for slot in buf.iter_mut().take(count) {
            *slot = self.rx.pop_front().unwrap();
        }
        Ok(count)
    }
}

impl embedded_io::Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Link state pin that the test flips by hand
#[derive(Debug, Clone, Default)]
pub struct MockStatePin {
    pub high: Rc<Cell<bool>>,
}

impl embedded_hal::digital::ErrorType for MockStatePin {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for MockStatePin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

// -----------------------------------------------------------------------------
// Harnesses
// -----------------------------------------------------------------------------

pub type Wired = SerialTransport<MockSerial>;
pub type Wireless = SerialTransport<MockSerial, StatePin<MockStatePin>>;

/// Wired-only device, the common case
pub struct Device {
    pub selector: TransportSelector<Wired, NullTransport>,
    pub processor: CommandProcessor<RecordingPwm>,
}

impl Device {
    pub fn new(config: &ProcessorConfig) -> Self {
        let mut processor = CommandProcessor::new(config, RecordingPwm::default());
        processor.apply_output();
        Self {
            selector: TransportSelector::new(SerialTransport::new(MockSerial::default()), NullTransport),
            processor,
        }
    }

    /// Send raw bytes and return everything the device answered
    pub fn exchange(&mut self, input: &[u8]) -> String {
        self.selector.wired().inner_mut().send(input);
        while self.selector.poll(&mut self.processor) > 0 {}
        self.selector.wired().inner_mut().take_output()
    }

    pub fn duty(&self) -> Option<u32> {
        self.processor.pwm().last()
    }
}

/// Device with a wired port and a Bluetooth-style link with a state pin
pub struct DualDevice {
    pub selector: TransportSelector<Wired, Wireless>,
    pub processor: CommandProcessor<RecordingPwm>,
    pub link: Rc<Cell<bool>>,
}

impl DualDevice {
    pub fn new(config: &ProcessorConfig) -> Self {
        let pin = MockStatePin::default();
        let link = pin.high.clone();
        let wireless = SerialTransport::with_link(MockSerial::default(), StatePin::new(pin));
        Self {
            selector: TransportSelector::new(SerialTransport::new(MockSerial::default()), wireless),
            processor: CommandProcessor::new(config, RecordingPwm::default()),
            link,
        }
    }

    pub fn poll_idle(&mut self) {
        while self.selector.poll(&mut self.processor) > 0 {}
    }
}
