//! PWM output abstraction layer
//!
//! Provides a trait-based abstraction for the panel dimmer,
//! allowing the command processor to be hardware-agnostic.

/// Abstract PWM output
///
/// The channel, frequency and resolution are fixed when the implementation
/// is constructed. The processor only ever writes raw duty values.
pub trait PwmOutput {
    type Error: core::fmt::Debug;

    /// Write a raw duty value to the output
    fn set_duty(&mut self, duty: u32) -> Result<(), Self::Error>;
}

impl<T: PwmOutput + ?Sized> PwmOutput for &mut T {
    type Error = T::Error;

    fn set_duty(&mut self, duty: u32) -> Result<(), Self::Error> {
        (**self).set_duty(duty)
    }
}

/// Inclusive hardware duty range that brightness 0-255 maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyRange {
    min: u32,
    max: u32,
}

impl DutyRange {
    /// Create a custom range, e.g. `DutyRange::new(50, 5000)`
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. Ranges are build-time constants, so this fails
    /// at compile time when used in a `const`.
    pub const fn new(min: u32, max: u32) -> Self {
        assert!(min <= max, "duty range min must not exceed max");
        Self { min, max }
    }

    /// Full range of a timer with the given resolution: `0..=2^bits - 1`
    pub const fn for_resolution(bits: u8) -> Self {
        assert!(bits > 0 && bits <= 32, "resolution must be 1-32 bits");
        let max = if bits == 32 {
            u32::MAX
        } else {
            (1u32 << bits) - 1
        };
        Self { min: 0, max }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Whether every duty in the range is valid for a timer of `bits`
    /// resolution. Always false outside 1-32 bits.
    pub const fn fits_resolution(&self, bits: u8) -> bool {
        match bits {
            1..=31 => self.max < (1u32 << bits),
            32 => true,
            _ => false,
        }
    }

    /// Linearly map brightness 0-255 onto the range
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn scale(&self, brightness: u8) -> u32 {
        let span = (self.max - self.min) as u64;
        let offset = span * brightness as u64 / u8::MAX as u64;
        // offset <= span, so the sum stays within u32
        self.min + offset as u32
    }
}
