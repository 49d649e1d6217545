//! Device identity and state
//!
//! The state is a plain value owned by the command processor. Nothing here
//! touches hardware; the processor is responsible for keeping the PWM output
//! in sync with `brightness` and `light_on`.

use core::fmt;

/// Alnitak product code reported in every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DeviceId {
    /// Flat-Man L
    FlatManL = 10,
    /// Flat-Man XL
    FlatManXl = 15,
    /// Flat-Man
    FlatMan = 19,
    /// Flip-Flat
    FlipFlat = 99,
}

impl DeviceId {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            10 => Some(DeviceId::FlatManL),
            15 => Some(DeviceId::FlatManXl),
            19 => Some(DeviceId::FlatMan),
            99 => Some(DeviceId::FlipFlat),
            _ => None,
        }
    }

    /// Marketed product name
    pub const fn product_name(self) -> &'static str {
        match self {
            DeviceId::FlatManL => "Flat-Man L",
            DeviceId::FlatManXl => "Flat-Man XL",
            DeviceId::FlatMan => "Flat-Man",
            DeviceId::FlipFlat => "Flip-Flat",
        }
    }
}

/// Formats as the bare decimal code, e.g. `99`.
impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Simulated motor status. There is no motor, so it never leaves `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotorStatus {
    #[default]
    Stopped,
    Running,
}

impl MotorStatus {
    pub const fn as_digit(self) -> u8 {
        match self {
            MotorStatus::Stopped => b'0',
            MotorStatus::Running => b'1',
        }
    }
}

/// Simulated cover (shutter) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverStatus {
    /// Neither open nor closed, could be moving
    #[default]
    Unknown,
    Closed,
    Open,
}

impl CoverStatus {
    pub const fn as_digit(self) -> u8 {
        match self {
            CoverStatus::Unknown => b'0',
            CoverStatus::Closed => b'1',
            CoverStatus::Open => b'2',
        }
    }
}

/// Represents the device state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    pub device_id: DeviceId,
    /// Last commanded brightness, kept while the light is off
    pub brightness: u8,
    pub light_on: bool,
    pub cover: CoverStatus,
    pub motor: MotorStatus,
}

impl DeviceState {
    /// Create a new device state with the light off and the cover position unknown
    pub const fn new(device_id: DeviceId) -> Self {
        Self {
            device_id,
            brightness: 0,
            light_on: false,
            cover: CoverStatus::Unknown,
            motor: MotorStatus::Stopped,
        }
    }

    pub const fn light_digit(&self) -> u8 {
        if self.light_on { b'1' } else { b'0' }
    }

    /// Status triple reported by `S`: motor, light, cover
    pub const fn status_digits(&self) -> [u8; 3] {
        [
            self.motor.as_digit(),
            self.light_digit(),
            self.cover.as_digit(),
        ]
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new(DeviceId::FlipFlat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_id_round_trips_known_codes() {
        for id in [
            DeviceId::FlatManL,
            DeviceId::FlatManXl,
            DeviceId::FlatMan,
            DeviceId::FlipFlat,
        ] {
            assert_eq!(DeviceId::from_u8(id.as_u8()), Some(id));
        }
        assert_eq!(DeviceId::from_u8(42), None);
    }

    #[test]
    fn default_state_reports_all_zero_status() {
        let state = DeviceState::default();
        assert_eq!(&state.status_digits(), b"000");
    }

    #[test]
    fn status_digits_follow_field_order() {
        let mut state = DeviceState::new(DeviceId::FlatMan);
        state.light_on = true;
        state.cover = CoverStatus::Closed;
        assert_eq!(&state.status_digits(), b"011");
    }
}
