use embassy_time::Duration;

use flipflat_protocol::{DeviceId, DutyRange, ProcessorConfig};

pub struct PwmConfig {
    pub frequency_hz: u32,
    pub resolution_bits: u8,
    pub duty: DutyRange,
}

pub struct SerialConfig {
    pub baudrate: u32,
}

#[cfg(any(
    all(feature = "flat-man-l", feature = "flat-man-xl"),
    all(feature = "flat-man-l", feature = "flat-man"),
    all(feature = "flat-man-xl", feature = "flat-man"),
))]
compile_error!("select at most one device variant feature");

#[cfg(feature = "flat-man-l")]
pub const DEVICE_ID: DeviceId = DeviceId::FlatManL;
#[cfg(feature = "flat-man-xl")]
pub const DEVICE_ID: DeviceId = DeviceId::FlatManXl;
#[cfg(feature = "flat-man")]
pub const DEVICE_ID: DeviceId = DeviceId::FlatMan;
#[cfg(not(any(feature = "flat-man-l", feature = "flat-man-xl", feature = "flat-man")))]
pub const DEVICE_ID: DeviceId = DeviceId::FlipFlat;

/// LEDC duty resolution, the processor's duty range is derived from it
pub const PWM_RESOLUTION_BITS: u8 = 8;

pub const PWM: PwmConfig = PwmConfig {
    frequency_hz: 1_000,
    resolution_bits: PWM_RESOLUTION_BITS,
    duty: DutyRange::for_resolution(PWM_RESOLUTION_BITS),
};

const _: () = assert!(
    PWM.duty.fits_resolution(PWM.resolution_bits),
    "PWM duty range exceeds the timer resolution"
);

pub const WIRED: SerialConfig = SerialConfig { baudrate: 9600 };

#[cfg(feature = "bluetooth")]
pub const BLUETOOTH: SerialConfig = SerialConfig { baudrate: 9600 };

pub const PROTOCOL: ProcessorConfig = ProcessorConfig::new(DEVICE_ID).with_duty(PWM.duty);

/// Sleep between polls when no bytes arrived
pub const POLL_INTERVAL: Duration = Duration::from_millis(2);

/// Build stamp set by `build.rs`, only used for the boot log
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

#[macro_export]
macro_rules! panel_gpio {
    ($p:expr) => {
        $p.GPIO12
    };
}

/// Wired UART0 pins as `(rx, tx)`
#[macro_export]
macro_rules! wired_gpio {
    ($p:expr) => {
        ($p.GPIO3, $p.GPIO1)
    };
}

/// Bluetooth module pins as `(rx, tx, state)`
#[cfg(feature = "bluetooth")]
#[macro_export]
macro_rules! bluetooth_gpio {
    ($p:expr) => {
        ($p.GPIO16, $p.GPIO17, $p.GPIO4)
    };
}
