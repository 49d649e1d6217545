use crate::device::DeviceId;
use crate::pwm::DutyRange;

/// What to do with a `B` payload that is not a valid 0-255 value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessPolicy {
    /// Keep the state and answer with an `*E` invalid-payload response
    #[default]
    Reject,
    /// Keep the state and send nothing
    Ignore,
    /// Clamp numeric values above 255 to 255, reject non-numeric payloads
    Clamp,
}

/// Command processor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorConfig {
    pub device_id: DeviceId,
    /// Hardware duty range the brightness is scaled into
    pub duty: DutyRange,
    pub brightness_policy: BrightnessPolicy,
    pub initial_brightness: u8,
    pub initial_light_on: bool,
    /// Payload of the `V` response
    pub firmware_version: [u8; 3],
}

impl ProcessorConfig {
    /// 8-bit duty range, light off at zero brightness, firmware `001`
    pub const fn new(device_id: DeviceId) -> Self {
        Self {
            device_id,
            duty: DutyRange::for_resolution(8),
            brightness_policy: BrightnessPolicy::Reject,
            initial_brightness: 0,
            initial_light_on: false,
            firmware_version: *b"001",
        }
    }

    pub const fn with_duty(mut self, duty: DutyRange) -> Self {
        self.duty = duty;
        self
    }

    pub const fn with_brightness_policy(mut self, policy: BrightnessPolicy) -> Self {
        self.brightness_policy = policy;
        self
    }

    pub const fn with_initial_brightness(mut self, brightness: u8) -> Self {
        self.initial_brightness = brightness;
        self
    }

    pub const fn with_initial_light(mut self, on: bool) -> Self {
        self.initial_light_on = on;
        self
    }

    pub const fn with_firmware_version(mut self, version: [u8; 3]) -> Self {
        self.firmware_version = version;
        self
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new(DeviceId::FlipFlat)
    }
}
