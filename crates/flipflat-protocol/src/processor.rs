//! Command processor - dispatch and state machine
//!
//! The processor is the only owner of [`DeviceState`]. Every state change
//! that affects the panel is followed by a PWM write, so the hardware always
//! reflects the last committed brightness / on-off pair.

use crate::command::{Command, Payload};
use crate::config::{BrightnessPolicy, ProcessorConfig};
use crate::device::{CoverStatus, DeviceState};
use crate::error::{ErrorCode, PayloadError};
use crate::pwm::{DutyRange, PwmOutput};
use crate::response::Response;

/// Alnitak command processor, generic over the PWM backend
pub struct CommandProcessor<P: PwmOutput> {
    state: DeviceState,
    duty_range: DutyRange,
    brightness_policy: BrightnessPolicy,
    firmware_version: [u8; 3],
    pwm: P,
    duty: u32,
}

impl<P: PwmOutput> CommandProcessor<P> {
    /// Create a processor in the configured initial state.
    ///
    /// The output is not touched until [`apply_output`](Self::apply_output)
    /// or the first light command.
    pub fn new(config: &ProcessorConfig, pwm: P) -> Self {
        let mut state = DeviceState::new(config.device_id);
        state.brightness = config.initial_brightness;
        state.light_on = config.initial_light_on;

        Self {
            state,
            duty_range: config.duty,
            brightness_policy: config.brightness_policy,
            firmware_version: config.firmware_version,
            pwm,
            duty: 0,
        }
    }

    /// Current device state
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Duty value last written to the output
    pub fn duty(&self) -> u32 {
        self.duty
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    /// Drive the output from the current state
    pub fn apply_output(&mut self) {
        let duty = if self.state.light_on {
            self.duty_range.scale(self.state.brightness)
        } else {
            0
        };

        if let Err(e) = self.pwm.set_duty(duty) {
            log::warn!("processor: failed to set duty {}: {:?}", duty, e);
        }
        self.duty = duty;
    }

    /// Handle one complete frame. Returns the response to send, if any.
    pub fn process(&mut self, frame: &[u8]) -> Option<Response> {
        match Command::parse(frame) {
            Ok(command) => self.execute(command),
            Err(e) => {
                log::debug!("processor: dropping frame: {}", e);
                None
            }
        }
    }

    /// Apply a parsed command
    pub fn execute(&mut self, command: Command) -> Option<Response> {
        log::debug!("processor: cmd = {:?}", command);

        let id = self.state.device_id;
        let code = command.code();

        match command {
            Command::Ping => Some(Response::ack(code, id)),
            Command::OpenCover => {
                self.set_cover(CoverStatus::Open);
                Some(Response::ack(code, id))
            }
            Command::CloseCover => {
                self.set_cover(CoverStatus::Closed);
                Some(Response::ack(code, id))
            }
            Command::LightOn => {
                self.state.light_on = true;
                self.apply_output();
                Some(Response::ack(code, id))
            }
            Command::LightOff => {
                self.state.light_on = false;
                self.apply_output();
                Some(Response::ack(code, id))
            }
            Command::SetBrightness(payload) => self.set_brightness(code, payload),
            Command::GetBrightness => Some(Response::value(code, id, self.state.brightness)),
            Command::GetStatus => Some(Response::status(&self.state)),
            Command::GetVersion => Some(Response::new(code, id, self.firmware_version)),
            Command::Unknown(code) => {
                log::debug!("processor: unknown command {:?}", char::from(code));
                Some(Response::error(id, ErrorCode::UnknownCommand))
            }
        }
    }

    fn set_cover(&mut self, cover: CoverStatus) {
        if self.state.cover == cover {
            log::debug!("processor: cover already {:?}", cover);
            return;
        }
        // No actuator, the cover "arrives" immediately
        self.state.cover = cover;
    }

    fn set_brightness(&mut self, code: u8, payload: Payload) -> Option<Response> {
        let id = self.state.device_id;

        let brightness = match (payload.as_brightness(), self.brightness_policy) {
            (Ok(value), _) => value,
            (Err(PayloadError::OutOfRange(value)), BrightnessPolicy::Clamp) => {
                log::debug!("processor: clamping brightness {} to 255", value);
                u8::MAX
            }
            (Err(e), BrightnessPolicy::Ignore) => {
                log::debug!("processor: ignoring brightness {:?}: {}", payload, e);
                return None;
            }
            (Err(e), _) => {
                log::debug!("processor: rejecting brightness {:?}: {}", payload, e);
                return Some(Response::error(id, ErrorCode::InvalidPayload));
            }
        };

        self.state.brightness = brightness;
        if self.state.light_on {
            self.apply_output();
        }

        Some(Response::value(code, id, brightness))
    }
}
