use core::convert::Infallible;

use esp_hal::gpio::DriveMode;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace as _};
use esp_hal::ledc::timer::{self, TimerIFace as _};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::peripherals::LEDC;
use esp_hal::time::Rate;
use static_cell::StaticCell;

use flipflat_protocol::PwmOutput;

use crate::config::PwmConfig;

// The channel borrows its timer, so the timer has to outlive it
static PANEL_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

#[derive(Debug)]
pub enum PwmInitError {
    /// LEDC timers support 1-20 bit duty resolution
    UnsupportedResolution(u8),
    /// Duty range does not fit the configured resolution
    DutyOutOfRange(u32),
    Timer(timer::Error),
    Channel(channel::Error),
}

/// ESP-specific panel dimmer using the LEDC peripheral
///
/// Low-speed timer 0 drives channel 0. Duty values are written raw, so the
/// processor's duty range must match the configured resolution.
pub struct LedcPanelPwm {
    channel: channel::Channel<'static, LowSpeed>,
}

impl PwmOutput for LedcPanelPwm {
    type Error = Infallible;

    fn set_duty(&mut self, duty: u32) -> Result<(), Self::Error> {
        self.channel.set_duty_hw(duty);
        Ok(())
    }
}

/// Configure LEDC timer 0 and attach channel 0 to `pin`.
///
/// Must be called once: the timer is moved into a static cell.
pub fn init_panel_pwm<O>(
    ledc: LEDC<'static>,
    pin: O,
    config: &PwmConfig,
) -> Result<LedcPanelPwm, PwmInitError>
where
    O: PeripheralOutput<'static>,
{
    let duty = duty_resolution(config.resolution_bits)
        .ok_or(PwmInitError::UnsupportedResolution(config.resolution_bits))?;
    if !config.duty.fits_resolution(config.resolution_bits) {
        return Err(PwmInitError::DutyOutOfRange(config.duty.max()));
    }

    let mut ledc = Ledc::new(ledc);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let mut panel_timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    panel_timer
        .configure(timer::config::Config {
            duty,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(config.frequency_hz),
        })
        .map_err(PwmInitError::Timer)?;
    let panel_timer = PANEL_TIMER.init(panel_timer);

    let mut panel_channel = ledc.channel::<LowSpeed>(channel::Number::Channel0, pin);
    panel_channel
        .configure(channel::config::Config {
            timer: &*panel_timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .map_err(PwmInitError::Channel)?;

    Ok(LedcPanelPwm {
        channel: panel_channel,
    })
}

const fn duty_resolution(bits: u8) -> Option<timer::config::Duty> {
    use timer::config::Duty;

    let duty = match bits {
        1 => Duty::Duty1Bit,
        2 => Duty::Duty2Bit,
        3 => Duty::Duty3Bit,
        4 => Duty::Duty4Bit,
        5 => Duty::Duty5Bit,
        6 => Duty::Duty6Bit,
        7 => Duty::Duty7Bit,
        8 => Duty::Duty8Bit,
        9 => Duty::Duty9Bit,
        10 => Duty::Duty10Bit,
        11 => Duty::Duty11Bit,
        12 => Duty::Duty12Bit,
        13 => Duty::Duty13Bit,
        14 => Duty::Duty14Bit,
        15 => Duty::Duty15Bit,
        16 => Duty::Duty16Bit,
        17 => Duty::Duty17Bit,
        18 => Duty::Duty18Bit,
        19 => Duty::Duty19Bit,
        20 => Duty::Duty20Bit,
        _ => return None,
    };
    Some(duty)
}
