mod pwm_ledc;
mod serial;

pub use pwm_ledc::{LedcPanelPwm, PwmInitError, init_panel_pwm};
pub use serial::{WiredSerial, init_wired_serial};

#[cfg(feature = "bluetooth")]
pub use serial::{BluetoothSerial, init_bluetooth_serial};
