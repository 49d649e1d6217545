use esp_hal::Blocking;
use esp_hal::gpio::interconnect::{PeripheralInput, PeripheralOutput};
use esp_hal::peripherals::UART0;
use esp_hal::uart::{Config, ConfigError, Uart};

use flipflat_protocol::SerialTransport;

use crate::config::SerialConfig;

/// Host link on UART0 (the USB bridge on most dev boards)
pub type WiredSerial = SerialTransport<Uart<'static, Blocking>>;

/// Create the wired transport. Reads are polled, so the UART stays blocking.
pub fn init_wired_serial(
    uart: UART0<'static>,
    rx: impl PeripheralInput<'static>,
    tx: impl PeripheralOutput<'static>,
    config: &SerialConfig,
) -> Result<WiredSerial, ConfigError> {
    let uart = Uart::new(uart, Config::default().with_baudrate(config.baudrate))?
        .with_rx(rx)
        .with_tx(tx);

    Ok(SerialTransport::new(uart))
}

#[cfg(feature = "bluetooth")]
mod bluetooth {
    use esp_hal::Blocking;
    use esp_hal::gpio::interconnect::{PeripheralInput, PeripheralOutput};
    use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};
    use esp_hal::peripherals::UART2;
    use esp_hal::uart::{Config, ConfigError, Uart};

    use flipflat_protocol::{SerialTransport, StatePin};

    use crate::config::SerialConfig;

    /// HC-05 style Bluetooth serial module: data on UART2, STATE pin high
    /// while a client is paired and connected
    pub type BluetoothSerial = SerialTransport<Uart<'static, Blocking>, StatePin<Input<'static>>>;

    pub fn init_bluetooth_serial(
        uart: UART2<'static>,
        rx: impl PeripheralInput<'static>,
        tx: impl PeripheralOutput<'static>,
        state: impl InputPin + 'static,
        config: &SerialConfig,
    ) -> Result<BluetoothSerial, ConfigError> {
        let uart = Uart::new(uart, Config::default().with_baudrate(config.baudrate))?
            .with_rx(rx)
            .with_tx(tx);
        // Pulled down so a missing module reads as disconnected
        let state = Input::new(state, InputConfig::default().with_pull(Pull::Down));

        Ok(SerialTransport::with_link(uart, StatePin::new(state)))
    }
}

#[cfg(feature = "bluetooth")]
pub use bluetooth::{BluetoothSerial, init_bluetooth_serial};
