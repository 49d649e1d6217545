use flipflat_protocol::{CommandProcessor, TransportSelector};

use crate::infrastructure::drivers::{LedcPanelPwm, WiredSerial};

pub type PanelProcessor = CommandProcessor<LedcPanelPwm>;

#[cfg(feature = "bluetooth")]
pub type WirelessSerial = crate::infrastructure::drivers::BluetoothSerial;
#[cfg(not(feature = "bluetooth"))]
pub type WirelessSerial = flipflat_protocol::NullTransport;

pub type PanelTransports = TransportSelector<WiredSerial, WirelessSerial>;
