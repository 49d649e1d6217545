use embassy_futures::yield_now;
use embassy_time::Timer;

use crate::config;
use crate::infrastructure::types::{PanelProcessor, PanelTransports};

/// Task serving the Alnitak protocol
///
/// Drives the panel to its initial state, then polls the active transport.
/// While bytes keep arriving it only yields; once the line is idle it sleeps
/// for the poll interval.
#[embassy_executor::task]
pub async fn protocol_task(mut transports: PanelTransports, mut processor: PanelProcessor) {
    processor.apply_output();
    log::info!(
        "protocol: serving as {} (id {})",
        processor.state().device_id.product_name(),
        processor.state().device_id
    );

    loop {
        if transports.poll(&mut processor) > 0 {
            yield_now().await;
        } else {
            Timer::after(config::POLL_INTERVAL).await;
        }
    }
}
