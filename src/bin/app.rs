#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Duration;

use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use flipflat_esp::config;
use flipflat_esp::infrastructure::drivers::{init_panel_pwm, init_wired_serial};
use flipflat_esp::infrastructure::tasks::protocol_task;
use flipflat_protocol::{CommandProcessor, TransportSelector};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    #[cfg(feature = "logger")]
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    log::info!("boot: firmware build {}", config::BUILD_VERSION);

    // Panel dimmer
    let pwm = init_panel_pwm(
        peripherals.LEDC,
        flipflat_esp::panel_gpio!(peripherals),
        &config::PWM,
    )
    .expect("panel PWM init failed");

    // Transports
    let (rx, tx) = flipflat_esp::wired_gpio!(peripherals);
    let wired = init_wired_serial(peripherals.UART0, rx, tx, &config::WIRED)
        .expect("wired UART init failed");

    #[cfg(feature = "bluetooth")]
    let wireless = {
        let (rx, tx, state) = flipflat_esp::bluetooth_gpio!(peripherals);
        flipflat_esp::infrastructure::drivers::init_bluetooth_serial(
            peripherals.UART2,
            rx,
            tx,
            state,
            &config::BLUETOOTH,
        )
        .expect("bluetooth UART init failed")
    };
    #[cfg(not(feature = "bluetooth"))]
    let wireless = flipflat_protocol::NullTransport;

    let processor = CommandProcessor::new(&config::PROTOCOL, pwm);
    let transports = TransportSelector::new(wired, wireless);
    spawner.spawn(protocol_task(transports, processor)).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
