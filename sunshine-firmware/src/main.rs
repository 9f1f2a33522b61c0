//! Sunshine - Digital Watch Face Firmware
//!
//! Main firmware binary for RP2040 watches with an ST7789 panel. Shows the
//! time, the date and the weather the paired phone pushes over a UART
//! bridge.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::panel::{PanelPins, St7789Panel};

mod channels;
mod clock;
mod config;
mod panel;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// ST7789 write clock
const PANEL_SPI_HZ: u32 = 62_500_000;

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Sunshine firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let face_config = config::load_face_config();

    // Phone link over a UART bridge
    // Pin assignments are board-specific (UART0: GPIO0 TX, GPIO1 RX)
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for phone link");

    // Panel on SPI0
    // Pin assignments are board-specific (CLK GPIO18, MOSI GPIO19, CS GPIO17,
    // DC GPIO16, RST GPIO20, BL GPIO21)
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = PANEL_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    let pins = PanelPins {
        cs: Output::new(p.PIN_17, Level::High),
        dc: Output::new(p.PIN_16, Level::Low),
        reset: Output::new(p.PIN_20, Level::High),
        backlight: Output::new(p.PIN_21, Level::Low),
    };

    let dims = face_config.dimensions;
    let panel = match St7789Panel::new(spi, pins, dims.width, dims.height) {
        Ok(panel) => Some(panel),
        Err(e) => {
            error!("Panel init failed: {:?}, running headless", e);
            None
        }
    };

    // Button on GPIO22, active low
    let button = Input::new(p.PIN_22, Pull::Up);

    // Spawn tasks
    spawner.spawn(tasks::face_task(face_config)).unwrap();
    if let Some(panel) = panel {
        spawner.spawn(tasks::display_task(panel)).unwrap();
    }
    spawner.spawn(tasks::sync_rx_task(rx, face_config.link)).unwrap();
    spawner.spawn(tasks::sync_tx_task(tx)).unwrap();
    spawner.spawn(tasks::time_tick_task()).unwrap();
    spawner
        .spawn(tasks::button_task(button, face_config.power))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat, t={}", clock::now_ms());
    }
}
