//! TapLink composer node firmware
//!
//! RP2040 board with a 4x3 matrix keypad, a 128x64 SSD1306 OLED on I2C0
//! and a transparent-serial broadcast radio module on UART0 (TX only).
//!
//! Keypad presses feed the composer input state machine; committed messages
//! stream out over the radio one byte at a time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::keypad::MatrixKeypad;

mod channels;
mod keypad;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Radio module baud rate (HC-12 factory default)
const RADIO_BAUD: u32 = 9600;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("TapLink composer firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Radio module on UART0 (GPIO0 TX, GPIO1 RX - RX unused on this node)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = RADIO_BAUD;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();

    info!("Radio UART initialized");

    // OLED on I2C0 (GPIO4 SDA, GPIO5 SCL)
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, embassy_rp::i2c::Config::default());
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    if display.init().is_err() {
        error!("Failed to initialize OLED");
    } else {
        info!("OLED initialized");
    }

    // Keypad matrix: rows on GPIO10-13 (strobed low), columns on GPIO6-8
    let rows = [
        Output::new(p.PIN_10, Level::High),
        Output::new(p.PIN_11, Level::High),
        Output::new(p.PIN_12, Level::High),
        Output::new(p.PIN_13, Level::High),
    ];
    let cols = [
        Input::new(p.PIN_6, Pull::Up),
        Input::new(p.PIN_7, Pull::Up),
        Input::new(p.PIN_8, Pull::Up),
    ];
    let keypad = MatrixKeypad::new(rows, cols);

    info!("Keypad initialized");

    // Spawn tasks
    spawner.spawn(tasks::input::keypad_task(keypad)).unwrap();
    spawner.spawn(tasks::input::composer_task()).unwrap();
    spawner.spawn(tasks::radio::radio_tx_task(tx)).unwrap();
    spawner.spawn(tasks::display::display_task(display)).unwrap();

    info!("All tasks spawned, composer running");
}
