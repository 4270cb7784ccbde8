//! TapLink receiver node firmware
//!
//! RP2040 board with a 128x64 SSD1306 OLED on I2C0, a passive buzzer on a
//! GPIO pin and the broadcast radio module on UART0 (RX only).
//!
//! Incoming bytes feed the reassembler; a completed message is rendered
//! and announced with a tone. The alert runs in its own task, so reception
//! continues during the tone.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUartRx, Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Timer};
use embedded_io_async::Read;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use taplink_core::config::ALERT_DURATION_MS;
use taplink_display::{draw_screen, Screen};
use taplink_protocol::{Reassembler, ReceiverAction};

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Latest requested screen
static SCREEN: Signal<CriticalSectionRawMutex, Screen> = Signal::new();

/// Fire the alert tone
static ALERT: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Idle banner for this node
const READY_TITLE: &str = "Pager Ready";

/// Radio module baud rate (HC-12 factory default)
const RADIO_BAUD: u32 = 9600;

/// Alert tone half-period: 500 us high + 500 us low = 1 kHz
const TONE_HALF_PERIOD_US: u64 = 500;

/// Concrete OLED driver type for this board
type Oled = Ssd1306<
    I2CInterface<I2c<'static, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("TapLink receiver firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Radio module on UART0 (GPIO0 TX - unused on this node, GPIO1 RX)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = RADIO_BAUD;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

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

    // Passive buzzer on GPIO15
    let buzzer = Output::new(p.PIN_15, Level::Low);

    // Spawn tasks
    spawner.spawn(radio_rx_task(rx)).unwrap();
    spawner.spawn(alert_task(buzzer)).unwrap();
    spawner.spawn(display_task(display)).unwrap();

    SCREEN.signal(Screen::Ready);
    info!("All tasks spawned, receiver running");
}

/// Radio RX task - feeds the reassembler and dispatches its actions
#[embassy_executor::task]
async fn radio_rx_task(mut rx: BufferedUartRx) {
    info!("Radio RX task started");

    let mut reassembler = Reassembler::new();
    let mut buf = [0u8; 16];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                for &byte in &buf[..n] {
                    handle_byte(&mut reassembler, byte);
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Apply one received byte and request the matching side effects
fn handle_byte(reassembler: &mut Reassembler, byte: u8) {
    match reassembler.feed(byte) {
        ReceiverAction::Buffered => {
            SCREEN.signal(Screen::Message(reassembler.buffer().display_text()));
        }
        ReceiverAction::MessageComplete => {
            info!("Message complete: {} chars", reassembler.buffer().len());
            SCREEN.signal(Screen::Message(reassembler.buffer().display_text()));
            ALERT.signal(());
        }
        ReceiverAction::Reset => {
            info!("Reset received");
            SCREEN.signal(Screen::Ready);
        }
    }
}

/// Alert task - drives the passive buzzer with a 1 kHz square wave
///
/// Runs independently of reception; bytes arriving during the tone are
/// processed and displayed immediately.
#[embassy_executor::task]
async fn alert_task(mut buzzer: Output<'static>) {
    info!("Alert task started");

    loop {
        ALERT.wait().await;
        debug!("Alert tone");

        let end = Instant::now() + Duration::from_millis(ALERT_DURATION_MS);
        while Instant::now() < end {
            buzzer.set_high();
            Timer::after(Duration::from_micros(TONE_HALF_PERIOD_US)).await;
            buzzer.set_low();
            Timer::after(Duration::from_micros(TONE_HALF_PERIOD_US)).await;
        }
    }
}

/// Display task - renders screens signalled by the receiver
#[embassy_executor::task]
async fn display_task(mut display: Oled) {
    info!("Display task started");

    loop {
        let screen = SCREEN.wait().await;

        if draw_screen(&mut display, &screen, READY_TITLE).is_err() {
            warn!("Screen draw failed");
            continue;
        }
        if display.flush().is_err() {
            warn!("Display flush failed");
        }
    }
}
