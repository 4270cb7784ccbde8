//! OLED display task
//!
//! Renders the latest requested screen. Requests arriving while a frame is
//! being drawn replace each other; only the newest is rendered.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

use taplink_display::draw_screen;

use crate::channels::SCREEN;

/// Idle banner for this node
const READY_TITLE: &str = "Sender Ready";

/// Concrete OLED driver type for this board
pub type Oled = Ssd1306<
    I2CInterface<I2c<'static, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// Display task - renders screens signalled by the composer
#[embassy_executor::task]
pub async fn display_task(mut display: Oled) {
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
