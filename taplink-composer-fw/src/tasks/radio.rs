//! Radio transmit task
//!
//! Streams committed messages over the broadcast link, one byte per UART
//! write with the configured inter-character gap. Fire and forget: there is
//! no acknowledgment and no retransmission. A whole message is always sent
//! to completion before the next command is taken.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embassy_time::{Duration, Timer};
use embedded_io_async::Write;

use taplink_core::config::INTER_CHAR_DELAY_MS;
use taplink_protocol::{frame, RESET};

use crate::channels::{TxCommand, TX_CHANNEL};

/// Radio TX task - sends bytes to the broadcast radio module
#[embassy_executor::task]
pub async fn radio_tx_task(mut tx: BufferedUartTx) {
    info!("Radio TX task started");

    loop {
        match TX_CHANNEL.receive().await {
            TxCommand::Message(message) => {
                debug!("TX message: {} bytes + end marker", message.len());
                for byte in frame(message.as_bytes()) {
                    send_byte(&mut tx, byte).await;
                    Timer::after(Duration::from_millis(INTER_CHAR_DELAY_MS)).await;
                }
            }
            TxCommand::Reset => {
                debug!("TX reset marker");
                send_byte(&mut tx, RESET).await;
            }
        }
    }
}

/// Write a single byte, logging failures
async fn send_byte(tx: &mut BufferedUartTx, byte: u8) {
    if let Err(e) = tx.write_all(&[byte]).await {
        warn!("Radio write failed: {:?}", e);
    }
}
