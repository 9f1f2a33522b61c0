//! Phone link transmit task
//!
//! Sends queued watch messages (PONG, SYNC_REQUEST) to the phone.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use sunshine_protocol::WatchMessage;

use crate::channels::WATCH_TX;

#[embassy_executor::task]
pub async fn sync_tx_task(mut tx: BufferedUartTx) {
    info!("Sync TX task started");

    loop {
        let message = WATCH_TX.receive().await;
        send(&mut tx, message).await;
    }
}

async fn send(tx: &mut BufferedUartTx, message: WatchMessage) {
    let frame = message.to_frame();
    let mut buf = [0u8; 8];
    match frame.encode(&mut buf) {
        Ok(len) => {
            if let Err(e) = tx.write_all(&buf[..len]).await {
                warn!("Failed to send {:?}: {:?}", message, e);
            } else {
                trace!("{:?} sent", message);
            }
        }
        Err(e) => {
            warn!("Failed to encode {:?}: {:?}", message, e);
        }
    }
}
