// liber302/liber302/src/device/pump.rs

//! Async delivery of received bytes.
//!
//! The transport's reader side (a thread blocked on the port) pushes chunks
//! into an unbounded channel; `pump` drains them in arrival order and feeds
//! each one to the device. Only the task running `pump` touches the session,
//! so byte handling is serialised without a lock.

use log::debug;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::device::handle::{Connected, Device};
use crate::Result;

pub type ByteSender = UnboundedSender<Vec<u8>>;
pub type ByteReceiver = UnboundedReceiver<Vec<u8>>;

pub fn byte_channel() -> (ByteSender, ByteReceiver) {
    mpsc::unbounded_channel()
}

/// Feed every received chunk to `device` until all senders are dropped.
///
/// Stops at the first error the device reports (a failed write).
pub async fn pump(device: &mut Device<Connected>, rx: &mut ByteReceiver) -> Result<()> {
    while let Some(chunk) = rx.recv().await {
        if chunk.is_empty() {
            continue;
        }
        device.on_bytes(&chunk)?;
    }
    debug!("byte channel closed");
    Ok(())
}

/// Run a blocking serial reader on its own thread, forwarding chunks until
/// the receiving side goes away or the port fails.
#[cfg(feature = "serial")]
pub fn spawn_serial_reader(
    mut reader: crate::transport::SerialReader,
    tx: ByteSender,
) -> std::thread::JoinHandle<Result<()>> {
    std::thread::spawn(move || {
        loop {
            let chunk = reader.read_chunk()?;
            if chunk.is_empty() {
                if tx.is_closed() {
                    return Ok(());
                }
                continue;
            }
            if tx.send(chunk).is_err() {
                return Ok(());
            }
        }
    })
}
