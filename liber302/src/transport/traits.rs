// liber302/liber302/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the serial link away from protocol logic.
///
/// Only the outbound half lives here: received bytes are pushed into the
/// device by whoever owns the reading side (a reader thread, an async task,
/// a test).
pub trait Transport {
    /// Write raw bytes to the reader. Must not block waiting for a reply.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Release the underlying port. Default is a no-op.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
