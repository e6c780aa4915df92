// liber302/liber302/src/protocol/stream.rs

//! Reassembly of frames from an unstructured serial byte stream.
//!
//! The serial port delivers bytes in arbitrary chunks: a chunk may hold a
//! partial frame, several back-to-back frames, or line noise in front of a
//! header. `StreamAccumulator` keeps the leftovers between chunks and hands
//! out every frame that is complete.

use log::trace;

use crate::constants::ER302_HEADER;
use crate::protocol::frame::{DecodeOutcome, Frame};

#[derive(Debug, Default)]
pub struct StreamAccumulator {
    buf: Vec<u8>,
}

impl StreamAccumulator {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append freshly received bytes and drain every complete frame.
    ///
    /// Frames are returned in wire order, including frames whose checksum
    /// did not match; the caller decides what to do with those. On return
    /// the internal buffer holds only bytes that do not yet form a complete,
    /// header-aligned frame.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Frame> {
        self.buf.extend_from_slice(bytes);
        let mut frames = Vec::new();
        // Everything before `start` is consumed; drained once at the end.
        let mut start = 0usize;

        loop {
            start = self.skip_to_header(start);
            match Frame::decode(&self.buf[start..]) {
                DecodeOutcome::Incomplete => break,
                DecodeOutcome::Resync => {
                    trace!("dropping byte {:#04x}: header without usable length", self.buf[start]);
                    start += 1;
                }
                DecodeOutcome::Frame(frame) => {
                    start += frame.consumed;
                    frames.push(frame);
                }
            }
        }

        self.buf.drain(..start);
        frames
    }

    // Offset of the next header at or after `from`. With no header in sight
    // only the last byte is kept, since it may start one.
    fn skip_to_header(&self, from: usize) -> usize {
        let rest = &self.buf[from..];
        if rest.len() < ER302_HEADER.len() {
            return from;
        }
        let skipped = rest
            .windows(ER302_HEADER.len())
            .position(|w| w == ER302_HEADER)
            .unwrap_or(rest.len() - 1);
        if skipped > 0 {
            trace!("resync: skipped {} byte(s) before header", skipped);
        }
        from + skipped
    }

    /// Bytes retained for the next `push`.
    pub fn residual(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
