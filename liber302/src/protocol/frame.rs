// liber302/liber302/src/protocol/frame.rs

use crate::constants::{
    ER302_HEADER, ER302_MAX_BODY_LEN, ER302_MIN_BODY_LEN, ER302_OPCODE_LEN, ER302_PREFIX_LEN,
    ER302_RESERVED,
};
use crate::protocol::checksum::xor_checksum;
use crate::types::Opcode;
use crate::{Error, Result};

/// One decoded ER302 frame.
///
/// Format: [Header(2)] [Len(2, LE)] [Reserved(2)] [Opcode(2)] [Data(n)] [XOR(1)]
/// Header: 0xAA 0xBB
/// Len counts reserved + opcode + data + checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub opcode: Opcode,
    pub payload: Vec<u8>,
    /// Checksum byte as received
    pub checksum: u8,
    pub checksum_valid: bool,
    /// Number of bytes this frame occupied at the front of the decode buffer
    pub consumed: usize,
}

/// Result of attempting to decode a frame from the front of a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Frame(Frame),
    /// Header is aligned but more bytes are needed
    Incomplete,
    /// The buffer does not start with a usable header; drop one byte and retry
    Resync,
}

impl Frame {
    /// Encode an opcode and its data into a full ER302 frame
    pub fn encode(opcode: Opcode, data: &[u8]) -> Result<Vec<u8>> {
        let body_len = ER302_RESERVED.len() + ER302_OPCODE_LEN + data.len() + 1;
        // decode treats anything longer as a false header
        if body_len > ER302_MAX_BODY_LEN {
            return Err(Error::InvalidLength {
                expected: ER302_MAX_BODY_LEN,
                actual: body_len,
            });
        }

        let mut out = Vec::with_capacity(ER302_PREFIX_LEN + body_len);
        out.extend_from_slice(&ER302_HEADER);
        out.extend_from_slice(&(body_len as u16).to_le_bytes());
        let body_start = out.len();
        out.extend_from_slice(&ER302_RESERVED);
        out.extend_from_slice(opcode.as_bytes());
        out.extend_from_slice(data);
        let crc = xor_checksum(&out[body_start..]);
        out.push(crc);
        Ok(out)
    }

    /// Try to decode one frame from the front of `buf`. Never panics on
    /// malformed input; the outcome tells the caller what to do next.
    pub fn decode(buf: &[u8]) -> DecodeOutcome {
        if buf.len() < ER302_HEADER.len() {
            return DecodeOutcome::Incomplete;
        }
        if buf[..2] != ER302_HEADER {
            return DecodeOutcome::Resync;
        }
        if buf.len() < ER302_PREFIX_LEN {
            return DecodeOutcome::Incomplete;
        }

        let body_len = u16::from_le_bytes([buf[2], buf[3]]) as usize;
        if !(ER302_MIN_BODY_LEN..=ER302_MAX_BODY_LEN).contains(&body_len) {
            return DecodeOutcome::Resync;
        }

        let total = ER302_PREFIX_LEN + body_len;
        if buf.len() < total {
            return DecodeOutcome::Incomplete;
        }

        let body = &buf[ER302_PREFIX_LEN..total];
        // body: reserved(2) opcode(2) data(n) checksum(1)
        let covered = &body[..body.len() - 1];
        let checksum = body[body.len() - 1];
        let opcode = Opcode::from_bytes([body[2], body[3]]);
        let payload = body[4..body.len() - 1].to_vec();

        DecodeOutcome::Frame(Frame {
            opcode,
            payload,
            checksum,
            checksum_valid: xor_checksum(covered) == checksum,
            consumed: total,
        })
    }

    /// Strict variant for callers holding exactly one frame.
    pub fn parse(frame: &[u8]) -> Result<Frame> {
        match Self::decode(frame) {
            DecodeOutcome::Frame(f) if f.consumed == frame.len() => f.verify(),
            DecodeOutcome::Frame(f) => Err(Error::InvalidLength {
                expected: f.consumed,
                actual: frame.len(),
            }),
            DecodeOutcome::Incomplete => Err(Error::FrameFormat("incomplete frame".into())),
            DecodeOutcome::Resync => Err(Error::FrameFormat("invalid header or length".into())),
        }
    }

    /// Reject frames whose checksum did not match.
    pub fn verify(self) -> Result<Frame> {
        if self.checksum_valid {
            return Ok(self);
        }
        let mut covered = Vec::with_capacity(ER302_MIN_BODY_LEN + self.payload.len());
        covered.extend_from_slice(&ER302_RESERVED);
        covered.extend_from_slice(self.opcode.as_bytes());
        covered.extend_from_slice(&self.payload);
        Err(Error::ChecksumMismatch {
            expected: xor_checksum(&covered),
            actual: self.checksum,
        })
    }
}
