// liber302/liber302/src/protocol/codec.rs

use crate::types::Opcode;
use crate::{Error, Result};

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a full wire frame (header/length/reserved/checksum).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(cmd.opcode(), &cmd.data())
}

/// Decode exactly one full wire frame and parse the contained response.
/// Fails on a bad checksum, trailing bytes or a malformed payload.
pub fn decode_response_frame(frame: &[u8]) -> Result<Response> {
    let frame = Frame::parse(frame)?;
    Response::decode(&frame)
}

/// Like `decode_response_frame`, but the frame must answer `expected`.
pub fn decode_expected_response(frame: &[u8], expected: Opcode) -> Result<Response> {
    let resp = decode_response_frame(frame)?;
    if resp.opcode() != expected {
        return Err(Error::UnexpectedResponse {
            expected,
            actual: resp.opcode(),
        });
    }
    Ok(resp)
}
