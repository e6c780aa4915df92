// liber302/liber302/src/protocol/responses/value.rs

use crate::Result;
use crate::protocol::parser;

/// Decode read-balance response payload (function code 0x020B)
/// Layout: value(4, little-endian)
pub fn decode_balance(data: &[u8]) -> Result<i32> {
    parser::ensure_len(data, 4)?;
    parser::le_i32_at(data, 0)
}
