// liber302/liber302/src/protocol/commands/value.rs

use crate::types::BlockAddress;

/// Encode a value-block operation payload (init 0x020A, decrement 0x020C,
/// increment 0x020D)
/// Layout: block(1) + amount(4, little-endian)
pub fn encode_value_op(block: BlockAddress, amount: i32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5);
    buf.push(block.index());
    buf.extend_from_slice(&amount.to_le_bytes());
    buf
}

/// Encode read-balance payload (function code 0x020B)
pub fn encode_read_balance(block: BlockAddress) -> Vec<u8> {
    vec![block.index()]
}
