// liber302/liber302/src/protocol/commands/mifare.rs

use crate::types::BlockAddress;

/// Encode Mifare request payload (function code 0x0201)
/// mode: 0x26 = idle cards only, 0x52 = all cards
pub fn encode_request(mode: u8) -> Vec<u8> {
    vec![mode]
}

/// Encode Mifare anticollision payload (function code 0x0202)
pub fn encode_anticollision(level: u8) -> Vec<u8> {
    vec![level]
}

/// Encode Mifare select payload (function code 0x0203): the card serial
pub fn encode_select(serial: &[u8]) -> Vec<u8> {
    serial.to_vec()
}

/// Encode Mifare auth2 payload (function code 0x0207)
/// Layout: key_type(1) + block(1) + key(6)
pub fn encode_auth2(key_type: u8, block: BlockAddress, key: &[u8; 6]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8);
    buf.push(key_type);
    buf.push(block.index());
    buf.extend_from_slice(key);
    buf
}

/// Encode Mifare read-block payload (function code 0x0208)
pub fn encode_read_block(block: BlockAddress) -> Vec<u8> {
    vec![block.index()]
}

/// Encode Mifare write-block payload (function code 0x0209)
/// Layout: block(1) + data(4)
pub fn encode_write_block(block: BlockAddress, data: &[u8; 4]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5);
    buf.push(block.index());
    buf.extend_from_slice(data);
    buf
}
