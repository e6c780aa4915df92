// liber302/liber302/src/protocol/checksum.rs

/// Compute the ER302 frame checksum.
/// XOR of every byte of reserved(2) + opcode(2) + data(n)
pub fn xor_checksum(body: &[u8]) -> u8 {
    body.iter().fold(0u8, |acc, &b| acc ^ b)
}
