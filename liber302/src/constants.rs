// liber302/liber302/src/constants.rs
//! Common protocol constants used across the crate

/// ER302 wire frame header: 0xAA 0xBB
pub const ER302_HEADER: [u8; 2] = [0xAA, 0xBB];

/// Reserved (node id) field sent with every command
pub const ER302_RESERVED: [u8; 2] = [0xFF, 0xFF];

/// Header(2) + Length(2)
pub const ER302_PREFIX_LEN: usize = 4;

/// Width of the function code carried by every frame
pub const ER302_OPCODE_LEN: usize = 2;

/// Smallest legal value of the length field: reserved(2) + opcode(2) + checksum(1)
pub const ER302_MIN_BODY_LEN: usize = 5;

/// Largest length field accepted by the decoder. Anything above is treated
/// as a false header so the stream can resynchronise.
pub const ER302_MAX_BODY_LEN: usize = 512;

/// Request response payload of a Mifare Classic 1K card (ATQA 0x0004)
pub const TYPE_MIFARE_1K: [u8; 2] = [0x04, 0x00];

/// Request response payload of a Mifare UltraLight card (ATQA 0x0044)
pub const TYPE_MIFARE_UL: [u8; 2] = [0x44, 0x00];

/// Mifare authentication key A / key B selectors
pub const MIFARE_KEY_A: u8 = 0x60;
pub const MIFARE_KEY_B: u8 = 0x61;

/// Factory transport key
pub const MIFARE_DEFAULT_KEY: [u8; 6] = [0xFF; 6];

/// Blocks per Mifare Classic sector (small sectors)
pub const MIFARE_BLOCKS_PER_SECTOR: u8 = 4;

/// Default serial speed of the ER302 module
pub const ER302_DEFAULT_BAUD: u32 = 115_200;
