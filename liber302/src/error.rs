// liber302/liber302/src/error.rs

use thiserror::Error;

use crate::types::Opcode;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("not connected")]
    NotConnected,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // シリアル実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },
    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response opcode: expected {expected}, got {actual}")]
    UnexpectedResponse { expected: Opcode, actual: Opcode },

    #[error("invalid block address: sector {sector}, block {block}")]
    InvalidBlockAddress { sector: u8, block: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
