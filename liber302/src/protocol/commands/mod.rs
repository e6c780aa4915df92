// liber302/liber302/src/protocol/commands/mod.rs

pub mod mifare;
pub mod system;
pub mod value;

pub use mifare::{
    encode_anticollision, encode_auth2, encode_read_block, encode_request, encode_select,
    encode_write_block,
};
pub use system::{encode_beep, encode_led, encode_read_firmware, encode_working_status};
pub use value::{encode_read_balance, encode_value_op};

use crate::types::{BlockAddress, Led, Opcode};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    WorkingStatus {
        probe: [u8; 2],
    },
    ReadFirmwareVersion,
    Beep {
        duration: u8,
    },
    Led {
        color: Led,
    },
    MifareRequest {
        mode: u8,
    },
    MifareAnticollision {
        level: u8,
    },
    MifareSelect {
        serial: Vec<u8>,
    },
    MifareUlSelect,
    MifareAuth2 {
        key_type: u8,
        block: BlockAddress,
        key: [u8; 6],
    },
    ReadBlock {
        block: BlockAddress,
    },
    WriteBlock {
        block: BlockAddress,
        data: [u8; 4],
    },
    InitValue {
        block: BlockAddress,
        amount: i32,
    },
    ReadBalance {
        block: BlockAddress,
    },
    Increment {
        block: BlockAddress,
        amount: i32,
    },
    Decrement {
        block: BlockAddress,
        amount: i32,
    },
}

impl Command {
    /// Return the two-byte function code.
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::WorkingStatus { .. } => Opcode::WORKING_STATUS,
            Self::ReadFirmwareVersion => Opcode::READ_FW_VERSION,
            Self::Beep { .. } => Opcode::BEEP,
            Self::Led { .. } => Opcode::LED,
            Self::MifareRequest { .. } => Opcode::MIFARE_REQUEST,
            Self::MifareAnticollision { .. } => Opcode::MIFARE_ANTICOLLISION,
            Self::MifareSelect { .. } => Opcode::MIFARE_SELECT,
            Self::MifareUlSelect => Opcode::MIFARE_UL_SELECT,
            Self::MifareAuth2 { .. } => Opcode::MIFARE_AUTH2,
            Self::ReadBlock { .. } => Opcode::MIFARE_READ_BLOCK,
            Self::WriteBlock { .. } => Opcode::MIFARE_WRITE_BLOCK,
            Self::InitValue { .. } => Opcode::MIFARE_INIT_VALUE,
            Self::ReadBalance { .. } => Opcode::MIFARE_READ_BALANCE,
            Self::Increment { .. } => Opcode::MIFARE_INCREMENT,
            Self::Decrement { .. } => Opcode::MIFARE_DECREMENT,
        }
    }

    /// Encode the command data (everything after the opcode, before the checksum).
    pub fn data(&self) -> Vec<u8> {
        match self {
            Self::WorkingStatus { probe } => encode_working_status(*probe),
            Self::ReadFirmwareVersion => encode_read_firmware(),
            Self::Beep { duration } => encode_beep(*duration),
            Self::Led { color } => encode_led(*color),
            Self::MifareRequest { mode } => encode_request(*mode),
            Self::MifareAnticollision { level } => encode_anticollision(*level),
            Self::MifareSelect { serial } => encode_select(serial),
            Self::MifareUlSelect => Vec::new(),
            Self::MifareAuth2 {
                key_type,
                block,
                key,
            } => encode_auth2(*key_type, *block, key),
            Self::ReadBlock { block } => encode_read_block(*block),
            Self::WriteBlock { block, data } => encode_write_block(*block, data),
            Self::InitValue { block, amount }
            | Self::Increment { block, amount }
            | Self::Decrement { block, amount } => encode_value_op(*block, *amount),
            Self::ReadBalance { block } => encode_read_balance(*block),
        }
    }

    /// Human-readable description used in logs.
    pub fn label(&self) -> String {
        match self {
            Self::WorkingStatus { .. } => "Working status".to_string(),
            Self::ReadFirmwareVersion => "Firmware version".to_string(),
            Self::Beep { duration } => format!("Beep ({})", duration),
            Self::Led { color } => format!("LED ({})", color),
            Self::MifareRequest { .. } => "Mifare request".to_string(),
            Self::MifareAnticollision { .. } => "Mifare anticollision".to_string(),
            Self::MifareSelect { .. } => "Mifare select".to_string(),
            Self::MifareUlSelect => "Mifare UltraLight select".to_string(),
            Self::MifareAuth2 { block, .. } => format!("Auth2 (sector {})", block.sector()),
            Self::ReadBlock { block } => format!("Read block ({})", block),
            Self::WriteBlock { block, .. } => format!("Write block ({})", block),
            Self::InitValue { block, amount } => format!("Init balance ({}) = {}", block, amount),
            Self::ReadBalance { block } => format!("Read balance ({})", block),
            Self::Increment { block, amount } => format!("Inc balance ({}) by {}", block, amount),
            Self::Decrement { block, amount } => format!("Dec balance ({}) by {}", block, amount),
        }
    }
}
