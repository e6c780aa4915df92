// liber302/liber302/src/protocol/responses/mod.rs

pub mod system;
pub mod value;

pub use system::decode_firmware_version;
pub use value::decode_balance;

use crate::protocol::Frame;
use crate::types::Opcode;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<group>.rs` and are dispatched here by opcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    WorkingStatus { data: Vec<u8> },
    FirmwareVersion { version: String },
    Beep,
    Led,
    MifareRequest { card_type: Vec<u8> },
    MifareAnticollision { serial: Vec<u8> },
    MifareSelect,
    MifareUlSelect,
    MifareAuth2,
    ReadBlock { data: Vec<u8> },
    WriteBlock,
    InitValue,
    ReadBalance { value: i32 },
    Increment,
    Decrement,
    /// Opcode outside the catalogue; kept so callers can log it.
    Unknown { opcode: Opcode, data: Vec<u8> },
}

impl Response {
    /// Decode the payload of a frame according to its opcode.
    pub fn decode(frame: &Frame) -> crate::Result<Self> {
        let data = &frame.payload;
        let resp = match frame.opcode {
            Opcode::WORKING_STATUS => Self::WorkingStatus { data: data.clone() },
            Opcode::READ_FW_VERSION => Self::FirmwareVersion {
                version: decode_firmware_version(data),
            },
            Opcode::BEEP => Self::Beep,
            Opcode::LED => Self::Led,
            Opcode::MIFARE_REQUEST => Self::MifareRequest {
                card_type: data.clone(),
            },
            Opcode::MIFARE_ANTICOLLISION => Self::MifareAnticollision {
                serial: data.clone(),
            },
            Opcode::MIFARE_SELECT => Self::MifareSelect,
            Opcode::MIFARE_UL_SELECT => Self::MifareUlSelect,
            Opcode::MIFARE_AUTH2 => Self::MifareAuth2,
            Opcode::MIFARE_READ_BLOCK => Self::ReadBlock { data: data.clone() },
            Opcode::MIFARE_WRITE_BLOCK => Self::WriteBlock,
            Opcode::MIFARE_INIT_VALUE => Self::InitValue,
            Opcode::MIFARE_READ_BALANCE => Self::ReadBalance {
                value: decode_balance(data)?,
            },
            Opcode::MIFARE_INCREMENT => Self::Increment,
            Opcode::MIFARE_DECREMENT => Self::Decrement,
            other => Self::Unknown {
                opcode: other,
                data: data.clone(),
            },
        };
        Ok(resp)
    }

    /// Return the opcode associated with this response variant.
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::WorkingStatus { .. } => Opcode::WORKING_STATUS,
            Self::FirmwareVersion { .. } => Opcode::READ_FW_VERSION,
            Self::Beep => Opcode::BEEP,
            Self::Led => Opcode::LED,
            Self::MifareRequest { .. } => Opcode::MIFARE_REQUEST,
            Self::MifareAnticollision { .. } => Opcode::MIFARE_ANTICOLLISION,
            Self::MifareSelect => Opcode::MIFARE_SELECT,
            Self::MifareUlSelect => Opcode::MIFARE_UL_SELECT,
            Self::MifareAuth2 => Opcode::MIFARE_AUTH2,
            Self::ReadBlock { .. } => Opcode::MIFARE_READ_BLOCK,
            Self::WriteBlock => Opcode::MIFARE_WRITE_BLOCK,
            Self::InitValue => Opcode::MIFARE_INIT_VALUE,
            Self::ReadBalance { .. } => Opcode::MIFARE_READ_BALANCE,
            Self::Increment => Opcode::MIFARE_INCREMENT,
            Self::Decrement => Opcode::MIFARE_DECREMENT,
            Self::Unknown { opcode, .. } => *opcode,
        }
    }
}
