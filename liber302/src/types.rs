// liber302/liber302/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use derive_more::Display;

use crate::Error;
use crate::constants::{MIFARE_BLOCKS_PER_SECTOR, TYPE_MIFARE_1K, TYPE_MIFARE_UL};

/// Opcode - Newtype Pattern (2 バイトの function code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode([u8; 2]);

impl Opcode {
    pub const READ_FW_VERSION: Self = Self([0x01, 0x04]);
    pub const BEEP: Self = Self([0x01, 0x06]);
    pub const LED: Self = Self([0x01, 0x07]);
    pub const WORKING_STATUS: Self = Self([0x01, 0x08]);
    pub const MIFARE_REQUEST: Self = Self([0x02, 0x01]);
    pub const MIFARE_ANTICOLLISION: Self = Self([0x02, 0x02]);
    pub const MIFARE_SELECT: Self = Self([0x02, 0x03]);
    pub const MIFARE_AUTH2: Self = Self([0x02, 0x07]);
    pub const MIFARE_READ_BLOCK: Self = Self([0x02, 0x08]);
    pub const MIFARE_WRITE_BLOCK: Self = Self([0x02, 0x09]);
    pub const MIFARE_INIT_VALUE: Self = Self([0x02, 0x0A]);
    pub const MIFARE_READ_BALANCE: Self = Self([0x02, 0x0B]);
    pub const MIFARE_DECREMENT: Self = Self([0x02, 0x0C]);
    pub const MIFARE_INCREMENT: Self = Self([0x02, 0x0D]);
    pub const MIFARE_UL_SELECT: Self = Self([0x02, 0x12]);

    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.as_u16())
    }
}

impl TryFrom<&[u8]> for Opcode {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

/// Absolute Mifare block address: `sector * 4 + block`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockAddress {
    sector: u8,
    block: u8,
}

impl BlockAddress {
    pub fn new(sector: u8, block: u8) -> crate::Result<Self> {
        let index = u16::from(sector) * u16::from(MIFARE_BLOCKS_PER_SECTOR) + u16::from(block);
        if block >= MIFARE_BLOCKS_PER_SECTOR || index > u16::from(u8::MAX) {
            return Err(Error::InvalidBlockAddress { sector, block });
        }
        Ok(Self { sector, block })
    }

    pub fn sector(&self) -> u8 {
        self.sector
    }

    pub fn block(&self) -> u8 {
        self.block
    }

    /// Block index as sent on the wire
    pub fn index(&self) -> u8 {
        self.sector * MIFARE_BLOCKS_PER_SECTOR + self.block
    }

    /// First block of the sector, used as the authentication target
    pub fn sector_base(&self) -> Self {
        Self {
            sector: self.sector,
            block: 0,
        }
    }
}

impl fmt::Display for BlockAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sector, self.block)
    }
}

/// Card family reported by the Mifare request response
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    #[display(fmt = "MIFARE Classic 1K")]
    Classic1K,
    #[display(fmt = "MIFARE UltraLight")]
    UltraLight,
}

impl CardKind {
    pub fn from_type_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes == TYPE_MIFARE_1K {
            Some(Self::Classic1K)
        } else if bytes == TYPE_MIFARE_UL {
            Some(Self::UltraLight)
        } else {
            None
        }
    }
}

/// LED colour codes understood by the module
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    #[display(fmt = "off")]
    Off = 0x00,
    #[display(fmt = "blue")]
    Blue = 0x01,
    #[display(fmt = "red")]
    Red = 0x02,
    #[display(fmt = "red+blue")]
    Both = 0x03,
}

impl Led {
    pub fn code(self) -> u8 {
        self as u8
    }
}
