// liber302/liber302/src/session/config.rs

use crate::constants::{MIFARE_BLOCKS_PER_SECTOR, MIFARE_DEFAULT_KEY, MIFARE_KEY_A};
use crate::types::BlockAddress;
use crate::{Error, Result};

/// Parameters of the demonstration transaction.
///
/// Defaults reproduce the reader's stock script: value block 7/1 is
/// initialised to 10, incremented and decremented by 2, then data block 7/0
/// is read, written with `00 01 02 03` and read back, authenticating with
/// key A `FF FF FF FF FF FF` before every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptConfig {
    pub sector: u8,
    pub value_block: u8,
    pub data_block: u8,
    pub initial_balance: i32,
    pub delta: i32,
    pub write_data: [u8; 4],
    pub key: [u8; 6],
    pub key_type: u8,
    pub request_mode: u8,
    pub anticollision_level: u8,
    pub status_probe: [u8; 2],
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            sector: 7,
            value_block: 1,
            data_block: 0,
            initial_balance: 10,
            delta: 2,
            write_data: [0x00, 0x01, 0x02, 0x03],
            key: MIFARE_DEFAULT_KEY,
            key_type: MIFARE_KEY_A,
            request_mode: 0x52,
            anticollision_level: 0x04,
            status_probe: [0x01, 0x23],
        }
    }
}

impl ScriptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sector(mut self, sector: u8) -> Self {
        self.sector = sector;
        self
    }

    pub fn with_value_block(mut self, block: u8) -> Self {
        self.value_block = block;
        self
    }

    pub fn with_data_block(mut self, block: u8) -> Self {
        self.data_block = block;
        self
    }

    pub fn with_initial_balance(mut self, balance: i32) -> Self {
        self.initial_balance = balance;
        self
    }

    pub fn with_delta(mut self, delta: i32) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_write_data(mut self, data: [u8; 4]) -> Self {
        self.write_data = data;
        self
    }

    pub fn with_key(mut self, key_type: u8, key: [u8; 6]) -> Self {
        self.key_type = key_type;
        self.key = key;
        self
    }

    /// Check that every configured address fits the card layout.
    ///
    /// The last block of a sector is its trailer (keys and access bits) and
    /// is never a valid data or value block.
    pub fn validate(&self) -> Result<()> {
        let trailer = MIFARE_BLOCKS_PER_SECTOR - 1;
        for addr in [self.value_address()?, self.data_address()?] {
            if addr.block() == trailer {
                return Err(Error::InvalidBlockAddress {
                    sector: addr.sector(),
                    block: addr.block(),
                });
            }
        }
        if self.value_block == self.data_block {
            return Err(Error::InvalidBlockAddress {
                sector: self.sector,
                block: self.data_block,
            });
        }
        Ok(())
    }

    pub fn value_address(&self) -> Result<BlockAddress> {
        BlockAddress::new(self.sector, self.value_block)
    }

    pub fn data_address(&self) -> Result<BlockAddress> {
        BlockAddress::new(self.sector, self.data_block)
    }

    pub fn auth_address(&self) -> Result<BlockAddress> {
        BlockAddress::new(self.sector, 0)
    }
}
