// liber302/liber302/src/session/script.rs

//! Response-driven Mifare transaction.
//!
//! The reader never volunteers data, so the whole transaction is a chain of
//! reactions: each decoded response decides the next command. After the card
//! is selected every operation is preceded by its own authentication, and the
//! `ScriptStep` carried by the phase says which operation follows the next
//! successful `Auth2`.

use std::fmt;

use log::info;

use crate::Result;
use crate::protocol::{Command, Response};
use crate::session::config::ScriptConfig;
use crate::types::{CardKind, Opcode};
use crate::utils::bytes_to_hex_spaced;

pub const ID_WORKING_STATUS: u32 = 0;
pub const ID_FIRMWARE_VERSION: u32 = 1;
pub const ID_REQUEST: u32 = 2;
pub const ID_ANTICOLLISION: u32 = 3;
pub const ID_SELECT: u32 = 4;

/// One value/data operation of the script, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    InitBalance,
    ReadBalance,
    Increment,
    ReadIncremented,
    Decrement,
    ReadDecremented,
    ReadBlock,
    WriteBlock,
    ReadWritten,
}

impl ScriptStep {
    pub const ALL: [ScriptStep; 9] = [
        ScriptStep::InitBalance,
        ScriptStep::ReadBalance,
        ScriptStep::Increment,
        ScriptStep::ReadIncremented,
        ScriptStep::Decrement,
        ScriptStep::ReadDecremented,
        ScriptStep::ReadBlock,
        ScriptStep::WriteBlock,
        ScriptStep::ReadWritten,
    ];

    pub fn cursor(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.cursor() as usize + 1).copied()
    }

    /// Id of the authentication that precedes this step.
    pub fn auth_id(self) -> u32 {
        5 + 2 * u32::from(self.cursor())
    }

    /// Id of the operation itself.
    pub fn op_id(self) -> u32 {
        6 + 2 * u32::from(self.cursor())
    }

    /// Opcode of the response that completes this step.
    pub fn opcode(self) -> Opcode {
        match self {
            Self::InitBalance => Opcode::MIFARE_INIT_VALUE,
            Self::ReadBalance | Self::ReadIncremented | Self::ReadDecremented => {
                Opcode::MIFARE_READ_BALANCE
            }
            Self::Increment => Opcode::MIFARE_INCREMENT,
            Self::Decrement => Opcode::MIFARE_DECREMENT,
            Self::ReadBlock | Self::ReadWritten => Opcode::MIFARE_READ_BLOCK,
            Self::WriteBlock => Opcode::MIFARE_WRITE_BLOCK,
        }
    }

    pub fn command(self, cfg: &ScriptConfig) -> Result<Command> {
        let cmd = match self {
            Self::InitBalance => Command::InitValue {
                block: cfg.value_address()?,
                amount: cfg.initial_balance,
            },
            Self::ReadBalance | Self::ReadIncremented | Self::ReadDecremented => {
                Command::ReadBalance {
                    block: cfg.value_address()?,
                }
            }
            Self::Increment => Command::Increment {
                block: cfg.value_address()?,
                amount: cfg.delta,
            },
            Self::Decrement => Command::Decrement {
                block: cfg.value_address()?,
                amount: cfg.delta,
            },
            Self::ReadBlock | Self::ReadWritten => Command::ReadBlock {
                block: cfg.data_address()?,
            },
            Self::WriteBlock => Command::WriteBlock {
                block: cfg.data_address()?,
                data: cfg.write_data,
            },
        };
        Ok(cmd)
    }
}

/// Where the transaction stands. Each phase names the response it waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionPhase {
    Idle,
    /// Probe and request sent; waiting for the card type
    Requesting,
    Anticollision,
    Selecting,
    /// Auth2 sent; the step runs once it succeeds
    Authenticating(ScriptStep),
    /// Step command sent; waiting for its response
    Executing(ScriptStep),
    Complete,
}

impl fmt::Display for TransactionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticating(step) => write!(f, "authenticating for {:?}", step),
            Self::Executing(step) => write!(f, "executing {:?}", step),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Commands and UI messages produced by one response.
#[derive(Debug, Default)]
pub struct Transition {
    pub commands: Vec<(u32, Command)>,
    pub notes: Vec<String>,
}

impl Transition {
    fn note(mut self, msg: impl Into<String>) -> Self {
        self.notes.push(msg.into());
        self
    }

    fn then(mut self, id: u32, cmd: Command) -> Self {
        self.commands.push((id, cmd));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionState {
    phase: TransactionPhase,
    card_type: Option<Vec<u8>>,
    card_serial: Option<Vec<u8>>,
}

impl Default for TransactionState {
    fn default() -> Self {
        Self {
            phase: TransactionPhase::Idle,
            card_type: None,
            card_serial: None,
        }
    }
}

impl TransactionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TransactionPhase {
        self.phase
    }

    pub fn card_type(&self) -> Option<&[u8]> {
        self.card_type.as_deref()
    }

    pub fn card_serial(&self) -> Option<&[u8]> {
        self.card_serial.as_deref()
    }

    /// Index into the script. 0 until the card is selected, 8 once finished.
    pub fn cursor(&self) -> u8 {
        match self.phase {
            TransactionPhase::Authenticating(step) | TransactionPhase::Executing(step) => {
                step.cursor()
            }
            TransactionPhase::Complete => ScriptStep::ReadWritten.cursor(),
            _ => 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == TransactionPhase::Complete
    }

    /// Start a new card read: forget the previous card and return the
    /// opening commands (status probe, firmware query, Mifare request).
    pub fn begin(&mut self, cfg: &ScriptConfig) -> Vec<(u32, Command)> {
        *self = Self {
            phase: TransactionPhase::Requesting,
            ..Self::default()
        };
        vec![
            (
                ID_WORKING_STATUS,
                Command::WorkingStatus {
                    probe: cfg.status_probe,
                },
            ),
            (ID_FIRMWARE_VERSION, Command::ReadFirmwareVersion),
            (
                ID_REQUEST,
                Command::MifareRequest {
                    mode: cfg.request_mode,
                },
            ),
        ]
    }

    /// React to one decoded response.
    pub fn on_response(&mut self, resp: &Response, cfg: &ScriptConfig) -> Result<Transition> {
        let t = Transition::default();
        let phase = self.phase;

        let t = match (resp, phase) {
            (Response::FirmwareVersion { version }, _) => {
                t.note(format!("Firmware version: {}", version))
            }
            (Response::WorkingStatus { data }, _) => {
                t.note(format!("Working status: [{}]", bytes_to_hex_spaced(data)))
            }
            (Response::MifareRequest { card_type }, TransactionPhase::Requesting) => {
                self.card_type = Some(card_type.clone());
                self.phase = TransactionPhase::Anticollision;
                t.then(
                    ID_ANTICOLLISION,
                    Command::MifareAnticollision {
                        level: cfg.anticollision_level,
                    },
                )
            }
            (Response::MifareAnticollision { serial }, TransactionPhase::Anticollision) => {
                self.card_serial = Some(serial.clone());
                let t = t.note(format!("Card serial: {}", bytes_to_hex_spaced(serial)));
                let kind = self.card_type.as_deref().and_then(CardKind::from_type_bytes);
                match kind {
                    Some(CardKind::Classic1K) => {
                        self.phase = TransactionPhase::Selecting;
                        t.note(format!("CardType: {}", CardKind::Classic1K))
                            .then(
                                ID_SELECT,
                                Command::MifareSelect {
                                    serial: serial.clone(),
                                },
                            )
                    }
                    Some(CardKind::UltraLight) => {
                        self.phase = TransactionPhase::Selecting;
                        t.note(format!("CardType: {}", CardKind::UltraLight))
                            .then(ID_SELECT, Command::MifareUlSelect)
                    }
                    None => {
                        self.phase = TransactionPhase::Idle;
                        t.note(format!(
                            "Unsupported card type [{}]",
                            bytes_to_hex_spaced(self.card_type.as_deref().unwrap_or(&[]))
                        ))
                    }
                }
            }
            (Response::MifareSelect | Response::MifareUlSelect, TransactionPhase::Selecting) => {
                let first = ScriptStep::InitBalance;
                self.phase = TransactionPhase::Authenticating(first);
                t.then(first.auth_id(), self.auth_command(cfg)?)
            }
            (Response::MifareAuth2, TransactionPhase::Authenticating(step)) => {
                self.phase = TransactionPhase::Executing(step);
                t.then(step.op_id(), step.command(cfg)?)
            }
            (resp, TransactionPhase::Executing(step)) if resp.opcode() == step.opcode() => {
                let t = match resp {
                    Response::ReadBalance { value } => {
                        t.note(format!("Read balance decimal({})", value))
                    }
                    Response::ReadBlock { data } => {
                        t.note(format!("Block data: [{}]", bytes_to_hex_spaced(data)))
                    }
                    _ => t,
                };
                match step.next() {
                    Some(next) => {
                        self.phase = TransactionPhase::Authenticating(next);
                        t.then(next.auth_id(), self.auth_command(cfg)?)
                    }
                    None => {
                        info!("script complete");
                        self.phase = TransactionPhase::Complete;
                        t.note("Card transaction complete")
                    }
                }
            }
            (resp, phase) => t.note(format!(
                "Ignored {} response while {}",
                resp.opcode(),
                phase
            )),
        };

        if self.phase != phase {
            info!("transaction: {} -> {}", phase, self.phase);
        }
        Ok(t)
    }

    fn auth_command(&self, cfg: &ScriptConfig) -> Result<Command> {
        Ok(Command::MifareAuth2 {
            key_type: cfg.key_type,
            block: cfg.auth_address()?,
            key: cfg.key,
        })
    }
}
