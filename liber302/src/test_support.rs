//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize reader-side frame construction and notifier
//! capture so tests across the crate and the tests/ directory share them.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::notify::Notifier;
use crate::protocol::Frame;
use crate::session::{ScriptConfig, ScriptStep};
use crate::types::Opcode;

/// Encode a frame as the reader would put it on the wire.
#[doc(hidden)]
pub fn wire_frame(opcode: Opcode, data: &[u8]) -> Vec<u8> {
    match Frame::encode(opcode, data) {
        Ok(bytes) => bytes,
        Err(e) => panic!("fixture frame for {} does not encode: {}", opcode, e),
    }
}

/// Every reader response of a successful Classic 1K transaction, in order:
/// one per command the session sends, starting with the working-status
/// probe. Balances follow `cfg` and the second block read returns the
/// written bytes.
#[doc(hidden)]
pub fn classic_1k_responses(cfg: &ScriptConfig, serial: &[u8]) -> Vec<Vec<u8>> {
    let mut out = vec![
        wire_frame(Opcode::WORKING_STATUS, &[0x00]),
        wire_frame(Opcode::READ_FW_VERSION, b"ER302 V1.0"),
        wire_frame(Opcode::MIFARE_REQUEST, &[0x04, 0x00]),
        wire_frame(Opcode::MIFARE_ANTICOLLISION, serial),
        wire_frame(Opcode::MIFARE_SELECT, &[0x08]),
    ];

    let mut written = [0u8; 16];
    written[..4].copy_from_slice(&cfg.write_data);
    for step in ScriptStep::ALL {
        out.push(wire_frame(Opcode::MIFARE_AUTH2, &[]));
        let data = match step {
            ScriptStep::ReadBalance => cfg.initial_balance.to_le_bytes().to_vec(),
            ScriptStep::ReadIncremented => (cfg.initial_balance + cfg.delta).to_le_bytes().to_vec(),
            ScriptStep::ReadDecremented => cfg.initial_balance.to_le_bytes().to_vec(),
            ScriptStep::ReadBlock => vec![0u8; 16],
            ScriptStep::ReadWritten => written.to_vec(),
            _ => Vec::new(),
        };
        out.push(wire_frame(step.opcode(), &data));
    }
    out
}

/// Notifier that keeps every message for later inspection.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|m| m.contains(needle))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Cloneable recorder, for when the notifier is moved into a `Device` but
/// the test still wants to read the messages.
#[doc(hidden)]
#[derive(Debug, Default, Clone)]
pub struct SharedNotifier(Rc<RecordingNotifier>);

impl SharedNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.messages()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl Notifier for SharedNotifier {
    fn notify(&self, message: &str) {
        self.0.notify(message)
    }
}
