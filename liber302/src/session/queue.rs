// liber302/liber302/src/session/queue.rs

use std::collections::{HashMap, VecDeque};

use crate::Result;
use crate::protocol::Command;
use crate::protocol::codec::encode_command_frame;
use crate::types::Opcode;

/// A framed command waiting for transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedCommand {
    id: u32,
    label: String,
    opcode: Opcode,
    bytes: Vec<u8>,
}

impl QueuedCommand {
    pub fn new(id: u32, cmd: &Command) -> Result<Self> {
        Ok(Self {
            id,
            label: cmd.label(),
            opcode: cmd.opcode(),
            bytes: encode_command_frame(cmd)?,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Full wire frame
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// FIFO of commands plus an id index of everything enqueued since the last
/// `clear`. The session pops at most one command per response cycle.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: VecDeque<QueuedCommand>,
    index: HashMap<u32, QueuedCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, cmd: QueuedCommand) {
        self.index.insert(cmd.id, cmd.clone());
        self.pending.push_back(cmd);
    }

    /// Pop the head command for transmission.
    pub fn dispatch_next(&mut self) -> Option<QueuedCommand> {
        self.pending.pop_front()
    }

    /// Look up any command enqueued since the last clear, sent or not.
    pub fn get(&self, id: u32) -> Option<&QueuedCommand> {
        self.index.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedCommand> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.index.clear();
    }
}
