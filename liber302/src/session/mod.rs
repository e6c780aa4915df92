// liber302/liber302/src/session/mod.rs

//! Protocol state of one connected reader.
//!
//! A `Session` owns everything that changes while bytes come in: the stream
//! accumulator, the outbound queue, the transaction state and the opcode of
//! the command currently in flight. All of it is mutated through `&mut self`,
//! so one `on_bytes` call is one critical section.
//!
//! Responses are matched to the outstanding command by opcode alone. This
//! holds because at most one command is in flight and the script never
//! repeats an opcode back-to-back without a response in between. A frame
//! that answers nothing in flight never reaches the state machine.

pub mod config;
pub mod queue;
pub mod script;

pub use config::ScriptConfig;
pub use queue::{CommandQueue, QueuedCommand};
pub use script::{ScriptStep, TransactionPhase, TransactionState, Transition};

use log::{debug, warn};

use crate::Result;
use crate::notify::Notifier;
use crate::protocol::{Frame, Response, StreamAccumulator};
use crate::types::Opcode;
use crate::utils::bytes_to_hex_spaced;

#[derive(Debug)]
pub struct Session {
    config: ScriptConfig,
    stream: StreamAccumulator,
    queue: CommandQueue,
    state: TransactionState,
    outstanding: Option<Opcode>,
}

impl Session {
    pub fn new(config: ScriptConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stream: StreamAccumulator::new(),
            queue: CommandQueue::new(),
            state: TransactionState::new(),
            outstanding: None,
        })
    }

    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    pub fn state(&self) -> &TransactionState {
        &self.state
    }

    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    pub fn stream(&self) -> &StreamAccumulator {
        &self.stream
    }

    /// Opcode of the command sent and not yet answered.
    pub fn outstanding(&self) -> Option<Opcode> {
        self.outstanding
    }

    /// Seed a new card read and return the first command to transmit.
    ///
    /// Any command still in flight from a previous read is abandoned.
    pub fn begin_card_read(&mut self) -> Result<Option<QueuedCommand>> {
        self.queue.clear();
        self.outstanding = None;
        for (id, cmd) in self.state.begin(&self.config) {
            self.queue.enqueue(QueuedCommand::new(id, &cmd)?);
        }
        Ok(self.dispatch())
    }

    /// Feed bytes received from the transport.
    ///
    /// Every complete frame is processed in order; afterwards at most one
    /// queued command is popped and returned for transmission.
    pub fn on_bytes(
        &mut self,
        bytes: &[u8],
        notifier: &dyn Notifier,
    ) -> Result<Option<QueuedCommand>> {
        debug!("received [{}]", bytes_to_hex_spaced(bytes));
        for frame in self.stream.push(bytes) {
            self.handle_frame(frame, notifier)?;
        }
        Ok(self.dispatch())
    }

    fn handle_frame(&mut self, frame: Frame, notifier: &dyn Notifier) -> Result<()> {
        match self.outstanding {
            Some(op) if op == frame.opcode => self.outstanding = None,
            Some(op) => {
                debug!("unsolicited {} frame while {} outstanding", frame.opcode, op);
                notifier.notify(&format!("Unsolicited {} response, ignored", frame.opcode));
                return Ok(());
            }
            None => {
                debug!("unsolicited {} frame, nothing outstanding", frame.opcode);
                notifier.notify(&format!("Unsolicited {} response, ignored", frame.opcode));
                return Ok(());
            }
        }

        if !frame.checksum_valid {
            warn!("discarding {} frame: checksum mismatch", frame.opcode);
            notifier.notify(&format!("Checksum error in {} response, ignored", frame.opcode));
            return Ok(());
        }

        let resp = match Response::decode(&frame) {
            Ok(resp) => resp,
            Err(e) => {
                warn!("discarding {} frame: {}", frame.opcode, e);
                notifier.notify(&format!("Malformed {} response: {}", frame.opcode, e));
                return Ok(());
            }
        };

        let transition = self.state.on_response(&resp, &self.config)?;
        for note in &transition.notes {
            notifier.notify(note);
        }
        for (id, cmd) in transition.commands {
            self.queue.enqueue(QueuedCommand::new(id, &cmd)?);
        }
        Ok(())
    }

    fn dispatch(&mut self) -> Option<QueuedCommand> {
        if self.outstanding.is_some() {
            return None;
        }
        let next = self.queue.dispatch_next()?;
        debug!("dispatch #{} {} [{}]", next.id(), next.label(), bytes_to_hex_spaced(next.bytes()));
        self.outstanding = Some(next.opcode());
        Some(next)
    }
}
