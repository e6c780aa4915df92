// liber302/liber302/src/device/handle.rs

use log::{debug, warn};

use crate::notify::Notifier;
use crate::protocol::Command;
use crate::protocol::codec::encode_command_frame;
use crate::session::{QueuedCommand, ScriptConfig, Session};
use crate::transport::Transport;
use crate::types::Led;
use crate::Result;

/// Type-state markers
pub struct Disconnected;

/// Connected state: the open transport and the session bound to it.
pub struct Connected {
    transport: Box<dyn Transport>,
    session: Session,
}

/// Reader handle that enforces the connection state at compile time.
pub struct Device<State = Disconnected> {
    notifier: Box<dyn Notifier>,
    config: ScriptConfig,
    state: State,
}

impl Device<Disconnected> {
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self {
            notifier,
            config: ScriptConfig::default(),
            state: Disconnected,
        }
    }

    pub fn with_config(mut self, config: ScriptConfig) -> Self {
        self.config = config;
        self
    }

    /// Bind a transport. A fresh session (empty stream buffer and queue) is
    /// created for every connection.
    pub fn connect(self, transport: Box<dyn Transport>) -> Result<Device<Connected>> {
        let session = Session::new(self.config.clone())?;
        self.notifier.notify("Connected.");
        Ok(Device {
            notifier: self.notifier,
            config: self.config,
            state: Connected { transport, session },
        })
    }
}

impl<S> Device<S> {
    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }
}

impl Device<Connected> {
    /// Start the card transaction from the top.
    pub fn request_card_read(&mut self) -> Result<()> {
        let first = self.state.session.begin_card_read()?;
        self.transmit(first)
    }

    /// Feed bytes delivered by the transport's reader side.
    pub fn on_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let next = self.state.session.on_bytes(bytes, &*self.notifier)?;
        self.transmit(next)
    }

    /// Sound the buzzer. Sent immediately, outside the command queue.
    pub fn beep(&mut self, duration: u8) -> Result<()> {
        self.send_direct(&Command::Beep { duration })
    }

    /// Switch the status LEDs. Sent immediately, outside the command queue.
    pub fn led(&mut self, color: Led) -> Result<()> {
        self.send_direct(&Command::Led { color })
    }

    pub fn session(&self) -> &Session {
        &self.state.session
    }

    /// Close the transport and drop the session.
    pub fn disconnect(self) -> Device<Disconnected> {
        let mut transport = self.state.transport;
        if let Err(e) = transport.close() {
            warn!("close failed: {}", e);
            self.notifier.notify(&e.to_string());
        }
        self.notifier.notify("Disconnected.");
        Device {
            notifier: self.notifier,
            config: self.config,
            state: Disconnected,
        }
    }

    fn send_direct(&mut self, cmd: &Command) -> Result<()> {
        let bytes = encode_command_frame(cmd)?;
        debug!("direct {}", cmd.label());
        self.write(&bytes)
    }

    // The command stays outstanding on failure; it is not retried.
    fn transmit(&mut self, cmd: Option<QueuedCommand>) -> Result<()> {
        let Some(cmd) = cmd else {
            return Ok(());
        };
        debug!("sending #{} {}", cmd.id(), cmd.label());
        self.write(cmd.bytes())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        match self.state.transport.send(bytes) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("transport write failed: {}", e);
                self.notifier.notify(&format!("Write failed: {}", e));
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for Device<Connected> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("session", &self.state.session)
            .finish_non_exhaustive()
    }
}
