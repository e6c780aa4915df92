// liber302/liber302/src/device/builder.rs

use crate::device::handle::{Connected, Device};
use crate::notify::{LogNotifier, Notifier};
use crate::session::ScriptConfig;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a connected Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    notifier: Option<Box<dyn Notifier>>,
    config: ScriptConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-opened transport (e.g. SerialTransport, MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Where progress messages go. Defaults to the `log` facade.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_config(mut self, config: ScriptConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return a connected Device.
    /// Requires a transport; otherwise returns NotConnected.
    pub fn build(self) -> Result<Device<Connected>> {
        let transport = self.transport.ok_or(Error::NotConnected)?;
        let notifier = self
            .notifier
            .unwrap_or_else(|| Box::new(LogNotifier));
        Device::new(notifier)
            .with_config(self.config)
            .connect(transport)
    }
}
