// liber302/liber302/src/prelude.rs

pub use crate::device::{Connected, Device, DeviceBuilder, Disconnected};
pub use crate::notify::{ChannelNotifier, LogNotifier, Notifier};
pub use crate::protocol::{Command, Frame, Response, StreamAccumulator};
pub use crate::session::{ScriptConfig, Session, TransactionPhase};
pub use crate::transport::Transport;
pub use crate::{BlockAddress, CardKind, Error, Led, Opcode, Result};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
