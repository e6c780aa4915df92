// liber302/liber302/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::{MockTransport, SharedMockTransport};
#[cfg(feature = "serial")]
pub use serial::{SerialReader, SerialTransport, available_ports};
pub use traits::Transport;
