// liber302/liber302/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod stream;

pub use checksum::xor_checksum;
pub use commands::Command;
pub use frame::{DecodeOutcome, Frame};
pub use responses::Response;
pub use stream::StreamAccumulator;
