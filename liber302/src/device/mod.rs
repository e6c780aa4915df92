// liber302/liber302/src/device/mod.rs

pub mod builder;
pub mod handle;
#[cfg(feature = "async")]
pub mod pump;

pub use builder::DeviceBuilder;
pub use handle::{Connected, Device, Disconnected};
