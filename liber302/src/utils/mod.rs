//! Small helpers shared across the crate, mostly for log output.

pub mod hex;

// Re-export so callers can write `crate::utils::bytes_to_hex(...)`.
pub use hex::*;
