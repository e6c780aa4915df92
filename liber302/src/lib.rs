// liber302/liber302/src/lib.rs

//! liber302
//!
//! Pure Rust driver for ER302 Mifare serial card readers: frame codec,
//! stream reassembly, and the response-driven card transaction.
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod notify;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are available to consumers and to `prelude`.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
