// liber302/liber302/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a little-endian i32 at given index, with bounds checking.
pub fn le_i32_at(data: &[u8], idx: usize) -> Result<i32> {
    let s = slice_at(data, idx, 4)?;
    Ok(i32::from_le_bytes([s[0], s[1], s[2], s[3]]))
}
