// liber302/liber302/src/protocol/responses/system.rs

/// Decode read-firmware-version response payload (function code 0x0104).
/// The module answers with an ASCII version string, sometimes NUL padded.
pub fn decode_firmware_version(data: &[u8]) -> String {
    let trimmed = match data.iter().rposition(|&b| b != 0) {
        Some(last) => &data[..=last],
        None => &[][..],
    };
    String::from_utf8_lossy(trimmed).into_owned()
}
