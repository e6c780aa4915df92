// liber302/liber302/src/protocol/commands/system.rs

use crate::types::Led;

/// Encode working-status probe payload (function code 0x0108)
pub fn encode_working_status(probe: [u8; 2]) -> Vec<u8> {
    probe.to_vec()
}

/// Encode read-firmware-version payload (function code 0x0104). No data.
pub fn encode_read_firmware() -> Vec<u8> {
    Vec::new()
}

/// Encode beep payload (function code 0x0106)
pub fn encode_beep(duration: u8) -> Vec<u8> {
    vec![duration]
}

/// Encode LED control payload (function code 0x0107)
pub fn encode_led(color: Led) -> Vec<u8> {
    vec![color.code()]
}
