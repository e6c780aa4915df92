#[path = "common.rs"]
mod common;

use std::time::{Duration, Instant};

use liber302::types::Led;
use serial_test::serial;

// These tests require a real ER302 with a Classic 1K card on it. They are
// marked `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// LIBER302_PORT=/dev/ttyUSB0 cargo test -p liber302 --test hardware --features serial -- --ignored

#[test]
#[ignore]
#[serial]
fn beep_and_led() -> anyhow::Result<()> {
    let Some((mut device, _reader)) = common::open_reader()? else {
        return Ok(());
    };
    device.beep(50)?;
    device.led(Led::Blue)?;
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn full_card_transaction() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    let Some((mut device, mut reader)) = common::open_reader()? else {
        return Ok(());
    };
    device.request_card_read()?;

    let deadline = Instant::now() + Duration::from_secs(5);
    while !device.session().state().is_complete() {
        anyhow::ensure!(Instant::now() < deadline, "transaction did not complete");
        let chunk = reader.read_chunk()?;
        device.on_bytes(&chunk)?;
    }
    assert_eq!(device.session().state().cursor(), 8);
    Ok(())
}
