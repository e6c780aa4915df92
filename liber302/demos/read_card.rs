//! Run the demonstration transaction against a real ER302.
//!
//! Usage:
//!   cargo run -p liber302 --example read_card --features serial -- /dev/ttyUSB0

use std::time::{Duration, Instant};

use liber302::constants::ER302_DEFAULT_BAUD;
use liber302::prelude::*;
use liber302::transport::{SerialTransport, available_ports};

fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        println!("usage: read_card <port>");
        println!("available ports: {:?}", available_ports()?);
        return Ok(());
    };

    println!("Opening {} at {} baud...", path, ER302_DEFAULT_BAUD);
    let (transport, mut reader) = SerialTransport::open(&path, ER302_DEFAULT_BAUD)?;
    let (notifier, messages) = ChannelNotifier::new();
    let mut device = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_notifier(Box::new(notifier))
        .build()?;

    device.led(Led::Blue)?;
    device.request_card_read()?;

    let deadline = Instant::now() + Duration::from_secs(5);
    while !device.session().state().is_complete() && Instant::now() < deadline {
        let chunk = reader.read_chunk()?;
        device.on_bytes(&chunk)?;
        for msg in messages.try_iter() {
            println!("{}", msg);
        }
    }

    match device.session().state().phase() {
        TransactionPhase::Complete => {
            device.beep(50)?;
            println!("Done.");
        }
        phase => println!("Stopped while {}", phase),
    }
    device.led(Led::Off)?;
    device.disconnect();
    Ok(())
}
