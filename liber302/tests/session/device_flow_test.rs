#[path = "../common/mod.rs"]
mod common;

use liber302::device::{Connected, Device, DeviceBuilder};
use liber302::notify::ChannelNotifier;
use liber302::session::ScriptConfig;
use liber302::test_support::{SharedNotifier, classic_1k_responses};
use liber302::transport::SharedMockTransport;
use liber302::types::{Led, Opcode};

fn connected(notes: &SharedNotifier) -> (Device<Connected>, SharedMockTransport) {
    common::init_logger();
    let transport = SharedMockTransport::new();
    let device = DeviceBuilder::new()
        .with_transport(Box::new(transport.clone()))
        .with_notifier(Box::new(notes.clone()))
        .build()
        .unwrap();
    (device, transport)
}

#[test]
fn full_card_read_over_mock_transport() {
    let notes = SharedNotifier::new();
    let (mut device, transport) = connected(&notes);
    device.request_card_read().unwrap();

    let responses = classic_1k_responses(&ScriptConfig::default(), &[1, 2, 3, 4]);
    for wire in &responses {
        // split every response to exercise reassembly across callbacks
        let (head, tail) = wire.split_at(wire.len() / 2);
        device.on_bytes(head).unwrap();
        device.on_bytes(tail).unwrap();
    }

    let sent = transport.sent();
    assert_eq!(sent.len(), 23);
    assert_eq!(&sent[0][6..8], Opcode::WORKING_STATUS.as_bytes());
    assert_eq!(&sent[22][6..8], Opcode::MIFARE_READ_BLOCK.as_bytes());
    assert!(device.session().state().is_complete());
    assert!(notes.contains("Connected."));
    assert!(notes.contains("Card transaction complete"));
}

#[test]
fn beep_during_transaction_leaves_queue_alone() {
    let notes = SharedNotifier::new();
    let (mut device, transport) = connected(&notes);
    device.request_card_read().unwrap();
    device.beep(20).unwrap();
    device.led(Led::Red).unwrap();

    assert_eq!(transport.sent().len(), 3);
    assert_eq!(
        device.session().outstanding(),
        Some(Opcode::WORKING_STATUS)
    );
    assert_eq!(device.session().queue().len(), 2);
}

#[test]
fn failed_write_stalls_until_next_card_read() {
    let notes = SharedNotifier::new();
    let (mut device, transport) = connected(&notes);
    let responses = classic_1k_responses(&ScriptConfig::default(), &[1, 2, 3, 4]);

    device.request_card_read().unwrap();
    transport.set_send_failures(1);
    assert!(device.on_bytes(&responses[0]).is_err());
    assert!(notes.contains("Write failed"));

    // The firmware query was popped and is outstanding; a stray answer to
    // something else is dropped and nothing more goes out.
    device.on_bytes(&responses[2]).unwrap();
    assert_eq!(transport.sent().len(), 1);
    assert!(notes.contains("Unsolicited"));
    assert_eq!(device.session().state().card_type(), None);

    device.request_card_read().unwrap();
    assert_eq!(transport.sent().len(), 2);
}

#[test]
fn reconnect_gets_a_fresh_session() {
    let notes = SharedNotifier::new();
    let (mut device, _) = connected(&notes);
    device.request_card_read().unwrap();
    device.on_bytes(&[0xAA, 0xBB, 0x07]).unwrap();
    assert_eq!(device.session().stream().len(), 3);

    let device = device.disconnect();
    let device = device.connect(Box::new(SharedMockTransport::new())).unwrap();
    assert!(device.session().stream().is_empty());
    assert!(device.session().queue().is_empty());
    assert!(notes.contains("Disconnected."));
}

#[test]
fn channel_notifier_reaches_another_thread() {
    let (notifier, rx) = ChannelNotifier::new();
    let transport = SharedMockTransport::new();
    let mut device = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .with_notifier(Box::new(notifier))
        .build()
        .unwrap();
    device.request_card_read().unwrap();
    let responses = classic_1k_responses(&ScriptConfig::default(), &[1]);
    device.on_bytes(&responses[0]).unwrap();
    device.on_bytes(&responses[1]).unwrap();

    let ui = std::thread::spawn(move || rx.iter().take(3).collect::<Vec<String>>());
    let messages = ui.join().unwrap();
    assert_eq!(messages[0], "Connected.");
    assert!(messages[1].starts_with("Working status"));
    assert!(messages[2].starts_with("Firmware version"));
}
