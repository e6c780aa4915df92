#[path = "../common/mod.rs"]
mod common;

use liber302::protocol::{DecodeOutcome, Frame, StreamAccumulator};
use liber302::types::Opcode;
use proptest::prelude::*;

fn standalone(bytes: &[u8]) -> Frame {
    match Frame::decode(bytes) {
        DecodeOutcome::Frame(f) => f,
        other => panic!("expected a frame, got {:?}", other),
    }
}

#[test]
fn multi_frame_drain_leaves_nothing_behind() {
    common::init_logger();
    let a = common::fixtures::frame(Opcode::MIFARE_AUTH2, &[]);
    let b = common::fixtures::balance_frame(12);
    let mut wire = a.clone();
    wire.extend_from_slice(&b);

    let mut acc = StreamAccumulator::new();
    let frames = acc.push(&wire);
    assert_eq!(frames, vec![standalone(&a), standalone(&b)]);
    assert!(acc.is_empty());
}

#[test]
fn incomplete_then_complete() {
    let wire = common::fixtures::request_1k_frame();
    let (head, tail) = wire.split_at(wire.len() / 2);

    let mut acc = StreamAccumulator::new();
    assert!(acc.push(head).is_empty());
    assert_eq!(acc.len(), head.len());
    assert_eq!(acc.push(tail), vec![standalone(&wire)]);
    assert!(acc.residual().is_empty());
}

#[test]
fn false_header_with_oversized_length_does_not_stall() {
    common::init_logger();
    let real = common::fixtures::balance_frame(-5);
    let mut wire = vec![0xAA, 0xBB, 0xFF, 0xFF];
    wire.extend_from_slice(&real);

    let mut acc = StreamAccumulator::new();
    assert_eq!(acc.push(&wire), vec![standalone(&real)]);
    assert!(acc.is_empty());
}

#[test]
fn stray_header_bytes_before_frame() {
    let real = common::fixtures::request_1k_frame();
    for garbage in [
        vec![0xAA],
        vec![0xAA, 0xAA, 0x00, 0xAA],
        vec![0x00, 0xAA, 0x42, 0xAA, 0xAA],
    ] {
        let mut wire = garbage.clone();
        wire.extend_from_slice(&real);
        let mut acc = StreamAccumulator::new();
        assert_eq!(acc.push(&wire), vec![standalone(&real)], "garbage {:02x?}", garbage);
        assert!(acc.is_empty());
    }
}

#[test]
fn corrupted_frame_is_still_delimited() {
    let mut bad = common::fixtures::frame(Opcode::MIFARE_READ_BLOCK, &[0u8; 16]);
    bad[10] ^= 0x40;
    let good = common::fixtures::frame(Opcode::MIFARE_AUTH2, &[]);
    let mut wire = bad;
    wire.extend_from_slice(&good);

    let frames = StreamAccumulator::new().push(&wire);
    assert_eq!(frames.len(), 2);
    assert!(!frames[0].checksum_valid);
    assert!(frames[1].checksum_valid);
}

proptest! {
    #[test]
    fn resync_after_garbage(
        // stray 0xAA bytes are allowed; only a complete header is excluded
        garbage in proptest::collection::vec(any::<u8>().prop_filter("no header tail", |b| *b != 0xBB), 0..64),
        data in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let wire = Frame::encode(Opcode::MIFARE_READ_BLOCK, &data).unwrap();
        let mut input = garbage;
        input.extend_from_slice(&wire);

        let mut acc = StreamAccumulator::new();
        let frames = acc.push(&input);
        prop_assert_eq!(frames, vec![standalone(&wire)]);
        prop_assert!(acc.is_empty());
    }

    #[test]
    fn byte_at_a_time_delivery(data in proptest::collection::vec(any::<u8>(), 0..32)) {
        let wire = Frame::encode(Opcode::MIFARE_WRITE_BLOCK, &data).unwrap();
        let mut acc = StreamAccumulator::new();
        let mut frames = Vec::new();
        for b in &wire {
            frames.extend(acc.push(std::slice::from_ref(b)));
        }
        prop_assert_eq!(frames, vec![standalone(&wire)]);
    }
}
