#[path = "../common/mod.rs"]
mod common;

use liber302::protocol::Command;
use liber302::session::{ScriptConfig, Session, TransactionPhase};
use liber302::test_support::{RecordingNotifier, classic_1k_responses};
use liber302::types::{BlockAddress, Opcode};

/// Drive a session through `responses`, one frame per callback, and return
/// every command it handed out as (id, opcode, data).
fn run(
    session: &mut Session,
    responses: &[Vec<u8>],
    notes: &RecordingNotifier,
) -> Vec<(u32, Opcode, Vec<u8>)> {
    let mut sent = Vec::new();
    let first = session.begin_card_read().unwrap().unwrap();
    let data = first.bytes()[8..first.bytes().len() - 1].to_vec();
    sent.push((first.id(), first.opcode(), data));
    for wire in responses {
        if let Some(next) = session.on_bytes(wire, notes).unwrap() {
            let data = next.bytes()[8..next.bytes().len() - 1].to_vec();
            sent.push((next.id(), next.opcode(), data));
        }
    }
    sent
}

#[test]
fn canonical_transaction_produces_the_full_command_sequence() {
    common::init_logger();
    let cfg = ScriptConfig::default();
    let notes = RecordingNotifier::new();
    let mut session = Session::new(cfg.clone()).unwrap();
    let serial = common::fixtures::SAMPLE_SERIAL;

    let sent = run(&mut session, &classic_1k_responses(&cfg, &serial), &notes);

    let value = BlockAddress::new(7, 1).unwrap();
    let data = BlockAddress::new(7, 0).unwrap();
    let auth = Command::MifareAuth2 {
        key_type: 0x60,
        block: data,
        key: [0xFF; 6],
    }
    .data();
    let mut expected: Vec<(Opcode, Vec<u8>)> = vec![
        (Opcode::WORKING_STATUS, vec![0x01, 0x23]),
        (Opcode::READ_FW_VERSION, vec![]),
        (Opcode::MIFARE_REQUEST, vec![0x52]),
        (Opcode::MIFARE_ANTICOLLISION, vec![0x04]),
        (Opcode::MIFARE_SELECT, serial.to_vec()),
    ];
    let ops = [
        Command::InitValue { block: value, amount: 10 },
        Command::ReadBalance { block: value },
        Command::Increment { block: value, amount: 2 },
        Command::ReadBalance { block: value },
        Command::Decrement { block: value, amount: 2 },
        Command::ReadBalance { block: value },
        Command::ReadBlock { block: data },
        Command::WriteBlock { block: data, data: [0, 1, 2, 3] },
        Command::ReadBlock { block: data },
    ];
    for op in ops {
        expected.push((Opcode::MIFARE_AUTH2, auth.clone()));
        expected.push((op.opcode(), op.data()));
    }

    let ids: Vec<u32> = sent.iter().map(|(id, _, _)| *id).collect();
    assert_eq!(ids, (0..=22).collect::<Vec<u32>>());
    let commands: Vec<(Opcode, Vec<u8>)> = sent.into_iter().map(|(_, op, d)| (op, d)).collect();
    assert_eq!(commands, expected);

    assert_eq!(session.state().phase(), TransactionPhase::Complete);
    assert_eq!(session.state().cursor(), 8);
    assert!(session.queue().is_empty());
    assert_eq!(session.outstanding(), None);

    assert!(notes.contains("Firmware version: ER302 V1.0"));
    assert!(notes.contains("Card serial: de ad be ef"));
    assert!(notes.contains("Read balance decimal(12)"));
    assert!(notes.contains("Block data: [00 01 02 03"));
    assert!(notes.contains("Card transaction complete"));
}

#[test]
fn responses_ahead_of_the_dispatcher_do_not_run_the_script() {
    let cfg = ScriptConfig::default();
    let notes = RecordingNotifier::new();
    let mut session = Session::new(cfg.clone()).unwrap();
    session.begin_card_read().unwrap();

    // Only the status query is in flight; everything after its answer
    // responds to nothing and must be dropped.
    let responses = classic_1k_responses(&cfg, &[1, 2, 3, 4]);
    let next = session.on_bytes(&responses.concat(), &notes).unwrap().unwrap();
    assert_eq!(next.id(), 1);
    assert_eq!(next.opcode(), Opcode::READ_FW_VERSION);
    assert_eq!(session.queue().len(), 1);
    assert_eq!(session.state().phase(), TransactionPhase::Requesting);
    assert_eq!(session.state().card_type(), None);
    assert!(notes.contains("Unsolicited"));

    // Answering in lockstep from here runs the script exactly once.
    let mut sent = vec![next.id()];
    for wire in &responses[1..] {
        if let Some(cmd) = session.on_bytes(wire, &notes).unwrap() {
            sent.push(cmd.id());
        }
    }
    assert_eq!(sent, (1..=22).collect::<Vec<u32>>());
    assert!(session.state().is_complete());
    assert!(session.queue().is_empty());
    assert_eq!(session.outstanding(), None);

    // A replayed burst after completion sends nothing.
    assert!(session.on_bytes(&responses.concat(), &notes).unwrap().is_none());
    assert!(session.queue().is_empty());
    assert!(session.state().is_complete());
}

#[test]
fn custom_sector_is_used_throughout() {
    let cfg = ScriptConfig::default()
        .with_sector(2)
        .with_initial_balance(100)
        .with_delta(5);
    let notes = RecordingNotifier::new();
    let mut session = Session::new(cfg.clone()).unwrap();
    let sent = run(&mut session, &classic_1k_responses(&cfg, &[9, 9, 9, 9]), &notes);

    assert_eq!(sent.len(), 23);
    assert_eq!(sent[5].2[1], 8);
    assert_eq!(sent[6].2, vec![9, 100, 0, 0, 0]);
    assert!(notes.contains("Read balance decimal(105)"));
    assert!(session.state().is_complete());
}

#[test]
fn restart_mid_transaction_starts_over() {
    let cfg = ScriptConfig::default();
    let notes = RecordingNotifier::new();
    let mut session = Session::new(cfg.clone()).unwrap();
    let responses = classic_1k_responses(&cfg, &[1, 2, 3, 4]);
    run(&mut session, &responses[..8], &notes);
    assert!(session.state().cursor() > 0);

    let first = session.begin_card_read().unwrap().unwrap();
    assert_eq!(first.id(), 0);
    assert_eq!(session.state().phase(), TransactionPhase::Requesting);
    assert_eq!(session.state().card_serial(), None);
    assert_eq!(session.queue().len(), 2);
}
