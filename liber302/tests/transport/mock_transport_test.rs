#[path = "../common/mod.rs"]
mod common;

use liber302::transport::{MockTransport, SharedMockTransport, Transport};

#[test]
fn records_frames_in_order() {
    let mut m = MockTransport::new();
    m.send(&common::fixtures::request_1k_frame()).unwrap();
    m.send(&[0x01]).unwrap();
    assert_eq!(m.sent.len(), 2);
    assert_eq!(m.sent[0], common::fixtures::request_1k_frame());
}

#[test]
fn boxed_shared_handle_is_observable() {
    let shared = SharedMockTransport::new();
    let mut boxed: Box<dyn Transport> = Box::new(shared.clone());
    boxed.send(&[0xAA, 0xBB]).unwrap();
    boxed.close().unwrap();
    assert_eq!(shared.sent(), vec![vec![0xAA, 0xBB]]);
    assert!(shared.is_closed());
}
