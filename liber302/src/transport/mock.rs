// liber302/liber302/src/transport/mock.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and can be told
/// to fail the next writes.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub closed: bool,
    /// Testing hook: number of upcoming send calls that should fail
    pub send_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent send calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.closed {
            return Err(Error::NotConnected);
        }
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Transport("simulated write failure".into()));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

/// Shared handle to a `MockTransport`, so a test can hand the transport to a
/// `Device` and still inspect what was written.
#[derive(Debug, Default, Clone)]
pub struct SharedMockTransport(Rc<RefCell<MockTransport>>);

impl SharedMockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.0.borrow().sent.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.0.borrow().closed
    }

    pub fn set_send_failures(&self, n: usize) {
        self.0.borrow_mut().set_send_failures(n);
    }
}

impl Transport for SharedMockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.0.borrow_mut().send(data)
    }

    fn close(&mut self) -> Result<()> {
        self.0.borrow_mut().close()
    }
}
