// liber302/liber302/src/notify.rs

//! User-facing progress messages.
//!
//! Notifications are fire-and-forget: implementations must return
//! immediately and never fail back into protocol processing.

use std::sync::mpsc::{self, Receiver, Sender};

/// Sink for human-readable session messages (the UI log pane).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Forwards every message to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::info!("{}", message);
    }
}

/// Hands messages to another thread (typically the UI thread) through an
/// unbounded channel. A dropped receiver is not an error.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<String>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, Receiver<String>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: &str) {
        let _ = self.tx.send(message.to_string());
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}
