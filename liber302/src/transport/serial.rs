// liber302/liber302/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use log::debug;
use serialport::SerialPort;

use crate::transport::traits::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// How long a read waits before reporting "nothing available".
const READ_TIMEOUT: Duration = Duration::from_millis(50);

/// List the names of the serial ports present on this machine.
pub fn available_ports() -> Result<Vec<String>> {
    Ok(serialport::available_ports()?
        .into_iter()
        .map(|p| p.port_name)
        .collect())
}

/// Write half of an ER302 serial link. 8N1, no flow control.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

/// Read half of the same port, meant to live on a reader thread.
pub struct SerialReader {
    port: Box<dyn SerialPort>,
    buf: Vec<u8>,
}

impl SerialTransport {
    /// Open `path` at `baud` and split it into write and read halves.
    pub fn open(path: &str, baud: u32) -> Result<(Self, SerialReader)> {
        let port = serialport::new(path, baud)
            .timeout(READ_TIMEOUT)
            .open()?;
        let reader = port.try_clone()?;
        debug!("opened {} at {} baud", path, baud);
        Ok((
            Self { port },
            SerialReader {
                port: reader,
                buf: vec![0u8; 256],
            },
        ))
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        debug!("tx [{}]", bytes_to_hex_spaced(data));
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }
}

impl SerialReader {
    /// Return whatever bytes arrived, or an empty vector on timeout.
    pub fn read_chunk(&mut self) -> Result<Vec<u8>> {
        match self.port.read(&mut self.buf) {
            Ok(n) => Ok(self.buf[..n].to_vec()),
            Err(e) if e.kind() == ErrorKind::TimedOut => Ok(Vec::new()),
            Err(e) => Err(Error::Io(e)),
        }
    }
}
