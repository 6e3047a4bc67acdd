//! UART link to the radio module

use crate::transport::{LinkTransport, TransportError};
use embedded_io_async::Write;

/// Transmit-only serial link over any async byte writer.
///
/// The UART peripheral stays configured for the life of the process, so
/// opening the link is free and closing it just drains the transmit FIFO
/// before the cycle cuts radio power.
pub struct UartLinkTransport<W: Write> {
    tx: W,
}

impl<W: Write> UartLinkTransport<W> {
    pub fn new(tx: W) -> Self {
        Self { tx }
    }
}

impl<W: Write> LinkTransport for UartLinkTransport<W> {
    async fn open_tx(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.tx
            .write_all(bytes)
            .await
            .map_err(|_| TransportError::WriteError)
    }

    async fn close(&mut self) {
        let _ = self.tx.flush().await;
    }
}
