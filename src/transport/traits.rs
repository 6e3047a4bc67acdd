//! Link transport trait for abstraction and testability
//!
//! This trait defines the open/send/close surface the cycle controller
//! needs from the point-to-point serial link, allowing the UART driver to
//! be swapped with a recording mock for testing. Framing and checksumming
//! of the link live below this seam.

use core::future::Future;

/// Errors that can occur while handing bytes to the link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The peripheral refused or dropped the write
    WriteError,
}

/// Abstract transmit-side serial link to the radio module.
///
/// Sends are best-effort: there is no acknowledgment from the radio and no
/// delivery status beyond the peripheral accepting the bytes. The cycle
/// controller does not recover from transport failures; a dropped beacon is
/// corrected by the next cycle's counter progression.
pub trait LinkTransport {
    /// Bring up the transmit side of the link.
    fn open_tx(&mut self) -> impl Future<Output = Result<(), TransportError>>;

    /// Hand bytes to the link, blocking until they are queued by the
    /// underlying serial peripheral.
    fn send(&mut self, bytes: &[u8]) -> impl Future<Output = Result<(), TransportError>>;

    /// Close the link.
    fn close(&mut self) -> impl Future<Output = ()>;
}
