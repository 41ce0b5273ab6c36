//! Transport trait for peripheral communication.
//!
//! The [`Transport`] trait abstracts over the physical link to a peripheral.
//! Implementations exist for serial ports (`periphlib-transport`) and mock
//! transports for testing (`periphlib-test-harness`).
//!
//! Drivers (e.g. the AT command engine in `periphlib-gsm`) operate on a
//! `Transport` rather than directly on a serial port, enabling both real
//! hardware access and deterministic unit testing.
//!
//! A transport is exclusively owned by one driver instance: all I/O methods
//! take `&mut self`, and the handle must not be shared across concurrent
//! callers. Concurrent access to the same physical port would interleave
//! writes and reads with undefined framing.

use async_trait::async_trait;

use crate::error::Result;

/// Asynchronous byte-level transport to a peripheral.
///
/// Implementations handle the physical layer only. Framing (newline-delimited
/// sentences, CR-terminated AT commands, fixed-length tag frames) is the
/// responsibility of the drivers that consume this trait.
#[async_trait]
pub trait Transport: Send {
    /// Send raw bytes to the device.
    ///
    /// Implementations should not return until all bytes have been written
    /// to the underlying transport (serial TX buffer, etc.).
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read whatever bytes the device has already sent, without waiting for
    /// more to arrive.
    ///
    /// Returns the number of bytes read, which may be zero when nothing is
    /// buffered. Drivers call this exactly once per exchange, after the
    /// settle interval; they never accumulate across multiple drains.
    async fn read_available(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Block until a single byte arrives and return it.
    ///
    /// There is no timeout: a stalled device stalls the caller. Callers
    /// needing cancellable I/O must wrap the transport with their own
    /// deadline layer.
    async fn read_byte(&mut self) -> Result<u8>;

    /// Close the transport connection.
    ///
    /// After calling `close()`, subsequent I/O calls should return
    /// [`Error::NotConnected`](crate::error::Error::NotConnected).
    async fn close(&mut self) -> Result<()>;

    /// Check whether the transport is currently connected.
    fn is_connected(&self) -> bool;
}
