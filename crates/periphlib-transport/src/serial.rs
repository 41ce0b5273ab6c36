//! Serial port transport for peripheral communication.
//!
//! This module provides [`SerialTransport`], which implements the
//! [`Transport`] trait for USB virtual COM ports and hardware UARTs.
//!
//! The peripherals periphlib targets all speak 8 data bits, 1 stop bit, no
//! parity, no flow control, so the port is opened with those settings and
//! only the baud rate varies:
//! - GPS modules (NMEA): typically 9600 baud
//! - GSM/GPRS modems (AT commands): typically 9600 or 115200 baud
//! - RFID readers (EM4100-style): typically 9600 baud
//!
//! # Example
//!
//! ```no_run
//! use periphlib_transport::SerialTransport;
//! use periphlib_core::transport::Transport;
//!
//! # async fn example() -> periphlib_core::Result<()> {
//! let mut transport = SerialTransport::open("/dev/ttyUSB0", 9600).await?;
//!
//! // Send an AT command
//! transport.send(b"AT\r").await?;
//!
//! // Later, drain whatever reply has accumulated
//! let mut buf = [0u8; 256];
//! let n = transport.read_available(&mut buf).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use periphlib_core::error::{Error, Result};
use periphlib_core::transport::Transport;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_serial::{SerialPortBuilderExt, SerialStream};

/// How long `read_available` waits for the first byte before reporting an
/// empty buffer. Short enough to count as "what is buffered now", long
/// enough for the OS to surface bytes already on the wire.
const AVAILABLE_POLL: Duration = Duration::from_millis(50);

/// Serial port transport for peripheral communication.
///
/// Implements the [`Transport`] trait for USB virtual COM ports and
/// hardware UART connections, 8N1 framing.
pub struct SerialTransport {
    /// The underlying serial port stream; `None` after `close()`.
    port: Option<SerialStream>,
    /// Port name for logging/debugging
    port_name: String,
}

impl SerialTransport {
    /// Open a serial port at the given baud rate with 8N1 framing.
    ///
    /// # Arguments
    ///
    /// * `port` - Serial port path (e.g., "/dev/ttyUSB0" on Linux, "COM3"
    ///   on Windows)
    /// * `baud_rate` - Baud rate (e.g., 9600, 115200)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use periphlib_transport::SerialTransport;
    /// # async fn example() -> periphlib_core::Result<()> {
    /// let transport = SerialTransport::open("/dev/ttyUSB0", 9600).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open(port: &str, baud_rate: u32) -> Result<Self> {
        tracing::debug!(port = %port, baud_rate, "Opening serial port");

        let serial_stream = tokio_serial::new(port, baud_rate)
            .data_bits(tokio_serial::DataBits::Eight)
            .stop_bits(tokio_serial::StopBits::One)
            .parity(tokio_serial::Parity::None)
            .flow_control(tokio_serial::FlowControl::None)
            .open_native_async()
            .map_err(|e| {
                tracing::error!(port = %port, error = %e, "Failed to open serial port");
                Error::Transport(format!("Failed to open serial port {}: {}", port, e))
            })?;

        tracing::info!(port = %port, baud_rate, "Serial port opened");

        Ok(Self {
            port: Some(serial_stream),
            port_name: port.to_string(),
        })
    }

    /// Get the name of the serial port.
    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}

/// Map serial I/O failures: broken-pipe class errors mean the USB adapter
/// went away, everything else is a plain I/O error.
fn map_io_error(e: std::io::Error) -> Error {
    if e.kind() == std::io::ErrorKind::BrokenPipe || e.kind() == std::io::ErrorKind::NotConnected {
        Error::ConnectionLost
    } else {
        Error::Io(e)
    }
}

#[async_trait]
impl Transport for SerialTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;

        tracing::trace!(
            port = %self.port_name,
            bytes = data.len(),
            data = ?data,
            "Sending data"
        );

        if let Err(e) = port.write_all(data).await {
            tracing::error!(port = %self.port_name, error = %e, "Failed to send data");
            return Err(map_io_error(e));
        }

        // Flush so the command hits the wire before the settle wait starts.
        if let Err(e) = port.flush().await {
            tracing::error!(port = %self.port_name, error = %e, "Failed to flush serial port");
            return Err(map_io_error(e));
        }

        Ok(())
    }

    async fn read_available(&mut self, buf: &mut [u8]) -> Result<usize> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;

        match tokio::time::timeout(AVAILABLE_POLL, port.read(buf)).await {
            Ok(Ok(n)) => {
                tracing::trace!(
                    port = %self.port_name,
                    bytes = n,
                    data = ?&buf[..n],
                    "Drained buffered data"
                );
                Ok(n)
            }
            Ok(Err(e)) => {
                tracing::error!(port = %self.port_name, error = %e, "Failed to read data");
                Err(map_io_error(e))
            }
            // Nothing buffered. Not an error: the caller classifies an
            // empty reply window itself.
            Err(_) => Ok(0),
        }
    }

    async fn read_byte(&mut self) -> Result<u8> {
        let port = self.port.as_mut().ok_or(Error::NotConnected)?;

        // Blocks until the device yields a byte. No timeout by contract.
        match port.read_u8().await {
            Ok(b) => {
                tracing::trace!(port = %self.port_name, byte = b, "Read single byte");
                Ok(b)
            }
            Err(e) => {
                tracing::error!(port = %self.port_name, error = %e, "Failed to read byte");
                Err(map_io_error(e))
            }
        }
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(mut port) = self.port.take() {
            tracing::debug!(port = %self.port_name, "Closing serial port");

            if let Err(e) = port.flush().await {
                tracing::warn!(
                    port = %self.port_name,
                    error = %e,
                    "Failed to flush before closing (continuing anyway)"
                );
            }

            // The port is dropped here, which closes it.
            tracing::info!(port = %self.port_name, "Serial port closed");
        }

        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.port.is_some()
    }
}

impl Drop for SerialTransport {
    fn drop(&mut self) {
        if self.port.is_some() {
            tracing::debug!(port = %self.port_name, "SerialTransport dropped, closing port");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_nonexistent_port_fails() {
        let result = SerialTransport::open("/dev/definitely-not-a-port", 9600).await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
