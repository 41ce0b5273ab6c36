//! `RfidBuilder` -- fluent builder for constructing [`RfidReader`] instances.
//!
//! # Example
//!
//! ```no_run
//! use periphlib_rfid::builder::RfidBuilder;
//!
//! # async fn example() -> periphlib_core::Result<()> {
//! let reader = RfidBuilder::new()
//!     .serial_port("/dev/ttyUSB0")
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use periphlib_core::error::{Error, Result};
use periphlib_core::transport::Transport;

use crate::reader::RfidReader;

/// Default baud rate. EM4100-class reader boards ship at 9600.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Fluent builder for [`RfidReader`].
pub struct RfidBuilder {
    serial_port: Option<String>,
    baud_rate: u32,
}

impl RfidBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        RfidBuilder {
            serial_port: None,
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }

    /// Set the serial port path (e.g. `/dev/ttyUSB0` or `COM3`).
    pub fn serial_port(mut self, port: &str) -> Self {
        self.serial_port = Some(port.to_string());
        self
    }

    /// Override the default baud rate (9600).
    pub fn baud_rate(mut self, baud: u32) -> Self {
        self.baud_rate = baud;
        self
    }

    /// Build an [`RfidReader`] with a caller-provided transport.
    pub async fn build_with_transport(self, transport: Box<dyn Transport>) -> Result<RfidReader> {
        Ok(RfidReader::new(transport))
    }

    /// Build an [`RfidReader`] using a serial transport.
    ///
    /// Requires that [`serial_port()`](Self::serial_port) has been called.
    pub async fn build(self) -> Result<RfidReader> {
        let port = self
            .serial_port
            .as_ref()
            .ok_or_else(|| Error::InvalidParameter("serial_port is required for build()".into()))?;

        let transport = periphlib_transport::SerialTransport::open(port, self.baud_rate).await?;
        self.build_with_transport(Box::new(transport)).await
    }
}

impl Default for RfidBuilder {
    fn default() -> Self {
        Self::new()
    }
}
