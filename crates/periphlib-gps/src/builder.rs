//! `GpsBuilder` -- fluent builder for constructing [`GpsReceiver`] instances.
//!
//! # Example
//!
//! ```no_run
//! use periphlib_gps::builder::GpsBuilder;
//!
//! # async fn example() -> periphlib_core::Result<()> {
//! let gps = GpsBuilder::new()
//!     .serial_port("/dev/ttyUSB0")
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use periphlib_core::error::{Error, Result};
use periphlib_core::transport::Transport;

use crate::receiver::GpsReceiver;

/// Default baud rate for NMEA output. 9600 is the NMEA-0183 standard rate
/// and what nearly every hobbyist GPS module ships configured for.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Fluent builder for [`GpsReceiver`].
pub struct GpsBuilder {
    serial_port: Option<String>,
    baud_rate: u32,
}

impl GpsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        GpsBuilder {
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

    /// Build a [`GpsReceiver`] with a caller-provided transport.
    ///
    /// This is the primary entry point for testing (pass a `MockTransport`
    /// from `periphlib-test-harness`).
    pub async fn build_with_transport(self, transport: Box<dyn Transport>) -> Result<GpsReceiver> {
        Ok(GpsReceiver::new(transport))
    }

    /// Build a [`GpsReceiver`] using a serial transport.
    ///
    /// Requires that [`serial_port()`](Self::serial_port) has been called.
    pub async fn build(self) -> Result<GpsReceiver> {
        let port = self
            .serial_port
            .as_ref()
            .ok_or_else(|| Error::InvalidParameter("serial_port is required for build()".into()))?;

        let transport = periphlib_transport::SerialTransport::open(port, self.baud_rate).await?;
        self.build_with_transport(Box::new(transport)).await
    }
}

impl Default for GpsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
