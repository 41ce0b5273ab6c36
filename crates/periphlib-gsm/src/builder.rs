//! `GsmBuilder` -- fluent builder for constructing [`GsmModem`] instances.
//!
//! Separates configuration from construction so that callers can set up
//! serial port parameters, the settle interval, and the delay hook before
//! establishing the transport connection.
//!
//! # Example
//!
//! ```no_run
//! use periphlib_gsm::builder::GsmBuilder;
//! use std::time::Duration;
//!
//! # async fn example() -> periphlib_core::Result<()> {
//! let modem = GsmBuilder::new()
//!     .serial_port("/dev/ttyUSB1")
//!     .baud_rate(115_200)
//!     .settle_interval(Duration::from_millis(500))
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use periphlib_core::delay::Delay;
use periphlib_core::error::{Error, Result};
use periphlib_core::transport::Transport;

use crate::modem::{GsmModem, DEFAULT_SETTLE};

/// Default baud rate for GSM/GPRS modem boards.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Fluent builder for [`GsmModem`].
pub struct GsmBuilder {
    serial_port: Option<String>,
    baud_rate: u32,
    settle: Duration,
    delay: Option<Box<dyn Delay>>,
}

impl GsmBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        GsmBuilder {
            serial_port: None,
            baud_rate: DEFAULT_BAUD_RATE,
            settle: DEFAULT_SETTLE,
            delay: None,
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

    /// Set the default settle interval between a command write and the
    /// reply drain (default: 1 second). SMS exchanges use their own longer
    /// settle times regardless of this value.
    pub fn settle_interval(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Substitute the settle-wait implementation.
    ///
    /// Tests pass a no-op delay; production code can pass a read-until-idle
    /// strategy without changing any operation contracts.
    pub fn delay_hook(mut self, delay: Box<dyn Delay>) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Build a [`GsmModem`] with a caller-provided transport.
    ///
    /// This is the primary entry point for testing (pass a `MockTransport`
    /// from `periphlib-test-harness`) and for advanced use cases where the
    /// caller manages the transport lifecycle directly.
    pub async fn build_with_transport(self, transport: Box<dyn Transport>) -> Result<GsmModem> {
        if self.settle.is_zero() {
            return Err(Error::InvalidParameter(
                "settle interval must be non-zero".into(),
            ));
        }

        Ok(GsmModem::new(transport, self.delay, self.settle))
    }

    /// Build a [`GsmModem`] using a serial transport.
    ///
    /// Requires that [`serial_port()`](Self::serial_port) has been called.
    pub async fn build(self) -> Result<GsmModem> {
        let port = self
            .serial_port
            .as_ref()
            .ok_or_else(|| Error::InvalidParameter("serial_port is required for build()".into()))?;

        let transport = periphlib_transport::SerialTransport::open(port, self.baud_rate).await?;
        self.build_with_transport(Box::new(transport)).await
    }
}

impl Default for GsmBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modem::EnginePhase;
    use periphlib_test_harness::MockTransport;

    #[tokio::test]
    async fn builder_defaults() {
        let mock = MockTransport::new();
        let modem = GsmBuilder::new()
            .build_with_transport(Box::new(mock))
            .await
            .unwrap();

        assert!(!modem.ongoing_call());
        assert_eq!(modem.phase(), EnginePhase::Idle);
    }

    #[tokio::test]
    async fn builder_fluent_chain() {
        let mock = MockTransport::new();
        let modem = GsmBuilder::new()
            .serial_port("/dev/ttyUSB1")
            .baud_rate(115_200)
            .settle_interval(Duration::from_millis(500))
            .build_with_transport(Box::new(mock))
            .await
            .unwrap();

        assert!(!modem.ongoing_call());
    }

    #[tokio::test]
    async fn builder_rejects_zero_settle() {
        let mock = MockTransport::new();
        let result = GsmBuilder::new()
            .settle_interval(Duration::ZERO)
            .build_with_transport(Box::new(mock))
            .await;

        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[tokio::test]
    async fn builder_serial_port_required_for_build() {
        let result = GsmBuilder::new().build().await;
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }
}
