//! Transport implementations for periphlib.
//!
//! This crate provides the concrete implementation of the
//! [`Transport`](periphlib_core::Transport) trait from `periphlib-core` for
//! serial connections:
//!
//! - [`SerialTransport`]: USB virtual COM ports and hardware UART pins
//!   (`/dev/ttyUSB0`, `/dev/serial0`, `COM3`, ...)
//!
//! # Example
//!
//! ```no_run
//! use periphlib_transport::SerialTransport;
//! use periphlib_core::transport::Transport;
//!
//! # async fn example() -> periphlib_core::Result<()> {
//! // GPS modules typically talk at 9600 baud.
//! let mut transport = SerialTransport::open("/dev/ttyUSB0", 9600).await?;
//!
//! // Read whatever sentences have arrived so far.
//! let mut buf = [0u8; 500];
//! let n = transport.read_available(&mut buf).await?;
//! # Ok(())
//! # }
//! ```

pub mod serial;

pub use serial::SerialTransport;
