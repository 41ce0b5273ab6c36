//! # periphlib -- Async Drivers for Embedded Serial Peripherals
//!
//! `periphlib` is an asynchronous Rust library for driving the commodity
//! serial peripherals found on hobbyist and embedded boards: NMEA GPS
//! modules, GSM/GPRS modems, and fixed-length RFID tag readers. It is
//! designed for telemetry daemons, access-control boxes, and field
//! equipment where a small device needs reliable serial device control.
//!
//! ## Quick Start
//!
//! Add `periphlib` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! periphlib = { version = "0.1", features = ["gps"] }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! Connect to a GPS module and read a position:
//!
//! ```no_run
//! use periphlib::gps::GpsBuilder;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut gps = GpsBuilder::new()
//!         .serial_port("/dev/ttyUSB0")
//!         .build()
//!         .await?;
//!
//!     match gps.lat_long().await? {
//!         Some((lat, long)) => println!("position: {lat}, {long}"),
//!         None => println!("no fix sentence in this window, try again"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized as a workspace of focused crates:
//!
//! | Crate                    | Purpose                                      |
//! |--------------------------|----------------------------------------------|
//! | `periphlib-core`         | [`Transport`]/[`Delay`] traits, errors, sentence framing |
//! | `periphlib-transport`    | Serial transport over `tokio-serial`         |
//! | `periphlib-gps`          | NMEA `$GPGGA` fix decoder and receiver driver |
//! | `periphlib-gsm`          | Hayes AT command engine for GSM/GPRS modems  |
//! | `periphlib-rfid`         | Fixed-length RFID tag reader driver          |
//! | `periphlib-test-harness` | `MockTransport` for hardware-free testing    |
//! | **`periphlib`**          | This facade crate -- re-exports everything   |
//!
//! All drivers speak to their hardware through the [`Transport`] trait, so
//! tests substitute a mock and applications can supply their own transport.
//!
//! ## Feature Flags
//!
//! Each device backend is gated behind a feature flag:
//!
//! | Feature | Enables                              | Default |
//! |---------|--------------------------------------|---------|
//! | `gps`   | [`gps`] module (NMEA receiver)       | yes     |
//! | `gsm`   | [`gsm`] module (AT command modem)    | yes     |
//! | `rfid`  | [`rfid`] module (tag reader)         | yes     |
//! | `full`  | All device backends                  | no      |
//!
//! ## Device Interaction Styles
//!
//! The three devices span the three serial interaction styles:
//!
//! - **Passive line-framed** (GPS): the device emits continuously, the
//!   driver reads a bounded window and searches it. Absence of data is an
//!   ordinary outcome (`Ok(None)`), never an error.
//! - **Command/response** (GSM): half-duplex write/settle/drain exchanges
//!   with substring-based success detection, since AT replies carry no
//!   end-of-message marker.
//! - **Passive fixed-length** (RFID): twelve blocking single-byte reads
//!   per tag, all-or-nothing.

pub use periphlib_core::*;

/// NMEA GPS receiver backend.
///
/// Provides [`GpsReceiver`](gps::GpsReceiver) and
/// [`GpsBuilder`](gps::GpsBuilder) for reading `$GPGGA` fix data from
/// serial GPS modules. The module is a pure emitter; each accessor reads
/// one bounded window and returns `Ok(None)` when no valid sentence is
/// present.
#[cfg(feature = "gps")]
pub mod gps {
    pub use periphlib_gps::*;
}

/// GSM/GPRS modem backend.
///
/// Provides [`GsmModem`](gsm::GsmModem) and [`GsmBuilder`](gsm::GsmBuilder)
/// for driving SIM800/SIM900-class modems over the Hayes AT command
/// protocol: status queries, voice call control, and text-mode SMS.
#[cfg(feature = "gsm")]
pub mod gsm {
    pub use periphlib_gsm::*;
}

/// RFID tag reader backend.
///
/// Provides [`RfidReader`](rfid::RfidReader) and
/// [`RfidBuilder`](rfid::RfidBuilder) for EM4100-class fixed-length tag
/// readers emitting twelve ASCII characters per presentation.
#[cfg(feature = "rfid")]
pub mod rfid {
    pub use periphlib_rfid::*;
}
