//! GPS receiver driver for periphlib.
//!
//! This crate decodes NMEA-0183 `$GPGGA` fix sentences from a serial GPS
//! module (NEO-6M class). The module is a pure emitter: it is never written
//! to, and this driver never configures it. It provides:
//!
//! - **Sentence decoding** ([`nmea`]) -- pure field parsers for the 15-field
//!   `$GPGGA` layout, including the compatibility transforms for
//!   latitude/longitude and time documented there.
//! - **Driver** ([`receiver`]) -- the [`GpsReceiver`]: one bounded read
//!   window per accessor, `Ok(None)` when the window holds no valid
//!   sentence.
//! - **Builder** ([`builder`]) -- fluent [`GpsBuilder`] API.
//!
//! # Example
//!
//! ```
//! use periphlib_core::sentence::{frame_lines, find_sentence};
//! use periphlib_gps::nmea::{parse_lat_long, GGA_TAG, GGA_FIELD_COUNT};
//!
//! let window = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,\r\n";
//! let lines = frame_lines(window).unwrap();
//! let fields = find_sentence(&lines, GGA_TAG, GGA_FIELD_COUNT).unwrap();
//! let (lat, long) = parse_lat_long(&fields).unwrap();
//! assert!((lat - 48.07038).abs() < 1e-9);
//! assert!((long - 11.31).abs() < 1e-9);
//! ```

pub mod builder;
pub mod nmea;
pub mod receiver;

// Re-export the primary types for ergonomic `use periphlib_gps::*`.
pub use builder::GpsBuilder;
pub use nmea::{FixQuality, FixRecord};
pub use receiver::GpsReceiver;
