//! RFID tag reader driver for periphlib.
//!
//! Drives EM4100-class fixed-length RFID readers: a tag presentation emits
//! exactly twelve ASCII characters over the serial line, with no framing
//! beyond the fixed length. The reader is passive and is never written to.
//!
//! - **Driver** ([`reader`]) -- the [`RfidReader`]: twelve blocking
//!   single-byte reads per tag, all-or-nothing.
//! - **Builder** ([`builder`]) -- fluent [`RfidBuilder`] API.

pub mod builder;
pub mod reader;

// Re-export the primary types for ergonomic `use periphlib_rfid::*`.
pub use builder::RfidBuilder;
pub use reader::{RfidReader, TAG_LENGTH};
