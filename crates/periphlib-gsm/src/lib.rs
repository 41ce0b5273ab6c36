//! GSM/GPRS modem driver for periphlib.
//!
//! This crate implements the Hayes AT command protocol engine used to drive
//! commodity GSM/GPRS modem boards (SIM800/SIM900 class) over a serial
//! line. It provides:
//!
//! - **Wire codec** ([`protocol`]) -- CR-terminated command encoding, reply
//!   decoding, and the per-command-family reply grammar
//!   ([`ClassifiedReply`](protocol::ClassifiedReply)).
//! - **Command builders** ([`commands`]) -- construct correctly-formatted
//!   AT commands for the supported subset and parse the `+CSQ` signal
//!   report.
//! - **Engine** ([`modem`]) -- the [`GsmModem`] driver: half-duplex
//!   write/settle/drain exchanges, call-state tracking, and the SMS
//!   multi-step flow.
//! - **Builder** ([`builder`]) -- fluent [`GsmBuilder`] API.
//!
//! # The settle-interval heuristic
//!
//! AT replies carry no end-of-message marker, so the engine waits a fixed
//! interval after each write before draining the reply buffer -- exactly
//! once, with no retry. The interval is pluggable via
//! [`Delay`](periphlib_core::Delay).
//!
//! # Example
//!
//! ```
//! use periphlib_gsm::commands::cmd_signal_quality;
//! use periphlib_gsm::protocol::{decode_reply, classify_reply, ClassifiedReply, ReplyShape};
//!
//! // Build the signal-quality query
//! assert_eq!(cmd_signal_quality(), b"AT+CSQ\r");
//!
//! // Simulate a drained reply and classify it
//! let reply = decode_reply(b"AT+CSQ\r\r\n+CSQ: 22,0\r\n\r\nOK\r\n").unwrap();
//! match classify_reply(&reply, ReplyShape::Value) {
//!     ClassifiedReply::OkWithValue(v) => assert_eq!(v, "22"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod builder;
pub mod commands;
pub mod modem;
pub mod protocol;

// Re-export the primary types for ergonomic `use periphlib_gsm::*`.
pub use builder::GsmBuilder;
pub use commands::{SignalQuality, SignalReport};
pub use modem::{CallOutcome, CallStatus, GsmModem, SmsOutcome, SmsReadout, SmsStatus};
