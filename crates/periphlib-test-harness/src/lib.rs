//! periphlib-test-harness: Test utilities and mock transports for periphlib.
//!
//! This crate provides [`MockTransport`] for deterministic unit testing of
//! the device drivers without real hardware, and [`InstantDelay`] so engine
//! tests skip the settle intervals entirely.

pub mod mock_serial;

pub use mock_serial::{InstantDelay, MockTransport};
