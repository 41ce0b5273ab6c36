//! periphlib-core: Core traits, types, and error definitions for periphlib.
//!
//! This crate defines the device-agnostic abstractions that all periphlib
//! drivers build on. Applications depend on these types without pulling in
//! any specific device driver.
//!
//! # Key types
//!
//! - [`Transport`] -- byte-level communication channel
//! - [`Delay`] -- pluggable settle-interval hook
//! - [`Error`] / [`Result`] -- error handling
//! - [`sentence`] -- line/field framing for comma-delimited text sentences

pub mod delay;
pub mod error;
pub mod sentence;
pub mod transport;

// Re-export key types at crate root for ergonomic `use periphlib_core::*`.
pub use delay::{Delay, TokioDelay};
pub use error::{Error, Result};
pub use transport::Transport;
