//! Error types for periphlib.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Transport-layer and protocol-layer
//! failures are both captured here.
//!
//! Note the deliberate split between errors and absences: a port that cannot
//! be opened or a reply that is not valid text is an `Err`; a read window
//! that simply did not contain the expected sentence is `Ok(None)` at the
//! driver level, because the caller is expected to re-invoke rather than
//! abort.

/// The error type for all periphlib operations.
///
/// Variants cover the failure modes encountered when talking to serial
/// peripherals: physical transport failures, decode failures on non-text
/// bytes, and malformed protocol data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transport-level error (serial port unavailable, write failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// A protocol-level error (malformed field in an otherwise matched
    /// sentence or reply).
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Received bytes that could not be decoded as text.
    ///
    /// Raw reply buffers and sentence blocks are expected to be UTF-8
    /// (in practice, plain ASCII). Binary garbage on the line surfaces
    /// here rather than being silently truncated.
    #[error("decode error: {0}")]
    Decode(String),

    /// An invalid parameter was passed to a driver or builder.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No connection to the device has been established.
    #[error("not connected")]
    NotConnected,

    /// The connection to the device was lost unexpectedly.
    #[error("connection lost")]
    ConnectionLost,

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_transport() {
        let e = Error::Transport("port busy".into());
        assert_eq!(e.to_string(), "transport error: port busy");
    }

    #[test]
    fn error_display_protocol() {
        let e = Error::Protocol("non-numeric satellite count".into());
        assert_eq!(e.to_string(), "protocol error: non-numeric satellite count");
    }

    #[test]
    fn error_display_decode() {
        let e = Error::Decode("invalid utf-8 at byte 3".into());
        assert_eq!(e.to_string(), "decode error: invalid utf-8 at byte 3");
    }

    #[test]
    fn error_display_invalid_parameter() {
        let e = Error::InvalidParameter("serial_port is required".into());
        assert_eq!(e.to_string(), "invalid parameter: serial_port is required");
    }

    #[test]
    fn error_display_not_connected() {
        let e = Error::NotConnected;
        assert_eq!(e.to_string(), "not connected");
    }

    #[test]
    fn error_display_connection_lost() {
        let e = Error::ConnectionLost;
        assert_eq!(e.to_string(), "connection lost");
    }

    #[test]
    fn error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
    }
}
