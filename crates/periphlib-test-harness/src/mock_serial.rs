//! Mock transport for deterministic testing of the device drivers.
//!
//! [`MockTransport`] implements the [`Transport`] trait two ways at once:
//!
//! - **Request/response**: pre-load expectations with [`expect`]; when the
//!   driver sends the matching command, the paired reply becomes available
//!   to the next drain. This models the AT command engine's half-duplex
//!   exchanges.
//! - **Passive stream**: pre-load bytes with [`feed`]; drains and
//!   byte-at-a-time reads consume them in order. This models a GPS module
//!   emitting sentences unprompted, and an RFID reader emitting tag bytes.
//!
//! Every byte sent by the driver is also recorded in a log so tests can
//! assert on exact wire traffic -- including that an operation wrote
//! *nothing* (the `end_ongoing_call` no-call path).
//!
//! [`expect`]: MockTransport::expect
//! [`feed`]: MockTransport::feed
//!
//! # Example
//!
//! ```
//! use periphlib_test_harness::MockTransport;
//!
//! let mut mock = MockTransport::new();
//! // When the engine sends "AT\r", the next drain yields a healthy reply.
//! mock.expect(b"AT\r", b"AT\r\r\nOK\r\n");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;

use periphlib_core::delay::Delay;
use periphlib_core::error::{Error, Result};
use periphlib_core::transport::Transport;

/// A pre-loaded request/response pair for the mock transport.
#[derive(Debug, Clone)]
struct Expectation {
    /// The exact bytes we expect to be sent.
    request: Vec<u8>,
    /// The bytes made readable once the matching request is received.
    response: Vec<u8>,
}

/// A mock [`Transport`] for testing drivers without hardware.
///
/// Expectations are consumed in order. When `send()` is called, the sent
/// data is recorded and matched against the next expectation; the paired
/// response is appended to the incoming buffer, where `read_available()`
/// and `read_byte()` will find it. Bytes loaded with [`feed`](Self::feed)
/// are readable without any send.
///
/// If a send does not match the next expectation, or arrives when the
/// expectation queue is empty, an error is returned.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Ordered queue of expected request/response pairs.
    expectations: VecDeque<Expectation>,
    /// Bytes available to be read, in arrival order.
    incoming: VecDeque<u8>,
    /// Whether the transport is "connected".
    connected: bool,
    /// Log of all bytes sent through this transport, one entry per `send()`.
    sent_log: Vec<Vec<u8>>,
}

impl MockTransport {
    /// Create a new mock transport in the connected state.
    pub fn new() -> Self {
        MockTransport {
            expectations: VecDeque::new(),
            incoming: VecDeque::new(),
            connected: true,
            sent_log: Vec::new(),
        }
    }

    /// Add an expected request/response pair.
    ///
    /// When `send()` is called with data matching `request`, `response`
    /// becomes readable.
    pub fn expect(&mut self, request: &[u8], response: &[u8]) {
        self.expectations.push_back(Expectation {
            request: request.to_vec(),
            response: response.to_vec(),
        });
    }

    /// Make bytes readable without requiring any send.
    ///
    /// Use this for passive devices: NMEA sentence blocks for a GPS
    /// receiver, or a tag byte stream for an RFID reader.
    pub fn feed(&mut self, data: &[u8]) {
        self.incoming.extend(data.iter().copied());
    }

    /// Return all data that has been sent through this transport.
    ///
    /// Each element is the byte slice from one `send()` call.
    pub fn sent_data(&self) -> &[Vec<u8>] {
        &self.sent_log
    }

    /// Return the number of expectations that have not yet been consumed.
    pub fn remaining_expectations(&self) -> usize {
        self.expectations.len()
    }

    /// Return the number of fed/response bytes not yet read.
    pub fn unread_bytes(&self) -> usize {
        self.incoming.len()
    }

    /// Set the connected state of the mock transport.
    ///
    /// When set to `false`, subsequent I/O calls return
    /// [`Error::NotConnected`].
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, data: &[u8]) -> Result<()> {
        if !self.connected {
            return Err(Error::NotConnected);
        }

        // Record what was sent.
        self.sent_log.push(data.to_vec());

        // Match against the next expectation.
        if let Some(expectation) = self.expectations.pop_front() {
            if data != expectation.request.as_slice() {
                return Err(Error::Protocol(format!(
                    "unexpected send data: expected {:02X?}, got {:02X?}",
                    expectation.request, data
                )));
            }
            self.incoming.extend(expectation.response.iter().copied());
            Ok(())
        } else {
            Err(Error::Protocol(
                "no more expectations in mock transport".into(),
            ))
        }
    }

    async fn read_available(&mut self, buf: &mut [u8]) -> Result<usize> {
        if !self.connected {
            return Err(Error::NotConnected);
        }

        // Drain whatever is queued, up to the buffer size. An empty queue
        // is a zero-byte read, matching the available-only contract.
        let n = buf.len().min(self.incoming.len());
        for slot in buf.iter_mut().take(n) {
            *slot = self.incoming.pop_front().expect("length checked above");
        }
        Ok(n)
    }

    async fn read_byte(&mut self) -> Result<u8> {
        if !self.connected {
            return Err(Error::NotConnected);
        }

        // The real transport would block forever here. Erroring instead
        // keeps test runs finite while still guaranteeing that a stalled
        // stream can never produce a short read.
        self.incoming
            .pop_front()
            .ok_or_else(|| Error::Transport("mock byte stream exhausted".into()))
    }

    async fn close(&mut self) -> Result<()> {
        self.connected = false;
        self.incoming.clear();
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

/// A [`Delay`] that returns immediately.
///
/// Substituted for the default settle-interval hook in driver tests so the
/// fixed 1-10 second waits do not slow the suite down.
pub struct InstantDelay;

#[async_trait]
impl Delay for InstantDelay {
    async fn delay(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use periphlib_core::transport::Transport;

    #[tokio::test]
    async fn basic_send_receive() {
        let mut mock = MockTransport::new();
        let request = b"AT\r";
        let response = b"AT\r\r\nOK\r\n";

        mock.expect(request, response);

        mock.send(request).await.unwrap();

        let mut buf = [0u8; 64];
        let n = mock.read_available(&mut buf).await.unwrap();

        assert_eq!(n, response.len());
        assert_eq!(&buf[..n], response);
    }

    #[tokio::test]
    async fn tracks_sent_data() {
        let mut mock = MockTransport::new();
        let req1 = b"AT\r";
        let req2 = b"ATH\r";

        mock.expect(req1, b"OK");
        mock.expect(req2, b"OK");

        mock.send(req1).await.unwrap();
        mock.send(req2).await.unwrap();

        assert_eq!(mock.sent_data().len(), 2);
        assert_eq!(mock.sent_data()[0], req1);
        assert_eq!(mock.sent_data()[1], req2);
    }

    #[tokio::test]
    async fn wrong_data_errors() {
        let mut mock = MockTransport::new();
        mock.expect(b"AT\r", b"OK");

        let result = mock.send(b"ATH\r").await;
        assert!(matches!(result.unwrap_err(), Error::Protocol(_)));
    }

    #[tokio::test]
    async fn no_expectations_errors() {
        let mut mock = MockTransport::new();

        let result = mock.send(b"AT\r").await;
        assert!(matches!(result.unwrap_err(), Error::Protocol(_)));
    }

    #[tokio::test]
    async fn read_without_data_returns_zero() {
        let mut mock = MockTransport::new();
        let mut buf = [0u8; 64];

        let n = mock.read_available(&mut buf).await.unwrap();
        assert_eq!(n, 0);
    }

    #[tokio::test]
    async fn fed_bytes_readable_without_send() {
        let mut mock = MockTransport::new();
        mock.feed(b"$GPGGA,123519\r\n");

        let mut buf = [0u8; 64];
        let n = mock.read_available(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"$GPGGA,123519\r\n");
        assert!(mock.sent_data().is_empty());
    }

    #[tokio::test]
    async fn read_byte_consumes_one_at_a_time() {
        let mut mock = MockTransport::new();
        mock.feed(b"AB");

        assert_eq!(mock.read_byte().await.unwrap(), b'A');
        assert_eq!(mock.read_byte().await.unwrap(), b'B');
        assert!(mock.read_byte().await.is_err());
    }

    #[tokio::test]
    async fn partial_read_leaves_remainder() {
        let mut mock = MockTransport::new();
        mock.feed(b"ABCD");

        let mut buf = [0u8; 2];
        let n = mock.read_available(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"AB");
        assert_eq!(mock.unread_bytes(), 2);

        let n = mock.read_available(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], b"CD");
        assert_eq!(mock.unread_bytes(), 0);
    }

    #[tokio::test]
    async fn disconnect() {
        let mut mock = MockTransport::new();
        assert!(mock.is_connected());

        mock.close().await.unwrap();
        assert!(!mock.is_connected());

        let result = mock.send(b"AT\r").await;
        assert!(matches!(result.unwrap_err(), Error::NotConnected));
    }

    #[tokio::test]
    async fn set_connected() {
        let mut mock = MockTransport::new();
        mock.set_connected(false);
        assert!(!mock.is_connected());

        let mut buf = [0u8; 8];
        let result = mock.read_available(&mut buf).await;
        assert!(matches!(result.unwrap_err(), Error::NotConnected));

        let result = mock.read_byte().await;
        assert!(matches!(result.unwrap_err(), Error::NotConnected));
    }

    #[tokio::test]
    async fn remaining_expectations_counts_down() {
        let mut mock = MockTransport::new();
        mock.expect(b"AT\r", b"OK");
        mock.expect(b"ATH\r", b"OK");
        assert_eq!(mock.remaining_expectations(), 2);

        mock.send(b"AT\r").await.unwrap();
        assert_eq!(mock.remaining_expectations(), 1);

        mock.send(b"ATH\r").await.unwrap();
        assert_eq!(mock.remaining_expectations(), 0);
    }
}
