//! `RfidReader` -- fixed-length tag reader driver.
//!
//! EM4100-class 125 kHz RFID readers emit exactly twelve ASCII characters
//! per tag presentation and carry no framing beyond that fixed length.
//! There is no sentence tag to search for and no terminator to split on,
//! so this driver reads byte-at-a-time: twelve blocking reads, each
//! returning only when a byte has actually arrived.
//!
//! That shape makes [`tag_id`](RfidReader::tag_id) an all-or-nothing
//! operation. It blocks until a tag is presented, and a stalled stream can
//! never produce a short identifier -- the call simply does not return
//! until all twelve characters are in (or the transport fails).

use tracing::trace;

use periphlib_core::error::{Error, Result};
use periphlib_core::transport::Transport;

/// Every tag identifier is exactly this many ASCII characters.
pub const TAG_LENGTH: usize = 12;

/// A connected fixed-length RFID tag reader.
///
/// Constructed via [`RfidBuilder`](crate::builder::RfidBuilder).
pub struct RfidReader {
    transport: Box<dyn Transport>,
}

impl RfidReader {
    pub(crate) fn new(transport: Box<dyn Transport>) -> Self {
        RfidReader { transport }
    }

    /// Close the underlying transport.
    pub async fn close(&mut self) -> Result<()> {
        self.transport.close().await
    }

    /// Block until a tag is presented and return its twelve-character
    /// identifier.
    ///
    /// Performs exactly [`TAG_LENGTH`] single-byte reads. Bytes that are
    /// not ASCII are rejected with [`Error::Decode`] -- a corrupted stream
    /// must never masquerade as a valid tag.
    pub async fn tag_id(&mut self) -> Result<String> {
        let mut id = String::with_capacity(TAG_LENGTH);
        for _ in 0..TAG_LENGTH {
            let byte = self.transport.read_byte().await?;
            if !byte.is_ascii() {
                return Err(Error::Decode(format!(
                    "non-ASCII byte 0x{byte:02X} in tag stream"
                )));
            }
            id.push(byte as char);
        }
        trace!(tag = %id, "tag read");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RfidBuilder;
    use periphlib_test_harness::MockTransport;

    async fn reader_with(mock: MockTransport) -> RfidReader {
        RfidBuilder::new()
            .build_with_transport(Box::new(mock))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn reads_twelve_character_tag() {
        let mut mock = MockTransport::new();
        mock.feed(b"A1B2C3D4E5F6");
        let mut reader = reader_with(mock).await;

        assert_eq!(reader.tag_id().await.unwrap(), "A1B2C3D4E5F6");
    }

    #[tokio::test]
    async fn consecutive_presentations_read_in_order() {
        let mut mock = MockTransport::new();
        mock.feed(b"A1B2C3D4E5F6");
        mock.feed(b"0011223344FF");
        let mut reader = reader_with(mock).await;

        assert_eq!(reader.tag_id().await.unwrap(), "A1B2C3D4E5F6");
        assert_eq!(reader.tag_id().await.unwrap(), "0011223344FF");
    }

    #[tokio::test]
    async fn stalled_stream_never_yields_short_id() {
        // Eleven bytes available, then the stream stalls. The mock turns
        // the real transport's indefinite block into an error, so the
        // observable guarantee is the same: no partial identifier.
        let mut mock = MockTransport::new();
        mock.feed(b"A1B2C3D4E5F");
        let mut reader = reader_with(mock).await;

        assert!(matches!(
            reader.tag_id().await.unwrap_err(),
            Error::Transport(_)
        ));
    }

    #[tokio::test]
    async fn non_ascii_byte_is_decode_error() {
        let mut mock = MockTransport::new();
        mock.feed(b"A1B2C3");
        mock.feed(&[0xFF]);
        mock.feed(b"D4E5F");
        let mut reader = reader_with(mock).await;

        assert!(matches!(
            reader.tag_id().await.unwrap_err(),
            Error::Decode(_)
        ));
    }

    #[tokio::test]
    async fn reader_never_writes() {
        // The mock has no expectations loaded, so any send would have
        // failed the read below.
        let mut mock = MockTransport::new();
        mock.feed(b"A1B2C3D4E5F6");
        let mut reader = reader_with(mock).await;

        reader.tag_id().await.unwrap();
    }
}
