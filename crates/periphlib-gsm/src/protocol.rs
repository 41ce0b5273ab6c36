//! AT command wire format: encoding and reply decoding.
//!
//! Hayes-style AT commands are ASCII command bodies terminated with a
//! carriage return. The modem's reply is free-form text: usually an echo of
//! the command, zero or more information lines, and a final result token.
//! The only success signal this protocol family offers is the literal
//! substring `OK` somewhere in the reply -- there is no framing, no length
//! prefix, and no per-command terminator. That fragility is inherited here
//! deliberately; re-engineering the modem's wire format is not an option.
//!
//! # Reply grammar
//!
//! Rather than scattering ad-hoc string searches through the driver, each
//! command family declares the [`ReplyShape`] it expects and gets back a
//! [`ClassifiedReply`]:
//!
//! - `OkWithLines` -- identity queries (`AT+CGMI`, `AT+CGSN`, ...), where
//!   the payload is a line of the echo-split reply.
//! - `OkWithValue` -- the `+CSQ: 22,0` shape, where the payload is the
//!   token between the first `:` and the following `,`.
//! - `Failure` -- no `OK` marker anywhere in the reply.
//!
//! All functions here are pure; the engine in [`crate::modem`] does the I/O.

use std::collections::HashMap;

use bytes::{BufMut, BytesMut};
use periphlib_core::error::{Error, Result};

/// Every AT command is terminated with a carriage return.
pub const TERMINATOR: u8 = b'\r';

/// Ctrl-Z, the control byte that terminates an SMS message body.
pub const CTRL_Z: u8 = 0x1A;

/// The modem's sole success marker.
pub const OK_MARKER: &str = "OK";

/// Encode an AT command body into raw bytes ready for transmission.
///
/// Appends the carriage-return terminator.
///
/// # Example
///
/// ```
/// use periphlib_gsm::protocol::encode_command;
///
/// assert_eq!(encode_command("AT"), b"AT\r");
/// assert_eq!(encode_command("AT+CSQ"), b"AT+CSQ\r");
/// ```
pub fn encode_command(body: &str) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(body.len() + 1);
    buf.put_slice(body.as_bytes());
    buf.put_u8(TERMINATOR);
    buf.to_vec()
}

/// A decoded modem reply.
///
/// Produced from the single drain that follows a command's settle interval.
/// `lines` preserves empty segments from the `\r\n` split, so line indices
/// match the raw wire layout (line 0 is typically the command echo, line 1
/// the first information line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtReply {
    /// The full decoded reply text.
    pub raw: String,
    /// Whether the literal token `OK` appears anywhere in `raw`.
    pub ok: bool,
    /// The reply split on `\r\n`, empties preserved.
    pub lines: Vec<String>,
    /// `key: value` pairs extracted from lines containing a colon
    /// (e.g. `+CSQ` -> `22,0`).
    pub fields: HashMap<String, String>,
}

impl AtReply {
    /// The second line of the reply, the usual position of an information
    /// payload after the command echo.
    pub fn info_line(&self) -> Option<&str> {
        self.lines.get(1).map(String::as_str)
    }

    /// The token between the first `:` and the following `,`, trimmed.
    ///
    /// For `AT+CSQ\r\r\n+CSQ: 22,0\r\n\r\nOK\r\n` this is `"22"`. Returns
    /// `None` when the reply has no such shape.
    pub fn value_field(&self) -> Option<String> {
        let head = self.raw.split(',').next()?;
        let value = head.split(':').nth(1)?;
        Some(value.trim().to_string())
    }
}

/// Decode a drained reply buffer into an [`AtReply`].
///
/// Non-UTF-8 bytes are a [`Error::Decode`]; the modem speaks ASCII and
/// binary garbage indicates line trouble, not a reply to classify.
pub fn decode_reply(raw: &[u8]) -> Result<AtReply> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| Error::Decode(format!("modem reply is not valid UTF-8: {e}")))?;

    let raw = text.to_string();
    let ok = raw.contains(OK_MARKER);
    let lines: Vec<String> = raw.split("\r\n").map(str::to_string).collect();

    let mut fields = HashMap::new();
    for line in &lines {
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(AtReply {
        raw,
        ok,
        lines,
        fields,
    })
}

/// The reply shape a command family expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyShape {
    /// Payload is a line of the echo-split reply (identity queries).
    Lines,
    /// Payload is a `<key>: <value>,...` field (`AT+CSQ`).
    Value,
}

/// A reply classified against its command family's grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedReply {
    /// `OK` present; payload is the echo-split lines.
    OkWithLines(Vec<String>),
    /// `OK` present; payload is the extracted colon/comma value.
    OkWithValue(String),
    /// No `OK` marker (or, for [`ReplyShape::Value`], no extractable
    /// value). The raw reply is carried for diagnostics.
    Failure(String),
}

/// Classify a decoded reply against the expected [`ReplyShape`].
///
/// # Example
///
/// ```
/// use periphlib_gsm::protocol::{classify_reply, decode_reply, ClassifiedReply, ReplyShape};
///
/// let reply = decode_reply(b"AT+CSQ\r\r\n+CSQ: 22,0\r\n\r\nOK\r\n").unwrap();
/// match classify_reply(&reply, ReplyShape::Value) {
///     ClassifiedReply::OkWithValue(v) => assert_eq!(v, "22"),
///     other => panic!("expected OkWithValue, got {other:?}"),
/// }
/// ```
pub fn classify_reply(reply: &AtReply, shape: ReplyShape) -> ClassifiedReply {
    if !reply.ok {
        return ClassifiedReply::Failure(reply.raw.clone());
    }

    match shape {
        ReplyShape::Lines => ClassifiedReply::OkWithLines(reply.lines.clone()),
        ReplyShape::Value => match reply.value_field() {
            Some(value) => ClassifiedReply::OkWithValue(value),
            None => ClassifiedReply::Failure(reply.raw.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // Command encoding
    // ---------------------------------------------------------------

    #[test]
    fn encode_attention() {
        assert_eq!(encode_command("AT"), b"AT\r");
    }

    #[test]
    fn encode_with_parameters() {
        assert_eq!(encode_command("ATD5551234;"), b"ATD5551234;\r");
        assert_eq!(encode_command("AT+CMGS=\"5551234\""), b"AT+CMGS=\"5551234\"\r");
    }

    // ---------------------------------------------------------------
    // Reply decoding
    // ---------------------------------------------------------------

    #[test]
    fn decode_ok_reply() {
        let reply = decode_reply(b"AT\r\r\nOK\r\n").unwrap();
        assert!(reply.ok);
        assert_eq!(reply.raw, "AT\r\r\nOK\r\n");
    }

    #[test]
    fn decode_reply_without_ok() {
        let reply = decode_reply(b"AT\r\r\nERROR\r\n").unwrap();
        assert!(!reply.ok);
    }

    #[test]
    fn decode_near_miss_is_not_ok() {
        // No "OK" substring anywhere -- "0K" is a zero, not an oh.
        let reply = decode_reply(b"AT\r\r\n0K\r\n").unwrap();
        assert!(!reply.ok);
    }

    #[test]
    fn decode_ok_embedded_in_token_matches() {
        // Substring match is the protocol's contract, warts and all.
        let reply = decode_reply(b"BROKEN\r\n").unwrap();
        assert!(reply.ok);
    }

    #[test]
    fn decode_lines_preserve_empties() {
        let reply = decode_reply(b"AT+CGMI\r\r\nQUALCOMM\r\n\r\nOK\r\n").unwrap();
        assert_eq!(
            reply.lines,
            vec!["AT+CGMI\r", "QUALCOMM", "", "OK", ""]
        );
        assert_eq!(reply.info_line(), Some("QUALCOMM"));
    }

    #[test]
    fn decode_fields_map() {
        let reply = decode_reply(b"AT+CSQ\r\r\n+CSQ: 22,0\r\n\r\nOK\r\n").unwrap();
        assert_eq!(reply.fields.get("+CSQ").map(String::as_str), Some("22,0"));
    }

    #[test]
    fn decode_empty_drain() {
        let reply = decode_reply(b"").unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.raw, "");
    }

    #[test]
    fn decode_rejects_non_utf8() {
        let result = decode_reply(&[0x41, 0xFF, 0xFE]);
        assert!(matches!(
            result.unwrap_err(),
            periphlib_core::Error::Decode(_)
        ));
    }

    // ---------------------------------------------------------------
    // Value extraction
    // ---------------------------------------------------------------

    #[test]
    fn value_field_csq() {
        let reply = decode_reply(b"AT+CSQ\r\r\n+CSQ: 22,0\r\n\r\nOK\r\n").unwrap();
        assert_eq!(reply.value_field(), Some("22".to_string()));
    }

    #[test]
    fn value_field_absent_without_colon() {
        let reply = decode_reply(b"AT\r\r\nOK\r\n").unwrap();
        assert_eq!(reply.value_field(), None);
    }

    // ---------------------------------------------------------------
    // Classification
    // ---------------------------------------------------------------

    #[test]
    fn classify_value_shape() {
        let reply = decode_reply(b"AT+CSQ\r\r\n+CSQ: 17,0\r\n\r\nOK\r\n").unwrap();
        assert_eq!(
            classify_reply(&reply, ReplyShape::Value),
            ClassifiedReply::OkWithValue("17".to_string())
        );
    }

    #[test]
    fn classify_lines_shape() {
        let reply = decode_reply(b"AT+CGMM\r\r\nSIM800\r\n\r\nOK\r\n").unwrap();
        match classify_reply(&reply, ReplyShape::Lines) {
            ClassifiedReply::OkWithLines(lines) => assert_eq!(lines[1], "SIM800"),
            other => panic!("expected OkWithLines, got {other:?}"),
        }
    }

    #[test]
    fn classify_missing_ok_is_failure() {
        let reply = decode_reply(b"AT+CSQ\r\r\nERROR\r\n").unwrap();
        assert_eq!(
            classify_reply(&reply, ReplyShape::Value),
            ClassifiedReply::Failure("AT+CSQ\r\r\nERROR\r\n".to_string())
        );
    }

    #[test]
    fn classify_ok_without_value_is_failure() {
        let reply = decode_reply(b"AT+CSQ\r\r\nOK\r\n").unwrap();
        assert!(matches!(
            classify_reply(&reply, ReplyShape::Value),
            ClassifiedReply::Failure(_)
        ));
    }
}
