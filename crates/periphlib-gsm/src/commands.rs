//! AT command builders and response parsers.
//!
//! One builder per supported modem command, plus the parser for the
//! `+CSQ` signal-quality report. All functions are pure -- they produce or
//! consume bytes and strings without performing any I/O. The engine in
//! [`crate::modem`] sends the bytes over a transport and feeds the drained
//! reply back through [`crate::protocol`].
//!
//! # Supported command subset
//!
//! `AT`, `AT+CSQ`, `AT+CGMI`, `AT+CGMM`, `AT+CGMR`, `AT+CGSN`, `AT+CIMI`,
//! `ATD<num>;`, `ATH`, `AT+CMGF=1`, `AT+CMGS="<num>"`, `AT+CMGL="ALL"`,
//! `AT+CMGR=<id>` -- all carriage-return terminated.

use periphlib_core::error::{Error, Result};

use crate::protocol::encode_command;

/// Signal values at or above this count as [`SignalQuality::Excellent`].
pub const SIGNAL_EXCELLENT_THRESHOLD: u8 = 20;

// ---------------------------------------------------------------
// Command builders
// ---------------------------------------------------------------

/// Build the attention command (`AT\r`) used as a modem liveness probe.
pub fn cmd_attention() -> Vec<u8> {
    encode_command("AT")
}

/// Build a "query signal quality" command (`AT+CSQ\r`).
pub fn cmd_signal_quality() -> Vec<u8> {
    encode_command("AT+CSQ")
}

/// Build a "query manufacturer" command (`AT+CGMI\r`).
pub fn cmd_manufacturer() -> Vec<u8> {
    encode_command("AT+CGMI")
}

/// Build a "query model" command (`AT+CGMM\r`).
pub fn cmd_model() -> Vec<u8> {
    encode_command("AT+CGMM")
}

/// Build a "query revision" command (`AT+CGMR\r`).
pub fn cmd_revision() -> Vec<u8> {
    encode_command("AT+CGMR")
}

/// Build a "query serial number" command (`AT+CGSN\r`).
pub fn cmd_serial_number() -> Vec<u8> {
    encode_command("AT+CGSN")
}

/// Build a "query international mobile subscriber identity" command
/// (`AT+CIMI\r`).
pub fn cmd_subscriber_identity() -> Vec<u8> {
    encode_command("AT+CIMI")
}

/// Build a voice-dial command (`ATD<number>;\r`).
///
/// The trailing `;` selects voice (not data) dialing.
pub fn cmd_dial(number: &str) -> Vec<u8> {
    encode_command(&format!("ATD{number};"))
}

/// Build a hangup command (`ATH\r`).
pub fn cmd_hangup() -> Vec<u8> {
    encode_command("ATH")
}

/// Build the "enable SMS text mode" command (`AT+CMGF=1\r`).
pub fn cmd_sms_text_mode() -> Vec<u8> {
    encode_command("AT+CMGF=1")
}

/// Build an "address SMS recipient" command (`AT+CMGS="<number>"\r`).
///
/// The modem answers this with a `>` prompt; the message body follows,
/// terminated by Ctrl-Z ([`crate::protocol::CTRL_Z`]).
pub fn cmd_sms_recipient(number: &str) -> Vec<u8> {
    encode_command(&format!("AT+CMGS=\"{number}\""))
}

/// Build a "list all stored SMS" command (`AT+CMGL="ALL"\r`).
pub fn cmd_sms_list_all() -> Vec<u8> {
    encode_command("AT+CMGL=\"ALL\"")
}

/// Build a "read SMS by storage index" command (`AT+CMGR=<id>\r`).
pub fn cmd_sms_read(id: u32) -> Vec<u8> {
    encode_command(&format!("AT+CMGR={id}"))
}

// ---------------------------------------------------------------
// Response parsers
// ---------------------------------------------------------------

/// Coarse signal quality label derived from the `+CSQ` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalQuality {
    /// Signal value >= 20.
    Excellent,
    /// Signal value below 20.
    Poor,
}

impl std::fmt::Display for SignalQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalQuality::Excellent => write!(f, "Excellent"),
            SignalQuality::Poor => write!(f, "Poor"),
        }
    }
}

/// A parsed `+CSQ` signal report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalReport {
    /// Coarse label for the value.
    pub quality: SignalQuality,
    /// The raw RSSI code from the modem (0-31, or 99 for "not detectable").
    pub value: u8,
}

/// Parse the numeric value extracted from a `+CSQ: <value>,<ber>` reply
/// into a [`SignalReport`].
///
/// # Example
///
/// ```
/// use periphlib_gsm::commands::{parse_signal_report, SignalQuality};
///
/// let report = parse_signal_report("22").unwrap();
/// assert_eq!(report.quality, SignalQuality::Excellent);
/// assert_eq!(report.value, 22);
/// ```
pub fn parse_signal_report(value: &str) -> Result<SignalReport> {
    let value: u8 = value
        .trim()
        .parse()
        .map_err(|_| Error::Protocol(format!("non-numeric +CSQ value: {value:?}")))?;

    let quality = if value >= SIGNAL_EXCELLENT_THRESHOLD {
        SignalQuality::Excellent
    } else {
        SignalQuality::Poor
    };

    Ok(SignalReport { quality, value })
}
