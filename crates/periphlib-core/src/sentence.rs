//! Line/field framing for comma-delimited text sentences.
//!
//! Serial peripherals that emit periodic text reports (GPS receivers being
//! the canonical case) frame their output as newline-delimited lines of
//! comma-separated fields. This module turns a raw byte block read from a
//! transport into those lines and fields, and locates a target sentence by
//! its leading tag.
//!
//! All functions are pure -- they consume byte slices and strings without
//! performing any I/O. The caller is responsible for reading a window of
//! bytes from the transport and feeding it in.
//!
//! # Integrity check
//!
//! [`find_sentence`] matches on both the leading tag and the exact field
//! count. A truncated or otherwise malformed sentence (wrong field count)
//! is treated as absent, never partially parsed: a sentence cut off
//! mid-stream must not produce misindexed fields.

use crate::error::{Error, Result};

/// Decode a raw byte block as text and split it into lines.
///
/// Lines are returned in arrival order. `\r\n`, `\n`, and bare `\r` line
/// breaks are all accepted -- some modules terminate sentences with a lone
/// carriage return. Non-UTF-8 input is a [`Error::Decode`] -- the block is
/// never silently truncated to its valid prefix.
pub fn frame_lines(raw: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(raw)
        .map_err(|e| Error::Decode(format!("sentence block is not valid UTF-8: {e}")))?;
    // `str::lines` does not treat a lone `\r` as a break; normalize first.
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    Ok(normalized.lines().map(str::to_string).collect())
}

/// Split a single line into its comma-separated fields.
///
/// Empty fields are preserved: `"$GPGGA,,,"` has four fields, three of
/// them empty. NMEA sentences rely on positional (not present/absent)
/// field semantics.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

/// Find the first line whose leading field equals `tag` and whose field
/// count equals `expected_fields`, returning its fields.
///
/// Returns `None` when no line in the block matches both criteria. A line
/// with the right tag but the wrong field count does not match -- see the
/// module docs on the integrity check.
///
/// # Example
///
/// ```
/// use periphlib_core::sentence::{frame_lines, find_sentence};
///
/// let block = b"$GPGSV,3,1,11\r\n$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,\r\n";
/// let lines = frame_lines(block).unwrap();
/// let fields = find_sentence(&lines, "$GPGGA", 15).unwrap();
/// assert_eq!(fields[0], "$GPGGA");
/// assert_eq!(fields[2], "4807.038");
/// ```
pub fn find_sentence(lines: &[String], tag: &str, expected_fields: usize) -> Option<Vec<String>> {
    for line in lines {
        let fields = split_fields(line);
        if fields[0] == tag && fields.len() == expected_fields {
            return Some(fields);
        }
    }
    None
}
