//! `GpsReceiver` -- passive driver for NMEA GPS modules.
//!
//! A GPS module is a pure listener: it emits sentence blocks on its own
//! schedule and is never written to. Each accessor here performs exactly
//! one read window -- drain up to 500 bytes of whatever has arrived, frame
//! it into lines, and look for a structurally valid `$GPGGA` sentence.
//!
//! When the window does not contain one (wrong sentences, a truncated
//! sentence, or nothing at all), the accessor returns `Ok(None)`. Zero is a
//! valid latitude, longitude, and time, so absence is always represented
//! explicitly and never as a default value. Callers retry by calling again;
//! the driver performs no buffering across windows.
//!
//! Callers needing several fields from the *same* fix must use
//! [`GpsReceiver::fix`] or [`GpsReceiver::raw_fields`] -- two separate
//! accessor calls read two separate windows and may observe two different
//! sentences.

use tracing::trace;

use periphlib_core::error::Result;
use periphlib_core::sentence;
use periphlib_core::transport::Transport;

use crate::nmea::{self, FixQuality, FixRecord, GGA_FIELD_COUNT, GGA_TAG};

/// How many bytes one accessor drains from the transport. At the NMEA
/// standard 9600 baud this is roughly half a second of output, comfortably
/// more than one sentence burst.
pub const READ_WINDOW: usize = 500;

/// A connected GPS module emitting NMEA sentences.
///
/// Constructed via [`GpsBuilder`](crate::builder::GpsBuilder).
pub struct GpsReceiver {
    transport: Box<dyn Transport>,
}

impl GpsReceiver {
    pub(crate) fn new(transport: Box<dyn Transport>) -> Self {
        GpsReceiver { transport }
    }

    /// Close the underlying transport.
    pub async fn close(&mut self) -> Result<()> {
        self.transport.close().await
    }

    /// Read one window and return the fields of the first valid `$GPGGA`
    /// sentence in it, untyped.
    pub async fn raw_fields(&mut self) -> Result<Option<Vec<String>>> {
        let mut buf = [0u8; READ_WINDOW];
        let n = self.transport.read_available(&mut buf).await?;
        let lines = sentence::frame_lines(&buf[..n])?;
        let found = sentence::find_sentence(&lines, GGA_TAG, GGA_FIELD_COUNT);
        trace!(bytes = n, lines = lines.len(), found = found.is_some(), "GGA window");
        Ok(found)
    }

    /// Read one window and decode a complete [`FixRecord`] from it.
    ///
    /// This is the way to obtain several fields of the same fix.
    pub async fn fix(&mut self) -> Result<Option<FixRecord>> {
        match self.raw_fields().await? {
            Some(fields) => Ok(Some(FixRecord::from_fields(&fields)?)),
            None => Ok(None),
        }
    }

    /// Read one window and return `(latitude, longitude)` from it.
    pub async fn lat_long(&mut self) -> Result<Option<(f64, f64)>> {
        match self.raw_fields().await? {
            Some(fields) => Ok(Some(nmea::parse_lat_long(&fields)?)),
            None => Ok(None),
        }
    }

    /// Read one window and return the time of day (`hh.mm` float) from it.
    pub async fn time_of_day(&mut self) -> Result<Option<f64>> {
        match self.raw_fields().await? {
            Some(fields) => Ok(Some(nmea::parse_time(&fields)?)),
            None => Ok(None),
        }
    }

    /// Read one window and return the fix quality class from it.
    pub async fn quality_indicator(&mut self) -> Result<Option<FixQuality>> {
        match self.raw_fields().await? {
            Some(fields) => Ok(Some(FixQuality::from_code(&fields[6]))),
            None => Ok(None),
        }
    }

    /// Read one window and return the satellite count from it.
    pub async fn satellite_count(&mut self) -> Result<Option<u32>> {
        match self.raw_fields().await? {
            Some(fields) => Ok(Some(nmea::parse_satellite_count(&fields)?)),
            None => Ok(None),
        }
    }
}
