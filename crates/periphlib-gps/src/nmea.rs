//! `$GPGGA` fix-data field parsing.
//!
//! This module turns the 15 fields of a framed `$GPGGA` sentence into typed
//! values. All functions are pure -- they consume field slices without
//! performing any I/O. [`crate::receiver`] reads the window of bytes and
//! locates the sentence.
//!
//! # Field layout (`$GPGGA`, 15 fields, index 0 is the tag)
//!
//! | Index | Content                                  |
//! |-------|------------------------------------------|
//! | 1     | UTC time as `hhmmss.ss`                  |
//! | 2     | Latitude as `ddmm.mmmm`                  |
//! | 4     | Longitude as `dddmm.mmmm`                |
//! | 6     | Fix quality code                         |
//! | 7     | Number of satellites in use              |
//!
//! # Compatibility transforms
//!
//! Two conversions here are deliberate approximations, preserved for
//! compatibility with the long-deployed behavior of this driver family:
//!
//! - **Latitude/longitude**: the `ddmm.mmmm` field is divided by 100. True
//!   NMEA conversion would split off the minutes and divide them by 60;
//!   `4807.038` therefore decodes to `48.07038` rather than the geodetic
//!   `48.1173`.
//! - **Time**: the `hhmmss.ss` field is divided by 100, truncated, and
//!   divided by 100 again, producing an `hh.mm` float. `123519.00` decodes
//!   to `12.35` -- seconds and sub-minute precision are discarded.
//!
//! Both are lossy; neither may be "fixed" silently, since downstream
//! consumers depend on the historical encoding.

use periphlib_core::error::{Error, Result};

/// The sentence tag this decoder understands.
pub const GGA_TAG: &str = "$GPGGA";

/// A `$GPGGA` sentence has exactly this many comma-separated fields.
pub const GGA_FIELD_COUNT: usize = 15;

/// Positioning method/accuracy class reported in the fix quality field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixQuality {
    /// Code 1: uncorrected coordinate.
    Uncorrected,
    /// Code 2: differentially corrected (WAAS, DGPS).
    Differential,
    /// Code 4: RTK fixed solution (centimeter precision).
    RtkFix,
    /// Code 5: RTK float solution (decimeter precision).
    RtkFloat,
    /// Any other code.
    Unknown,
}

impl FixQuality {
    /// Map the raw quality field to a [`FixQuality`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "1" => FixQuality::Uncorrected,
            "2" => FixQuality::Differential,
            "4" => FixQuality::RtkFix,
            "5" => FixQuality::RtkFloat,
            _ => FixQuality::Unknown,
        }
    }
}

impl std::fmt::Display for FixQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixQuality::Uncorrected => write!(f, "Uncorrected"),
            FixQuality::Differential => write!(f, "Differential"),
            FixQuality::RtkFix => write!(f, "RTK Fix"),
            FixQuality::RtkFloat => write!(f, "RTK Float"),
            FixQuality::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A complete decoded fix, derived transiently from one `$GPGGA` sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct FixRecord {
    /// Latitude, `ddmm.mmmm / 100` encoding (see module docs).
    pub latitude: f64,
    /// Longitude, same encoding.
    pub longitude: f64,
    /// Time of day as an `hh.mm` float (see module docs).
    pub time_of_day: f64,
    /// Positioning quality class.
    pub quality: FixQuality,
    /// Number of satellites used for the fix.
    pub satellites: u32,
}

impl FixRecord {
    /// Decode a full fix from the 15 fields of a framed `$GPGGA` sentence.
    pub fn from_fields(fields: &[String]) -> Result<FixRecord> {
        check_field_count(fields)?;
        let (latitude, longitude) = parse_lat_long(fields)?;
        Ok(FixRecord {
            latitude,
            longitude,
            time_of_day: parse_time(fields)?,
            quality: FixQuality::from_code(&fields[6]),
            satellites: parse_satellite_count(fields)?,
        })
    }
}

/// A slice with the wrong field count has misindexed positions, so every
/// parser rejects it up front rather than reading a wrong field.
fn check_field_count(fields: &[String]) -> Result<()> {
    if fields.len() != GGA_FIELD_COUNT {
        return Err(Error::Protocol(format!(
            "expected {GGA_FIELD_COUNT} GGA fields, got {}",
            fields.len()
        )));
    }
    Ok(())
}

fn numeric_field(fields: &[String], index: usize) -> Result<f64> {
    fields[index]
        .parse()
        .map_err(|_| Error::Protocol(format!("non-numeric GGA field {index}: {:?}", fields[index])))
}

/// Decode latitude (field 2) and longitude (field 4).
///
/// Applies the division-by-100 approximation documented in the module docs.
pub fn parse_lat_long(fields: &[String]) -> Result<(f64, f64)> {
    check_field_count(fields)?;
    let lat = numeric_field(fields, 2)? / 100.0;
    let long = numeric_field(fields, 4)? / 100.0;
    Ok((lat, long))
}

/// Decode the time of day (field 1) as an `hh.mm` float.
///
/// The two-step truncation is preserved exactly: divide by 100, truncate,
/// divide by 100 again. Seconds are discarded.
pub fn parse_time(fields: &[String]) -> Result<f64> {
    check_field_count(fields)?;
    let raw = numeric_field(fields, 1)?;
    Ok((raw / 100.0).trunc() / 100.0)
}

/// Decode the satellite count (field 7).
pub fn parse_satellite_count(fields: &[String]) -> Result<u32> {
    check_field_count(fields)?;
    fields[7].parse().map_err(|_| {
        Error::Protocol(format!("non-numeric satellite count: {:?}", fields[7]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use periphlib_core::sentence::split_fields;

    const GGA_LINE: &str = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,";

    fn gga_fields() -> Vec<String> {
        split_fields(GGA_LINE)
    }

    // ---------------------------------------------------------------
    // Latitude / longitude
    // ---------------------------------------------------------------

    #[test]
    fn lat_long_divides_by_100() {
        let (lat, long) = parse_lat_long(&gga_fields()).unwrap();
        assert!((lat - 48.07038).abs() < 1e-9);
        assert!((long - 11.31000).abs() < 1e-9);
    }

    #[test]
    fn short_field_slice_is_protocol_error() {
        // A truncated slice must be rejected, never indexed.
        let fields = split_fields("$GPGGA,123519");
        assert!(matches!(
            parse_lat_long(&fields).unwrap_err(),
            Error::Protocol(_)
        ));
        assert!(matches!(
            parse_time(&fields).unwrap_err(),
            Error::Protocol(_)
        ));
        assert!(matches!(
            parse_satellite_count(&fields).unwrap_err(),
            Error::Protocol(_)
        ));
        assert!(matches!(
            FixRecord::from_fields(&fields).unwrap_err(),
            Error::Protocol(_)
        ));
    }

    #[test]
    fn extra_field_slice_is_protocol_error() {
        let fields = split_fields(&format!("{GGA_LINE},spurious"));
        assert!(matches!(
            parse_lat_long(&fields).unwrap_err(),
            Error::Protocol(_)
        ));
    }

    #[test]
    fn lat_long_non_numeric_is_protocol_error() {
        let mut fields = gga_fields();
        fields[2] = "north-ish".to_string();
        assert!(matches!(
            parse_lat_long(&fields).unwrap_err(),
            Error::Protocol(_)
        ));
    }

    // ---------------------------------------------------------------
    // Time
    // ---------------------------------------------------------------

    #[test]
    fn time_two_step_truncation() {
        // 123519.00 / 100 = 1235.19 -> trunc 1235 -> / 100 = 12.35.
        // The seconds (19) are discarded by the truncation.
        let time = parse_time(&gga_fields()).unwrap();
        assert!((time - 12.35).abs() < 1e-9);
    }

    #[test]
    fn time_with_fractional_seconds() {
        let mut fields = gga_fields();
        fields[1] = "235959.99".to_string();
        let time = parse_time(&fields).unwrap();
        assert!((time - 23.59).abs() < 1e-9);
    }

    #[test]
    fn time_midnight() {
        let mut fields = gga_fields();
        fields[1] = "000000.00".to_string();
        assert_eq!(parse_time(&fields).unwrap(), 0.0);
    }

    // ---------------------------------------------------------------
    // Quality / satellites
    // ---------------------------------------------------------------

    #[test]
    fn quality_codes() {
        assert_eq!(FixQuality::from_code("1"), FixQuality::Uncorrected);
        assert_eq!(FixQuality::from_code("2"), FixQuality::Differential);
        assert_eq!(FixQuality::from_code("4"), FixQuality::RtkFix);
        assert_eq!(FixQuality::from_code("5"), FixQuality::RtkFloat);
        assert_eq!(FixQuality::from_code("0"), FixQuality::Unknown);
        assert_eq!(FixQuality::from_code(""), FixQuality::Unknown);
    }

    #[test]
    fn satellite_count_parses() {
        assert_eq!(parse_satellite_count(&gga_fields()).unwrap(), 8);
    }

    #[test]
    fn satellite_count_non_numeric_is_protocol_error() {
        let mut fields = gga_fields();
        fields[7] = "many".to_string();
        assert!(matches!(
            parse_satellite_count(&fields).unwrap_err(),
            Error::Protocol(_)
        ));
    }

    // ---------------------------------------------------------------
    // Whole record
    // ---------------------------------------------------------------

    #[test]
    fn fix_record_from_fields() {
        let fix = FixRecord::from_fields(&gga_fields()).unwrap();
        assert!((fix.latitude - 48.07038).abs() < 1e-9);
        assert!((fix.longitude - 11.31000).abs() < 1e-9);
        assert!((fix.time_of_day - 12.35).abs() < 1e-9);
        assert_eq!(fix.quality, FixQuality::Uncorrected);
        assert_eq!(fix.satellites, 8);
    }
}
