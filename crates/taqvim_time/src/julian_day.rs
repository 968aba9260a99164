//! Civil-day normalisation, supported range and auxiliary day counts.

use crate::epoch::{J1970, JMJD};
use crate::error::TimeError;

/// Lowest supported Julian Day: Julian 4713 BCE January 1, 00:00.
pub const JD_MIN: f64 = -0.5;

/// Highest supported Julian Day: Gregorian 9999-12-31, 00:00.
pub const JD_MAX: f64 = 5_373_483.5;

/// Start (midnight) of the civil day containing the instant `jd`.
///
/// Half-integer inputs are returned unchanged; `2460510.0` (noon) maps to
/// `2460509.5`.
pub fn civil_day_start(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}

/// Reject non-finite Julian Days and those outside [`JD_MIN`]..=[`JD_MAX`].
///
/// The range check applies to the civil day containing `jd`, so any instant
/// during 9999-12-31 is accepted.
pub fn check_jd(jd: f64) -> Result<f64, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::NotFinite);
    }
    let day = civil_day_start(jd);
    if !(JD_MIN..=JD_MAX).contains(&day) {
        return Err(TimeError::OutOfRange {
            jd,
            min: JD_MIN,
            max: JD_MAX,
        });
    }
    Ok(jd)
}

/// Julian Day to Modified Julian Date.
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - JMJD
}

/// Modified Julian Date to Julian Day.
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + JMJD
}

/// Whole days elapsed since 1970-01-01 for the civil day containing `jd`.
pub fn jd_to_unix_days(jd: f64) -> i64 {
    (civil_day_start(jd) - J1970) as i64
}

/// Julian Day at the start of the given Unix day number.
pub fn unix_days_to_jd(days: i64) -> f64 {
    J1970 + days as f64
}
