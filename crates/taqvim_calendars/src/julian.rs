//! Julian calendar with BCE/CE year numbering.
//!
//! There is no year 0: year -1 (1 BCE) is followed by year 1 (1 CE).
//! Leap years are every fourth year, so 1 BCE, 5 BCE, ... are leap.

use taqvim_time::civil_day_start;

use crate::date::{check_month_day, check_year};
use crate::error::CalendarError;

/// Calendar name used in error messages.
pub const CALENDAR: &str = "julian";

/// Every fourth year; with no year 0, year -1 is the first leap year before 1.
pub fn is_leap_julian(year: i32) -> bool {
    let expected = if year > 0 { 0 } else { 3 };
    year.rem_euclid(4) == expected
}

/// Days in `month` of `year`.
pub fn julian_month_days(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_julian(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check that the date exists in the Julian calendar; there is no year 0.
pub fn validate_julian(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    check_year(CALENDAR, year, false)?;
    check_month_day(CALENDAR, year, month, day, 12, |m| julian_month_days(year, m))
}

/// Julian Day at the start of a Julian calendar date.
pub fn julian_to_jd(year: i32, month: u32, day: u32) -> f64 {
    // Shift to astronomical numbering, then count March-based years.
    let mut y = f64::from(year);
    if year < 1 {
        y += 1.0;
    }
    let mut m = f64::from(month);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(day) - 1524.5
}

/// Julian calendar date of the civil day containing `jd`.
pub fn jd_to_julian(jd: f64) -> (i32, u32, u32) {
    let z = (civil_day_start(jd) + 0.5).floor();
    let b = z + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let mut year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    let day = b - d - (30.6001 * e).floor();
    if year < 1.0 {
        year -= 1.0;
    }
    (year as i32, month as u32, day as u32)
}
