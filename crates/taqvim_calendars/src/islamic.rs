//! Tabular (arithmetic) Islamic calendar.
//!
//! A 30-year cycle with 11 leap years; odd months have 30 days, even months
//! 29, and the twelfth month gains a day in leap years. Year 0 and negative
//! years are representable.

use taqvim_time::{ISLAMIC_EPOCH, civil_day_start};
use tracing::trace;

use crate::date::{check_month_day, check_year};
use crate::error::CalendarError;

/// Calendar name used in error messages.
pub const CALENDAR: &str = "islamic";

/// Leap iff `(11 * year + 14) mod 30 < 11`.
pub fn is_leap_islamic(year: i32) -> bool {
    (i64::from(year) * 11 + 14).rem_euclid(30) < 11
}

/// Days in `month` of `year`; Dhu al-Hijja gains a day in leap years.
pub fn islamic_month_days(year: i32, month: u32) -> u32 {
    if month % 2 == 1 || (month == 12 && is_leap_islamic(year)) {
        30
    } else {
        29
    }
}

/// Check that the date exists in the tabular Islamic calendar.
pub fn validate_islamic(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    check_year(CALENDAR, year, true)?;
    check_month_day(CALENDAR, year, month, day, 12, |m| {
        islamic_month_days(year, m)
    })
}

/// Julian Day at the start of an Islamic date.
pub fn islamic_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let y = f64::from(year);
    f64::from(day)
        + (29.5 * (f64::from(month) - 1.0)).ceil()
        + (y - 1.0) * 354.0
        + ((3.0 + 11.0 * y) / 30.0).floor()
        + ISLAMIC_EPOCH
}

/// Islamic date of the civil day containing `jd`.
pub fn jd_to_islamic(jd: f64) -> (i32, u32, u32) {
    let jd = civil_day_start(jd);
    let mut year = ((30.0 * (jd - ISLAMIC_EPOCH) + 10_646.0) / 10_631.0).floor() as i32;
    // The mean-year estimate can land one year late just before 1 Muharram.
    if jd < islamic_to_jd(year, 1, 1) {
        trace!(jd, year, "islamic year estimate backed off");
        year = year.saturating_sub(1);
    }
    let new_year = islamic_to_jd(year, 1, 1);
    let month = (((jd - (29.0 + new_year)) / 29.5).ceil() + 1.0).min(12.0) as u32;
    let day = (jd - islamic_to_jd(year, month, 1) + 1.0) as u32;
    (year, month, day)
}
