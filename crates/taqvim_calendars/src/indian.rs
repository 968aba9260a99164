//! Indian Civil (Saka) calendar.
//!
//! The year begins on Gregorian March 22, or March 21 when the Gregorian
//! year is leap. Caitra has 30 days (31 in leap years), months 2-6 have 31
//! and months 7-12 have 30. Saka year `y` starts in Gregorian year `y + 78`,
//! whose leap status it shares.

use taqvim_time::{INDIAN_CIVIL_YEAR_OFFSET, civil_day_start};

use crate::date::{check_month_day, check_year};
use crate::error::CalendarError;
use crate::gregorian::{gregorian_to_jd, is_leap_gregorian, is_leap_proleptic, jd_to_gregorian};

/// Calendar name used in error messages.
pub const CALENDAR: &str = "indian_civil";

/// Day of the Gregorian year (0-based) on which a common Saka year starts.
const YEAR_START_DAY: i64 = 80;
const LONG_MONTHS_DAYS: i64 = 5 * 31;

/// Leap iff Gregorian year `year + 78` is leap.
pub fn is_leap_indian_civil(year: i32) -> bool {
    is_leap_proleptic(i64::from(year) + i64::from(INDIAN_CIVIL_YEAR_OFFSET))
}

/// Days in `month` of `year`; Caitra is 31 days in leap years.
pub fn indian_civil_month_days(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_indian_civil(year) => 31,
        1 => 30,
        2..=6 => 31,
        _ => 30,
    }
}

/// Check that the date exists in the Indian Civil calendar.
pub fn validate_indian_civil(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    check_year(CALENDAR, year, true)?;
    check_month_day(CALENDAR, year, month, day, 12, |m| {
        indian_civil_month_days(year, m)
    })
}

fn caitra_days(leap: bool) -> i64 {
    if leap { 31 } else { 30 }
}

/// Julian Day at the start of an Indian Civil date.
pub fn indian_civil_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let gyear = year.saturating_add(INDIAN_CIVIL_YEAR_OFFSET);
    let leap = is_leap_gregorian(gyear);
    let start = gregorian_to_jd(gyear, 3, if leap { 21 } else { 22 });
    let day = f64::from(day) - 1.0;
    if month == 1 {
        return start + day;
    }
    let m = i64::from(month);
    let mut offset = caitra_days(leap) + (m - 2).min(5) * 31;
    if m >= 8 {
        offset += (m - 7) * 30;
    }
    start + offset as f64 + day
}

/// Indian Civil date of the civil day containing `jd`.
pub fn jd_to_indian_civil(jd: f64) -> (i32, u32, u32) {
    let jd = civil_day_start(jd);
    let (gyear, _, _) = jd_to_gregorian(jd);
    let leap = is_leap_gregorian(gyear);
    let caitra = caitra_days(leap);
    let mut year = gyear.saturating_sub(INDIAN_CIVIL_YEAR_OFFSET);
    let mut yday = (jd - gregorian_to_jd(gyear, 1, 1)) as i64;

    // January to mid-March belongs to the Saka year that began the previous
    // spring; 90 + 10 covers Asvina..Phalguna not already counted.
    if yday < YEAR_START_DAY {
        year = year.saturating_sub(1);
        yday += caitra + LONG_MONTHS_DAYS + 90 + 10 + YEAR_START_DAY;
    }
    yday -= YEAR_START_DAY;

    let (month, day) = if yday < caitra {
        (1, yday + 1)
    } else {
        let mday = yday - caitra;
        if mday < LONG_MONTHS_DAYS {
            (mday / 31 + 2, mday % 31 + 1)
        } else {
            let mday = mday - LONG_MONTHS_DAYS;
            (mday / 30 + 7, mday % 30 + 1)
        }
    };
    (year, month as u32, day as u32)
}
