//! Proleptic Gregorian calendar.
//!
//! Years are astronomical: year 0 exists and equals 1 BCE. Conversion
//! counts whole 400/100/4/1-year cycles from 0001-01-01.

use taqvim_time::{GREGORIAN_EPOCH, civil_day_start, floor_mod};

use crate::date::{check_month_day, check_year};
use crate::error::CalendarError;

/// Calendar name used in error messages.
pub const CALENDAR: &str = "gregorian";

const DAYS_IN_400_YEARS: f64 = 146_097.0;
const DAYS_IN_100_YEARS: f64 = 36_524.0;
const DAYS_IN_4_YEARS: f64 = 1_461.0;

/// Divisible by 4, except centuries not divisible by 400.
pub fn is_leap_gregorian(year: i32) -> bool {
    is_leap_proleptic(i64::from(year))
}

/// Gregorian leap rule on a widened year, for callers that offset the year.
pub(crate) fn is_leap_proleptic(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days in `month` of `year`.
pub fn gregorian_month_days(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_gregorian(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check that the date exists in the proleptic Gregorian calendar.
pub fn validate_gregorian(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    check_year(CALENDAR, year, true)?;
    check_month_day(CALENDAR, year, month, day, 12, |m| {
        gregorian_month_days(year, m)
    })
}

/// Julian Day at the start of a Gregorian date.
///
/// Inputs are assumed valid; see [`validate_gregorian`].
pub fn gregorian_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let y = f64::from(year) - 1.0;
    let m = f64::from(month);
    let adjust = if month <= 2 {
        0.0
    } else if is_leap_gregorian(year) {
        -1.0
    } else {
        -2.0
    };
    (GREGORIAN_EPOCH - 1.0)
        + 365.0 * y
        + (y / 4.0).floor()
        - (y / 100.0).floor()
        + (y / 400.0).floor()
        + ((367.0 * m - 362.0) / 12.0 + adjust + f64::from(day)).floor()
}

/// Gregorian date of the civil day containing `jd`.
pub fn jd_to_gregorian(jd: f64) -> (i32, u32, u32) {
    let wjd = civil_day_start(jd);
    let depoch = wjd - GREGORIAN_EPOCH;

    let quadricent = (depoch / DAYS_IN_400_YEARS).floor();
    let dqc = floor_mod(depoch, DAYS_IN_400_YEARS);
    let cent = (dqc / DAYS_IN_100_YEARS).floor();
    let dcent = floor_mod(dqc, DAYS_IN_100_YEARS);
    let quad = (dcent / DAYS_IN_4_YEARS).floor();
    let dquad = floor_mod(dcent, DAYS_IN_4_YEARS);
    let yindex = (dquad / 365.0).floor();

    let mut year = quadricent * 400.0 + cent * 100.0 + quad * 4.0 + yindex;
    // The last day of a leap cycle lands on index 4 and belongs to the year
    // already counted.
    if !(cent == 4.0 || yindex == 4.0) {
        year += 1.0;
    }
    let year = year as i32;

    let yearday = wjd - gregorian_to_jd(year, 1, 1);
    let leapadj = if wjd < gregorian_to_jd(year, 3, 1) {
        0.0
    } else if is_leap_gregorian(year) {
        1.0
    } else {
        2.0
    };
    let month = (((yearday + leapadj) * 12.0 + 373.0) / 367.0).floor() as u32;
    let day = (wjd - gregorian_to_jd(year, month, 1) + 1.0) as u32;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_rule() {
        assert!(is_leap_gregorian(2024));
        assert!(is_leap_gregorian(2000));
        assert!(is_leap_gregorian(0));
        assert!(is_leap_gregorian(-4));
        assert!(!is_leap_gregorian(1900));
        assert!(!is_leap_gregorian(2023));
        assert!(!is_leap_gregorian(-1));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(gregorian_month_days(2024, 2), 29);
        assert_eq!(gregorian_month_days(2023, 2), 28);
        assert_eq!(gregorian_month_days(2023, 4), 30);
        assert_eq!(gregorian_month_days(2023, 12), 31);
        let total: u32 = (1..=12).map(|m| gregorian_month_days(2024, m)).sum();
        assert_eq!(total, 366);
    }

    #[test]
    fn known_days() {
        assert_eq!(gregorian_to_jd(2024, 7, 18), 2_460_509.5);
        assert_eq!(gregorian_to_jd(2000, 1, 1), 2_451_544.5);
        assert_eq!(gregorian_to_jd(1970, 1, 1), 2_440_587.5);
        assert_eq!(gregorian_to_jd(1582, 10, 15), 2_299_160.5);
        assert_eq!(gregorian_to_jd(1, 1, 1), GREGORIAN_EPOCH);
        assert_eq!(gregorian_to_jd(1900, 3, 1), 2_415_079.5);
    }

    #[test]
    fn inverse_known_days() {
        assert_eq!(jd_to_gregorian(2_460_509.5), (2024, 7, 18));
        assert_eq!(jd_to_gregorian(2_460_389.5), (2024, 3, 20));
        assert_eq!(jd_to_gregorian(2_456_282.5), (2012, 12, 21));
        assert_eq!(jd_to_gregorian(1_721_425.5), (1, 1, 1));
        assert_eq!(jd_to_gregorian(-0.5), (-4713, 11, 24));
    }

    #[test]
    fn end_of_leap_cycle() {
        // 2000-12-31 is day 366 of a 400-year-cycle leap year.
        let jd = gregorian_to_jd(2000, 12, 31);
        assert_eq!(jd_to_gregorian(jd), (2000, 12, 31));
        assert_eq!(jd_to_gregorian(jd + 1.0), (2001, 1, 1));
        let jd = gregorian_to_jd(2024, 12, 31);
        assert_eq!(jd_to_gregorian(jd), (2024, 12, 31));
    }

    #[test]
    fn noon_maps_to_same_day() {
        assert_eq!(jd_to_gregorian(2_460_510.0), (2024, 7, 18));
        assert_eq!(jd_to_gregorian(2_460_510.5), (2024, 7, 19));
    }

    #[test]
    fn year_zero_is_leap_and_exists() {
        assert!(validate_gregorian(0, 2, 29).is_ok());
        let jd = gregorian_to_jd(0, 2, 29);
        assert_eq!(jd_to_gregorian(jd), (0, 2, 29));
        assert_eq!(gregorian_to_jd(1, 1, 1) - gregorian_to_jd(0, 1, 1), 366.0);
    }

    #[test]
    fn validation() {
        assert!(validate_gregorian(2024, 2, 29).is_ok());
        assert!(matches!(
            validate_gregorian(2023, 2, 29),
            Err(CalendarError::InvalidDay { max: 28, .. })
        ));
        assert!(matches!(
            validate_gregorian(2023, 13, 1),
            Err(CalendarError::InvalidMonth { .. })
        ));
        assert!(validate_gregorian(2023, 4, 31).is_err());
    }

    #[test]
    fn roundtrip_every_day_of_a_cycle() {
        let start = gregorian_to_jd(1600, 1, 1);
        for i in 0..146_097 {
            let jd = start + f64::from(i);
            let (y, m, d) = jd_to_gregorian(jd);
            assert_eq!(gregorian_to_jd(y, m, d), jd, "jd={jd}");
        }
    }
}
