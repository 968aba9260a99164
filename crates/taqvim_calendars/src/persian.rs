//! Persian (Solar Hijri) calendar, arithmetic 2820-year cycle.
//!
//! The first six months have 31 days, the next five 30, and Esfand has 29
//! (30 in leap years). There is no year 0. Years are counted within a grand
//! cycle of 2820 years anchored at year 475, which holds 683 leap years.

use taqvim_time::{PERSIAN_EPOCH, civil_day_start, floor_mod};

use crate::date::{check_month_day, check_year};
use crate::error::CalendarError;

/// Calendar name used in error messages.
pub const CALENDAR: &str = "persian";

const CYCLE_YEARS: f64 = 2820.0;
const CYCLE_DAYS: f64 = 1_029_983.0;

/// Base of the cycle count and the year's position within its 2820-year cycle.
fn cycle_position(year: i32) -> (f64, f64) {
    let base = f64::from(year) - if year > 0 { 474.0 } else { 473.0 };
    (base, 474.0 + floor_mod(base, CYCLE_YEARS))
}

/// Leap years of the 2820-year arithmetic cycle.
pub fn is_leap_persian(year: i32) -> bool {
    let (_, cycle_year) = cycle_position(year);
    floor_mod((cycle_year + 38.0) * 682.0, 2816.0) < 682.0
}

/// Days in `month` of `year`; Esfand has 30 days in leap years.
pub fn persian_month_days(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ if is_leap_persian(year) => 30,
        _ => 29,
    }
}

/// Check that the date exists in the Persian calendar; there is no year 0.
pub fn validate_persian(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    check_year(CALENDAR, year, false)?;
    check_month_day(CALENDAR, year, month, day, 12, |m| {
        persian_month_days(year, m)
    })
}

/// Julian Day at the start of a Persian date.
pub fn persian_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let (base, cycle_year) = cycle_position(year);
    let m = f64::from(month);
    let month_offset = if month <= 7 {
        (m - 1.0) * 31.0
    } else {
        (m - 1.0) * 30.0 + 6.0
    };
    f64::from(day)
        + month_offset
        + ((cycle_year * 682.0 - 110.0) / 2816.0).floor()
        + (cycle_year - 1.0) * 365.0
        + (base / CYCLE_YEARS).floor() * CYCLE_DAYS
        + (PERSIAN_EPOCH - 1.0)
}

/// Persian date of the civil day containing `jd`.
pub fn jd_to_persian(jd: f64) -> (i32, u32, u32) {
    let jd = civil_day_start(jd);
    let depoch = jd - persian_to_jd(475, 1, 1);
    let cycle = (depoch / CYCLE_DAYS).floor();
    let cyear = floor_mod(depoch, CYCLE_DAYS);

    let ycycle = if cyear == CYCLE_DAYS - 1.0 {
        CYCLE_YEARS
    } else {
        let aux1 = (cyear / 366.0).floor();
        let aux2 = floor_mod(cyear, 366.0);
        ((2134.0 * aux1 + 2816.0 * aux2 + 2815.0) / 1_028_522.0).floor() + aux1 + 1.0
    };

    let mut year = (ycycle + CYCLE_YEARS * cycle + 474.0) as i32;
    if year <= 0 {
        year = year.saturating_sub(1);
    }

    let yday = jd - persian_to_jd(year, 1, 1) + 1.0;
    let month = if yday <= 186.0 {
        (yday / 31.0).ceil()
    } else {
        ((yday - 6.0) / 30.0).ceil()
    } as u32;
    let day = (jd - persian_to_jd(year, month, 1) + 1.0) as u32;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        let leaps: Vec<i32> = (1390..1420).filter(|&y| is_leap_persian(y)).collect();
        assert_eq!(leaps, vec![1391, 1395, 1399, 1404, 1408, 1412, 1416]);
    }

    #[test]
    fn leap_count_per_grand_cycle() {
        let count = (475..475 + 2820).filter(|&y| is_leap_persian(y)).count();
        assert_eq!(count, 683);
    }

    #[test]
    fn leap_flag_matches_year_length() {
        for year in (-3000..3000).filter(|&y| y != 0) {
            let next = if year == -1 { 1 } else { year + 1 };
            let len = persian_to_jd(next, 1, 1) - persian_to_jd(year, 1, 1);
            let expected = if is_leap_persian(year) { 366.0 } else { 365.0 };
            assert_eq!(len, expected, "year {year}");
        }
    }

    #[test]
    fn year_minus_one_runs_into_year_one() {
        assert!(is_leap_persian(-1));
        assert!(validate_persian(-1, 12, 30).is_ok());
        assert_eq!(persian_to_jd(1, 1, 1) - persian_to_jd(-1, 1, 1), 366.0);
        assert_eq!(jd_to_persian(PERSIAN_EPOCH - 1.0), (-1, 12, 30));
    }

    #[test]
    fn known_days() {
        assert_eq!(persian_to_jd(1, 1, 1), PERSIAN_EPOCH);
        assert_eq!(persian_to_jd(1403, 4, 28), 2_460_509.5);
        assert_eq!(persian_to_jd(1403, 1, 1), 2_460_389.5);
        assert_eq!(persian_to_jd(1378, 10, 11), 2_451_544.5);
    }

    #[test]
    fn inverse_known_days() {
        assert_eq!(jd_to_persian(2_460_509.5), (1403, 4, 28));
        assert_eq!(jd_to_persian(2_456_282.5), (1391, 10, 1));
        assert_eq!(jd_to_persian(2_299_160.5), (961, 7, 23));
        assert_eq!(jd_to_persian(1_721_425.5), (-622, 10, 11));
    }

    #[test]
    fn month_boundaries() {
        // Shahrivar is the last 31-day month.
        let jd = persian_to_jd(1403, 6, 31);
        assert_eq!(jd_to_persian(jd), (1403, 6, 31));
        assert_eq!(jd_to_persian(jd + 1.0), (1403, 7, 1));
        let jd = persian_to_jd(1403, 12, 29);
        assert_eq!(jd_to_persian(jd + 1.0), (1404, 1, 1));
    }

    #[test]
    fn validation() {
        assert!(validate_persian(1399, 12, 30).is_ok());
        assert!(validate_persian(1403, 12, 30).is_err());
        assert!(validate_persian(0, 1, 1).is_err());
        assert!(validate_persian(1403, 7, 31).is_err());
    }

    #[test]
    fn roundtrip_across_cycle_boundary() {
        let start = persian_to_jd(470, 1, 1);
        for i in 0..(366 * 10) {
            let jd = start + f64::from(i);
            let (y, m, d) = jd_to_persian(jd);
            assert_eq!(persian_to_jd(y, m, d), jd, "jd={jd}");
        }
    }
}
