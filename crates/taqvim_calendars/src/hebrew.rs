//! Hebrew (arithmetic, molad-based) calendar.
//!
//! Months are numbered from Nisan = 1; the year number changes on 1 Tishri
//! (month 7). Leap years insert a thirteenth month (Adar II) following the
//! 19-year Metonic cycle.
//!
//! Year length depends on the dates of two consecutive new years, and month
//! lengths depend on the year length. Both are derived here directly from
//! the molad count, so no date has to be converted to size a year.
//!
//! Dates before 1 Tishri AM 1 are not representable.

use std::ops::Range;

use taqvim_time::{HEBREW_EPOCH, civil_day_start};
use tracing::trace;

use crate::date::{YEAR_LIMIT, check_month_day, check_year};
use crate::error::CalendarError;

/// Calendar name used in error messages.
pub const CALENDAR: &str = "hebrew";

/// Julian Day of 1 Tishri AM 1.
pub const HEBREW_FIRST_DAY: f64 = 347_997.5;

/// Most year steps the inverse conversion may take from its estimate.
pub const YEAR_SEARCH_LIMIT: u32 = 8;

/// Most month steps the inverse conversion may take within a year.
pub const MONTH_SEARCH_LIMIT: u32 = 13;

const PARTS_PER_DAY: i64 = 25_920;

/// Leap iff `(7 * year + 1) mod 19 < 7`.
pub fn is_leap_hebrew(year: i32) -> bool {
    (i64::from(year) * 7 + 1).rem_euclid(19) < 7
}

/// 13 in leap years, 12 otherwise.
pub fn hebrew_months_in_year(year: i32) -> u32 {
    if is_leap_hebrew(year) { 13 } else { 12 }
}

/// Days from the epoch to the molad of Tishri, postponed off Sun/Wed/Fri.
fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = 12_084 + 13_753 * months;
    let mut day = months * 29 + parts.div_euclid(PARTS_PER_DAY);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day += 1;
    }
    day
}

/// Extra postponement keeping year lengths within 353..=355 and 383..=385.
fn new_year_delay(year: i64) -> i64 {
    let last = elapsed_days(year - 1);
    let present = elapsed_days(year);
    let next = elapsed_days(year + 1);
    if next - present == 356 {
        2
    } else if present - last == 382 {
        1
    } else {
        0
    }
}

fn new_year_offset(year: i64) -> i64 {
    elapsed_days(year) + new_year_delay(year)
}

/// Number of days in the year that begins on 1 Tishri of `year`.
pub fn hebrew_year_days(year: i32) -> u32 {
    let y = i64::from(year);
    (new_year_offset(y + 1) - new_year_offset(y)) as u32
}

#[derive(Debug, Clone, Copy)]
struct YearShape {
    leap: bool,
    days: u32,
}

impl YearShape {
    fn of(year: i32) -> Self {
        Self {
            leap: is_leap_hebrew(year),
            days: hebrew_year_days(year),
        }
    }

    fn months(self) -> u32 {
        if self.leap { 13 } else { 12 }
    }

    fn month_days(self, month: u32) -> u32 {
        match month {
            2 | 4 | 6 | 10 | 13 => 29,
            12 if !self.leap => 29,
            // Heshvan is long only in complete years, Kislev short only in
            // deficient ones.
            8 if self.days % 10 != 5 => 29,
            9 if self.days % 10 == 3 => 29,
            _ => 30,
        }
    }

    fn days_in(self, months: Range<u32>) -> i64 {
        months.map(|m| i64::from(self.month_days(m))).sum()
    }
}

/// Days in `month` (Nisan = 1) of `year`.
pub fn hebrew_month_days(year: i32, month: u32) -> u32 {
    YearShape::of(year).month_days(month)
}

/// Check that the date exists in the Hebrew calendar, from AM 1 on.
pub fn validate_hebrew(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    check_year(CALENDAR, year, false)?;
    if year < 1 {
        return Err(CalendarError::InvalidYear {
            calendar: CALENDAR,
            year,
        });
    }
    let shape = YearShape::of(year);
    check_month_day(CALENDAR, year, month, day, shape.months(), |m| {
        shape.month_days(m)
    })
}

/// Julian Day at the start of a Hebrew date.
pub fn hebrew_to_jd(year: i32, month: u32, day: u32) -> f64 {
    let shape = YearShape::of(year);
    let mut days = new_year_offset(i64::from(year)) + i64::from(day) + 1;
    if month < 7 {
        days += shape.days_in(7..shape.months() + 1) + shape.days_in(1..month);
    } else {
        days += shape.days_in(7..month);
    }
    HEBREW_EPOCH + days as f64
}

/// Hebrew date of the civil day containing `jd`.
///
/// Fails with [`CalendarError::Unrepresentable`] for a non-finite `jd` or one
/// whose year would exceed [`YEAR_LIMIT`], with [`CalendarError::BeforeEpoch`]
/// before 1 Tishri AM 1, and with [`CalendarError::SearchBoundExceeded`] if the
/// year or month scan does not settle within its limit.
pub fn jd_to_hebrew(jd: f64) -> Result<(i32, u32, u32), CalendarError> {
    let jd = civil_day_start(jd);
    let unrepresentable = || CalendarError::Unrepresentable {
        calendar: CALENDAR,
        jd,
    };
    if !jd.is_finite() {
        return Err(unrepresentable());
    }
    if jd < HEBREW_FIRST_DAY {
        return Err(CalendarError::BeforeEpoch {
            calendar: CALENDAR,
            jd,
        });
    }

    let year_bound = || CalendarError::SearchBoundExceeded {
        calendar: CALENDAR,
        jd,
        limit: YEAR_SEARCH_LIMIT,
    };
    let estimate = ((jd - HEBREW_EPOCH) * 98_496.0 / 35_975_351.0).floor();
    if estimate >= f64::from(YEAR_LIMIT) {
        return Err(unrepresentable());
    }
    let estimate = estimate as i32;
    let mut year = estimate - 1;
    let mut steps = 0;
    while jd >= hebrew_to_jd(year + 1, 7, 1) {
        year += 1;
        steps += 1;
        if steps > YEAR_SEARCH_LIMIT {
            return Err(year_bound());
        }
    }
    while jd < hebrew_to_jd(year, 7, 1) {
        year -= 1;
        steps += 1;
        if steps > YEAR_SEARCH_LIMIT {
            return Err(year_bound());
        }
    }
    trace!(jd, estimate, year, steps, "hebrew year located");

    let shape = YearShape::of(year);
    let mut month = if jd < hebrew_to_jd(year, 1, 1) { 7 } else { 1 };
    let mut month_steps = 0;
    while jd > hebrew_to_jd(year, month, shape.month_days(month)) {
        month += 1;
        month_steps += 1;
        if month > shape.months() || month_steps > MONTH_SEARCH_LIMIT {
            return Err(CalendarError::SearchBoundExceeded {
                calendar: CALENDAR,
                jd,
                limit: MONTH_SEARCH_LIMIT,
            });
        }
    }

    let day = (jd - hebrew_to_jd(year, month, 1)) as u32 + 1;
    Ok((year, month, day))
}
