//! Year/month/day triple shared by the arithmetic calendars.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Largest accepted year magnitude.
///
/// Keeps the intermediate arithmetic of every calendar inside `i32`/`f64`
/// exactness; all years that map into the supported JD range are far below it.
pub const YEAR_LIMIT: i32 = 1_000_000;

/// A calendar date as year, month and day.
///
/// The triple is calendar-agnostic; which calendar it belongs to is carried
/// alongside it by the caller. Months and days are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    /// Signed year; whether 0 exists depends on the calendar.
    pub year: i32,
    /// Month, 1-based.
    pub month: u32,
    /// Day of the month, 1-based.
    pub day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl From<(i32, u32, u32)> for CivilDate {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        Self { year, month, day }
    }
}

impl From<CivilDate> for (i32, u32, u32) {
    fn from(d: CivilDate) -> Self {
        (d.year, d.month, d.day)
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", self.year.unsigned_abs(), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Parse `Y-M-D`, with an optional leading `-` or `+` on the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| CalendarError::Parse {
            input: s.to_string(),
            reason,
        };
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = body.split('-');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err("expected YEAR-MONTH-DAY"));
        };

        let year: i32 = y.parse().map_err(|_| err("year is not an integer"))?;
        let month: u32 = m.parse().map_err(|_| err("month is not a positive integer"))?;
        let day: u32 = d.parse().map_err(|_| err("day is not a positive integer"))?;
        Ok(Self {
            year: if negative { -year } else { year },
            month,
            day,
        })
    }
}

/// Shared month/day range check.
///
/// `month_days` is only consulted once the month is known to be valid.
pub(crate) fn check_month_day(
    calendar: &'static str,
    year: i32,
    month: u32,
    day: u32,
    months_in_year: u32,
    month_days: impl FnOnce(u32) -> u32,
) -> Result<(), CalendarError> {
    if !(1..=months_in_year).contains(&month) {
        return Err(CalendarError::InvalidMonth {
            calendar,
            year,
            month,
            max: months_in_year,
        });
    }
    let max = month_days(month);
    if !(1..=max).contains(&day) {
        return Err(CalendarError::InvalidDay {
            calendar,
            year,
            month,
            day,
            max,
        });
    }
    Ok(())
}

/// Reject years beyond [`YEAR_LIMIT`], and year 0 where `has_year_zero` is false.
pub(crate) fn check_year(
    calendar: &'static str,
    year: i32,
    has_year_zero: bool,
) -> Result<(), CalendarError> {
    if year.unsigned_abs() > YEAR_LIMIT.unsigned_abs() || (year == 0 && !has_year_zero) {
        return Err(CalendarError::InvalidYear { calendar, year });
    }
    Ok(())
}
