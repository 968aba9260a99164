//! Request/result records and the one-call conversion entry points.

use serde::{Deserialize, Serialize};
use taqvim_time::{Weekday, weekday_index};
use tracing::debug;

use crate::calendar::{ALL_CALENDARS, Calendar};
use crate::convert::{from_jd, is_leap_date, to_jd};
use crate::date::CalendarDate;
use crate::error::ConvertError;

/// A conversion request as received at the boundary.
///
/// JSON shape: `{"source": "gregorian", "target": "persian", "year": 2024,
/// "month": 7, "day": 18}`, or the five Long Count places instead of
/// year/month/day when the source is `mayan_long_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub source: Calendar,
    pub target: Calendar,
    #[serde(flatten)]
    pub date: CalendarDate,
}

/// A date in one calendar together with its day-level attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub calendar: Calendar,
    #[serde(flatten)]
    pub date: CalendarDate,
    /// Julian Day at the start of the date.
    pub jd: f64,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekday: u8,
    pub weekday_name: Weekday,
    pub is_leap_year: bool,
}

/// Express the civil day containing `jd` in `calendar`.
pub fn describe(calendar: Calendar, jd: f64) -> Result<ConversionResult, ConvertError> {
    let date = from_jd(calendar, jd)?;
    let jd = to_jd(calendar, &date)?;
    Ok(ConversionResult {
        calendar,
        date,
        jd,
        weekday: weekday_index(jd),
        weekday_name: Weekday::from_jd(jd),
        is_leap_year: is_leap_date(calendar, &date),
    })
}

/// Convert `date` from `source` to `target`.
pub fn convert(
    source: Calendar,
    target: Calendar,
    date: &CalendarDate,
) -> Result<ConversionResult, ConvertError> {
    let jd = to_jd(source, date)?;
    let result = describe(target, jd)?;
    debug!(%source, %target, %date, result = %result.date, "converted");
    Ok(result)
}

/// Run a deserialised [`ConversionRequest`] through [`convert`].
pub fn convert_request(request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
    convert(request.source, request.target, &request.date)
}

/// One calendar's reading of a Julian Day in a [`render_all`] table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    pub calendar: Calendar,
    pub outcome: Result<ConversionResult, ConvertError>,
}

/// The civil day containing `jd` in every calendar.
///
/// Fails only if `jd` itself is out of range; a calendar that cannot
/// represent the day (Hebrew before its first year) carries its own error.
pub fn render_all(jd: f64) -> Result<Vec<TableEntry>, ConvertError> {
    // Range-check once so the table is all-or-nothing on bad input.
    from_jd(Calendar::Gregorian, jd)?;
    Ok(ALL_CALENDARS
        .into_iter()
        .map(|calendar| TableEntry {
            calendar,
            outcome: describe(calendar, jd),
        })
        .collect())
}
