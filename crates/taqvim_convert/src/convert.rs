//! Conversion through the Julian Day: validate, `*_to_jd`, then `jd_to_*`.

use taqvim_calendars::{
    CivilDate, gregorian_to_jd, hebrew_to_jd, indian_civil_to_jd, is_leap_gregorian,
    is_leap_hebrew, is_leap_indian_civil, is_leap_islamic, is_leap_julian, is_leap_persian,
    islamic_to_jd, jd_to_gregorian, jd_to_hebrew, jd_to_indian_civil, jd_to_islamic,
    jd_to_julian, jd_to_mayan, jd_to_persian, julian_to_jd, mayan_to_jd, persian_to_jd,
    validate_gregorian, validate_hebrew, validate_indian_civil, validate_islamic, validate_julian,
    validate_persian,
};
use taqvim_time::{Locale, check_jd};
use tracing::debug;

use crate::calendar::Calendar;
use crate::date::CalendarDate;
use crate::error::ConvertError;

fn check_range(jd: f64) -> Result<f64, ConvertError> {
    check_jd(jd).map_err(|e| ConvertError::from_time(jd, e))
}

fn civil_to_jd(calendar: Calendar, date: &CivilDate) -> Result<f64, ConvertError> {
    let CivilDate { year, month, day } = *date;
    let jd = match calendar {
        Calendar::Gregorian => {
            validate_gregorian(year, month, day)?;
            gregorian_to_jd(year, month, day)
        }
        Calendar::Julian => {
            validate_julian(year, month, day)?;
            julian_to_jd(year, month, day)
        }
        Calendar::Islamic => {
            validate_islamic(year, month, day)?;
            islamic_to_jd(year, month, day)
        }
        Calendar::Persian => {
            validate_persian(year, month, day)?;
            persian_to_jd(year, month, day)
        }
        Calendar::Hebrew => {
            validate_hebrew(year, month, day)?;
            hebrew_to_jd(year, month, day)
        }
        Calendar::IndianCivil => {
            validate_indian_civil(year, month, day)?;
            indian_civil_to_jd(year, month, day)
        }
        Calendar::MayanLongCount => {
            return Err(ConvertError::DateShapeMismatch {
                calendar,
                given: "year/month/day",
            });
        }
    };
    Ok(jd)
}

/// Julian Day at the start of `date` in `calendar`.
///
/// The date is validated first; the resulting Julian Day must fall inside
/// the supported range.
pub fn to_jd(calendar: Calendar, date: &CalendarDate) -> Result<f64, ConvertError> {
    let jd = match (calendar, date) {
        (Calendar::MayanLongCount, CalendarDate::LongCount(lc)) => {
            lc.validate()?;
            mayan_to_jd(lc)
        }
        (_, CalendarDate::Civil(d)) => civil_to_jd(calendar, d)?,
        (_, CalendarDate::LongCount(_)) => {
            return Err(ConvertError::DateShapeMismatch {
                calendar,
                given: date.shape(),
            });
        }
    };
    check_range(jd)?;
    debug!(%calendar, %date, jd, "date to julian day");
    Ok(jd)
}

/// Date in `calendar` of the civil day containing `jd`.
pub fn from_jd(calendar: Calendar, jd: f64) -> Result<CalendarDate, ConvertError> {
    check_range(jd)?;
    let date = match calendar {
        Calendar::Gregorian => CalendarDate::from(CivilDate::from(jd_to_gregorian(jd))),
        Calendar::Julian => CivilDate::from(jd_to_julian(jd)).into(),
        Calendar::Islamic => CivilDate::from(jd_to_islamic(jd)).into(),
        Calendar::Persian => CivilDate::from(jd_to_persian(jd)).into(),
        Calendar::Hebrew => CivilDate::from(jd_to_hebrew(jd)?).into(),
        Calendar::MayanLongCount => jd_to_mayan(jd).into(),
        Calendar::IndianCivil => CivilDate::from(jd_to_indian_civil(jd)).into(),
    };
    debug!(%calendar, %date, jd, "julian day to date");
    Ok(date)
}

/// Leap status of `year` in `calendar`. The Long Count has no leap years.
pub fn is_leap_year(calendar: Calendar, year: i32) -> bool {
    match calendar {
        Calendar::Gregorian => is_leap_gregorian(year),
        Calendar::Julian => is_leap_julian(year),
        Calendar::Islamic => is_leap_islamic(year),
        Calendar::Persian => is_leap_persian(year),
        Calendar::Hebrew => is_leap_hebrew(year),
        Calendar::MayanLongCount => false,
        Calendar::IndianCivil => is_leap_indian_civil(year),
    }
}

/// Leap status of the year a date falls in.
pub fn is_leap_date(calendar: Calendar, date: &CalendarDate) -> bool {
    date.year().is_some_and(|y| is_leap_year(calendar, y))
}

/// Label for a leap status: "leap year"/"common year" or the Persian
/// equivalents.
pub const fn leap_year_label(is_leap: bool, locale: Locale) -> &'static str {
    match (locale, is_leap) {
        (Locale::En, true) => "leap year",
        (Locale::En, false) => "common year",
        (Locale::Fa, true) => "سال کبیسه",
        (Locale::Fa, false) => "سال عادی",
    }
}
