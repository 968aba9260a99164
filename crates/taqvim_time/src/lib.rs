//! Julian Day arithmetic shared by every taqvim calendar.
//!
//! This crate provides:
//! - A floored modulo that stays non-negative for negative dividends
//! - The epoch table: each calendar's day 1 (or day 0) as a Julian Day
//! - Civil-day normalisation and the supported Julian Day range
//! - Modified Julian Date and Unix day-count conversions
//! - The Sunday-based weekday function and its English/Persian labels
//!
//! Julian Days are `f64` values offset by 0.5: a civil date starts at
//! midnight, which is half a day after the noon-based JD reference point.

pub mod epoch;
pub mod error;
pub mod julian_day;
pub mod math;
pub mod weekday;

pub use epoch::{
    GREGORIAN_EPOCH, HEBREW_EPOCH, INDIAN_CIVIL_YEAR_OFFSET, ISLAMIC_EPOCH, J0000, J1970,
    JMJD, JULIAN_EPOCH, MAYAN_COUNT_EPOCH, PERSIAN_EPOCH,
};
pub use error::TimeError;
pub use julian_day::{
    JD_MAX, JD_MIN, check_jd, civil_day_start, jd_to_mjd, jd_to_unix_days, mjd_to_jd,
    unix_days_to_jd,
};
pub use math::floor_mod;
pub use weekday::{ALL_WEEKDAYS, Locale, Weekday, weekday_index};
