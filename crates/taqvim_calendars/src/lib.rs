//! Arithmetic calendars routed through the Julian Day.
//!
//! One module per calendar, each providing:
//! - a leap-year predicate and a month-length rule
//! - validation of a year/month/day triple
//! - `*_to_jd` giving the Julian Day at the start of a date
//! - `jd_to_*` giving the date of the civil day containing a Julian Day
//!
//! Conversion functions assume validated input; the `validate_*` functions
//! (or [`LongCount::validate`]) should be called first on untrusted dates.

pub mod date;
pub mod error;
pub mod gregorian;
pub mod hebrew;
pub mod indian;
pub mod islamic;
pub mod julian;
pub mod mayan;
pub mod persian;

pub use date::{CivilDate, YEAR_LIMIT};
pub use error::CalendarError;
pub use gregorian::{
    gregorian_month_days, gregorian_to_jd, is_leap_gregorian, jd_to_gregorian, validate_gregorian,
};
pub use hebrew::{
    HEBREW_FIRST_DAY, MONTH_SEARCH_LIMIT, YEAR_SEARCH_LIMIT, hebrew_month_days,
    hebrew_months_in_year, hebrew_to_jd, hebrew_year_days, is_leap_hebrew, jd_to_hebrew,
    validate_hebrew,
};
pub use indian::{
    indian_civil_month_days, indian_civil_to_jd, is_leap_indian_civil, jd_to_indian_civil,
    validate_indian_civil,
};
pub use islamic::{
    is_leap_islamic, islamic_month_days, islamic_to_jd, jd_to_islamic, validate_islamic,
};
pub use julian::{is_leap_julian, jd_to_julian, julian_month_days, julian_to_jd, validate_julian};
pub use mayan::{LongCount, jd_to_mayan, mayan_to_jd};
pub use persian::{
    is_leap_persian, jd_to_persian, persian_month_days, persian_to_jd, validate_persian,
};
