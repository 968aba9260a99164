//! Calendar-to-calendar conversion through the Julian Day.
//!
//! Every conversion is `to_jd` in the source calendar followed by `from_jd`
//! in the target calendar. Inputs are validated, and Julian Days outside
//! the supported range are rejected with a typed error instead of producing
//! a best-effort date.
//!
//! ```
//! use taqvim_convert::{Calendar, CalendarDate, convert};
//!
//! let r = convert(Calendar::Gregorian, Calendar::Persian, &CalendarDate::ymd(2024, 7, 18))?;
//! assert_eq!(r.date, CalendarDate::ymd(1403, 4, 28));
//! # Ok::<(), taqvim_convert::ConvertError>(())
//! ```

pub mod calendar;
pub mod convert;
pub mod date;
pub mod error;
pub mod request;

pub use calendar::{ALL_CALENDARS, Calendar, parse_conversion_type};
pub use convert::{from_jd, is_leap_date, is_leap_year, leap_year_label, to_jd};
pub use date::CalendarDate;
pub use error::ConvertError;
pub use request::{
    ConversionRequest, ConversionResult, TableEntry, convert, convert_request, describe,
    render_all,
};
pub use taqvim_calendars::{CivilDate, LongCount, YEAR_LIMIT};
pub use taqvim_time::{Locale, Weekday};
