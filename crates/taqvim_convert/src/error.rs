//! Error types for cross-calendar conversion.

use taqvim_calendars::CalendarError;
use taqvim_time::TimeError;

use crate::calendar::Calendar;

/// Errors surfaced by the conversion facade.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The date does not exist in its calendar.
    #[error("invalid date: {0}")]
    InvalidDate(CalendarError),

    /// The calendar name is not recognised.
    #[error("unsupported calendar '{name}'")]
    UnsupportedCalendar { name: String },

    /// A `<source>_to_<target>` identifier names an unknown calendar or is
    /// malformed.
    #[error("unsupported conversion '{conversion}'")]
    UnsupportedCalendarPair { conversion: String },

    /// An iterative lookup did not settle within its step limit.
    #[error("{calendar}: lookup for Julian Day {jd} exceeded {limit} steps")]
    SearchBoundExceeded {
        calendar: &'static str,
        jd: f64,
        limit: u32,
    },

    /// The Julian Day is not finite, lies outside the supported range, or
    /// precedes the first day of the target calendar.
    #[error("Julian Day {jd} is out of range ({detail})")]
    OutOfRange { jd: f64, detail: String },

    /// A Long Count was given for a year/month/day calendar, or the reverse.
    #[error("{calendar} does not take a {given} date")]
    DateShapeMismatch {
        calendar: Calendar,
        given: &'static str,
    },
}

impl ConvertError {
    /// Range error for `jd` from the Julian Day bounds check.
    pub(crate) fn from_time(jd: f64, err: TimeError) -> Self {
        let detail = match err {
            TimeError::OutOfRange { min, max, .. } => format!("supported range is [{min}, {max}]"),
            TimeError::NotFinite => "not a finite number".to_string(),
            other => other.to_string(),
        };
        Self::OutOfRange { jd, detail }
    }
}

impl From<CalendarError> for ConvertError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::BeforeEpoch { calendar, jd } => Self::OutOfRange {
                jd,
                detail: format!("precedes the first day of the {calendar} calendar"),
            },
            CalendarError::Unrepresentable { calendar, jd } => Self::OutOfRange {
                jd,
                detail: format!("outside the representable range of the {calendar} calendar"),
            },
            CalendarError::SearchBoundExceeded {
                calendar,
                jd,
                limit,
            } => Self::SearchBoundExceeded {
                calendar,
                jd,
                limit,
            },
            other => Self::InvalidDate(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_wraps_calendar_message() {
        let err = ConvertError::from(CalendarError::InvalidDay {
            calendar: "gregorian",
            year: 2023,
            month: 2,
            day: 29,
            max: 28,
        });
        assert!(matches!(err, ConvertError::InvalidDate(_)));
        assert_eq!(
            err.to_string(),
            "invalid date: gregorian: invalid day 29 for 2023-02 (max 28)"
        );
    }

    #[test]
    fn before_epoch_becomes_out_of_range() {
        let err = ConvertError::from(CalendarError::BeforeEpoch {
            calendar: "hebrew",
            jd: 100.5,
        });
        assert_eq!(
            err.to_string(),
            "Julian Day 100.5 is out of range (precedes the first day of the hebrew calendar)"
        );
    }

    #[test]
    fn unrepresentable_becomes_out_of_range() {
        let err = ConvertError::from(CalendarError::Unrepresentable {
            calendar: "hebrew",
            jd: f64::NAN,
        });
        assert!(matches!(err, ConvertError::OutOfRange { .. }));
        assert_eq!(
            err.to_string(),
            "Julian Day NaN is out of range (outside the representable range of the hebrew calendar)"
        );
    }

    #[test]
    fn search_bound_is_preserved() {
        let err = ConvertError::from(CalendarError::SearchBoundExceeded {
            calendar: "hebrew",
            jd: 1.5,
            limit: 8,
        });
        assert_eq!(
            err,
            ConvertError::SearchBoundExceeded {
                calendar: "hebrew",
                jd: 1.5,
                limit: 8
            }
        );
    }

    #[test]
    fn time_errors_become_out_of_range() {
        let err = ConvertError::from_time(
            -10.0,
            TimeError::OutOfRange {
                jd: -10.0,
                min: -0.5,
                max: 5_373_483.5,
            },
        );
        assert_eq!(
            err.to_string(),
            "Julian Day -10 is out of range (supported range is [-0.5, 5373483.5])"
        );
        let err = ConvertError::from_time(f64::INFINITY, TimeError::NotFinite);
        assert_eq!(
            err.to_string(),
            "Julian Day inf is out of range (not a finite number)"
        );
    }

    #[test]
    fn shape_mismatch_message() {
        let err = ConvertError::DateShapeMismatch {
            calendar: Calendar::MayanLongCount,
            given: "year/month/day",
        };
        assert_eq!(
            err.to_string(),
            "mayan_long_count does not take a year/month/day date"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ConvertError>();
    }
}
