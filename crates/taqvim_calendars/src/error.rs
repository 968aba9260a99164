//! Error types for calendar arithmetic.

/// Errors from calendar validation, parsing and iterative lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The year does not exist in the calendar (e.g. Julian year 0) or lies
    /// beyond the supported magnitude.
    #[error("{calendar}: year {year} does not exist")]
    InvalidYear {
        /// Calendar name.
        calendar: &'static str,
        /// The rejected year.
        year: i32,
    },

    /// The month is outside `1..=max` for the given year.
    #[error("{calendar}: invalid month {month} for year {year} (must be 1..={max})")]
    InvalidMonth {
        /// Calendar name.
        calendar: &'static str,
        /// Year the month was checked against.
        year: i32,
        /// The rejected month.
        month: u32,
        /// Months in that year.
        max: u32,
    },

    /// The day is outside `1..=max` for the given year and month.
    #[error("{calendar}: invalid day {day} for {year}-{month:02} (max {max})")]
    InvalidDay {
        /// Calendar name.
        calendar: &'static str,
        /// Year of the date.
        year: i32,
        /// Month of the date.
        month: u32,
        /// The rejected day.
        day: u32,
        /// Days in that month.
        max: u32,
    },

    /// A Long Count place value is out of range.
    #[error("mayan: invalid {place} {value} (must be below {limit})")]
    InvalidLongCount {
        /// Place name (katun, tun, uinal, kin).
        place: &'static str,
        /// The rejected value.
        value: u32,
        /// Exclusive upper bound for the place.
        limit: u32,
    },

    /// The Julian Day falls before the first representable day of the calendar.
    #[error("{calendar}: Julian Day {jd} precedes the first day of the calendar")]
    BeforeEpoch {
        /// Calendar name.
        calendar: &'static str,
        /// The rejected Julian Day.
        jd: f64,
    },

    /// The Julian Day is not finite or maps beyond the supported year range.
    #[error("{calendar}: Julian Day {jd} is outside the representable range")]
    Unrepresentable {
        /// Calendar name.
        calendar: &'static str,
        /// The rejected Julian Day.
        jd: f64,
    },

    /// An iterative lookup did not settle within its step limit.
    #[error("{calendar}: lookup for Julian Day {jd} exceeded {limit} steps")]
    SearchBoundExceeded {
        /// Calendar name.
        calendar: &'static str,
        /// Julian Day being converted.
        jd: f64,
        /// Step limit that was hit.
        limit: u32,
    },

    /// A textual date could not be parsed.
    #[error("cannot parse date '{input}': {reason}")]
    Parse {
        /// The input text.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl CalendarError {
    /// Whether the error describes a date that does not exist in its calendar.
    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear { .. }
                | Self::InvalidMonth { .. }
                | Self::InvalidDay { .. }
                | Self::InvalidLongCount { .. }
                | Self::Parse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_day_message() {
        let err = CalendarError::InvalidDay {
            calendar: "persian",
            year: 1403,
            month: 12,
            day: 30,
            max: 29,
        };
        assert_eq!(
            err.to_string(),
            "persian: invalid day 30 for 1403-12 (max 29)"
        );
    }

    #[test]
    fn invalid_month_message() {
        let err = CalendarError::InvalidMonth {
            calendar: "hebrew",
            year: 5783,
            month: 13,
            max: 12,
        };
        assert_eq!(
            err.to_string(),
            "hebrew: invalid month 13 for year 5783 (must be 1..=12)"
        );
    }

    #[test]
    fn search_bound_message() {
        let err = CalendarError::SearchBoundExceeded {
            calendar: "hebrew",
            jd: 2_460_509.5,
            limit: 8,
        };
        assert_eq!(
            err.to_string(),
            "hebrew: lookup for Julian Day 2460509.5 exceeded 8 steps"
        );
    }

    #[test]
    fn unrepresentable_message() {
        let err = CalendarError::Unrepresentable {
            calendar: "hebrew",
            jd: 1e12,
        };
        assert_eq!(
            err.to_string(),
            "hebrew: Julian Day 1000000000000 is outside the representable range"
        );
        assert!(!err.is_invalid_date());
    }

    #[test]
    fn invalid_date_classification() {
        assert!(
            CalendarError::InvalidYear {
                calendar: "julian",
                year: 0
            }
            .is_invalid_date()
        );
        assert!(
            !CalendarError::BeforeEpoch {
                calendar: "hebrew",
                jd: 0.5
            }
            .is_invalid_date()
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
