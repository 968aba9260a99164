//! A date in any supported calendar.

use std::fmt;

use serde::{Deserialize, Serialize};
use taqvim_calendars::{CivilDate, LongCount};

/// Either a year/month/day triple or a Mayan Long Count.
///
/// Serialized untagged, so JSON carries `year`/`month`/`day` or the five
/// Long Count places directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalendarDate {
    Civil(CivilDate),
    LongCount(LongCount),
}

impl CalendarDate {
    pub const fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self::Civil(CivilDate::new(year, month, day))
    }

    /// The year, for calendars that have one.
    pub const fn year(&self) -> Option<i32> {
        match self {
            Self::Civil(d) => Some(d.year),
            Self::LongCount(_) => None,
        }
    }

    pub const fn as_civil(&self) -> Option<&CivilDate> {
        match self {
            Self::Civil(d) => Some(d),
            Self::LongCount(_) => None,
        }
    }

    pub const fn as_long_count(&self) -> Option<&LongCount> {
        match self {
            Self::LongCount(lc) => Some(lc),
            Self::Civil(_) => None,
        }
    }

    pub(crate) const fn shape(&self) -> &'static str {
        match self {
            Self::Civil(_) => "year/month/day",
            Self::LongCount(_) => "Long Count",
        }
    }
}

impl From<CivilDate> for CalendarDate {
    fn from(d: CivilDate) -> Self {
        Self::Civil(d)
    }
}

impl From<LongCount> for CalendarDate {
    fn from(lc: LongCount) -> Self {
        Self::LongCount(lc)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Civil(d) => fmt::Display::fmt(d, f),
            Self::LongCount(lc) => fmt::Display::fmt(lc, f),
        }
    }
}
