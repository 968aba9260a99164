//! The set of supported calendars and their textual codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// A supported calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    Gregorian,
    Julian,
    #[serde(alias = "hijri")]
    Islamic,
    #[serde(alias = "jalali", alias = "shamsi", alias = "solar_hijri")]
    Persian,
    Hebrew,
    #[serde(alias = "mayan")]
    MayanLongCount,
    #[serde(alias = "indian", alias = "saka")]
    IndianCivil,
}

/// All calendars, in display order.
pub const ALL_CALENDARS: [Calendar; 7] = [
    Calendar::Gregorian,
    Calendar::Julian,
    Calendar::Islamic,
    Calendar::Persian,
    Calendar::Hebrew,
    Calendar::MayanLongCount,
    Calendar::IndianCivil,
];

impl Calendar {
    pub const ALL: [Calendar; 7] = ALL_CALENDARS;

    /// Canonical lowercase code, as used in `<source>_to_<target>` strings.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Julian => "julian",
            Self::Islamic => "islamic",
            Self::Persian => "persian",
            Self::Hebrew => "hebrew",
            Self::MayanLongCount => "mayan_long_count",
            Self::IndianCivil => "indian_civil",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gregorian => "Gregorian",
            Self::Julian => "Julian",
            Self::Islamic => "Islamic",
            Self::Persian => "Persian",
            Self::Hebrew => "Hebrew",
            Self::MayanLongCount => "Mayan Long Count",
            Self::IndianCivil => "Indian Civil",
        }
    }

    /// Alternative codes accepted on input.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Islamic => &["hijri"],
            Self::Persian => &["jalali", "shamsi", "solar_hijri"],
            Self::MayanLongCount => &["mayan"],
            Self::IndianCivil => &["indian", "saka"],
            _ => &[],
        }
    }

    /// Look up a calendar by code or alias, ignoring ASCII case and treating
    /// `-` like `_`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase().replace('-', "_");
        ALL_CALENDARS
            .into_iter()
            .find(|c| c.code() == code || c.aliases().contains(&code.as_str()))
    }

    /// Whether dates in this calendar are Long Counts rather than
    /// year/month/day triples.
    pub const fn is_long_count(self) -> bool {
        matches!(self, Self::MayanLongCount)
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Calendar {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ConvertError::UnsupportedCalendar {
            name: s.to_string(),
        })
    }
}

/// Parse a `<source>_to_<target>` conversion identifier such as
/// `gregorian_to_persian`.
pub fn parse_conversion_type(conversion: &str) -> Result<(Calendar, Calendar), ConvertError> {
    let unsupported = || ConvertError::UnsupportedCalendarPair {
        conversion: conversion.to_string(),
    };
    let (source, target) = conversion.trim().split_once("_to_").ok_or_else(unsupported)?;
    match (Calendar::from_code(source), Calendar::from_code(target)) {
        (Some(s), Some(t)) => Ok((s, t)),
        _ => Err(unsupported()),
    }
}
