//! Day of the week from a Julian Day.
//!
//! Index 0 is Sunday. Names are available in English and Persian.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::math::floor_mod;

/// Label language for weekday and leap-year names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "fa" | "persian" | "farsi" => Ok(Self::Fa),
            other => Err(format!("unknown locale '{other}' (expected 'en' or 'fa')")),
        }
    }
}

/// The seven days of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All weekdays in index order (0 = Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

const EN_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const FA_NAMES: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
    "شنبه",
];

/// Weekday index (0 = Sunday .. 6 = Saturday) of the civil day containing `jd`.
///
/// `floor_mod(floor(jd + 1.5), 7)`.
pub fn weekday_index(jd: f64) -> u8 {
    floor_mod((jd + 1.5).floor(), 7.0) as u8
}

impl Weekday {
    /// Weekday of the civil day containing `jd`.
    pub fn from_jd(jd: f64) -> Self {
        ALL_WEEKDAYS[weekday_index(jd) as usize]
    }

    /// Weekday for a 0-based Sunday index, `None` above 6.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_WEEKDAYS.get(index as usize).copied()
    }

    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Localised name.
    pub fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => EN_NAMES[self.index() as usize],
            Locale::Fa => FA_NAMES[self.index() as usize],
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Locale::En))
    }
}
