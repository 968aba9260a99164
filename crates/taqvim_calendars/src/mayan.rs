//! Mayan Long Count.
//!
//! A positional day count from 0.0.0.0.0 (GMT correlation, JD 584282.5).
//! Place values: baktun 144000 days, katun 7200, tun 360, uinal 20, kin 1.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use taqvim_time::{MAYAN_COUNT_EPOCH, civil_day_start, floor_mod};

use crate::error::CalendarError;

/// Calendar name used in error messages.
pub const CALENDAR: &str = "mayan";

const DAYS_PER_BAKTUN: f64 = 144_000.0;
const DAYS_PER_KATUN: f64 = 7_200.0;
const DAYS_PER_TUN: f64 = 360.0;
const DAYS_PER_UINAL: f64 = 20.0;

/// A Long Count date `baktun.katun.tun.uinal.kin`.
///
/// The baktun is unbounded (negative before the epoch); the other places are
/// bounded by their base: katun, tun and kin below 20, uinal below 18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LongCount {
    /// Periods of 144,000 days.
    pub baktun: i32,
    /// Periods of 7,200 days.
    pub katun: u32,
    /// Periods of 360 days.
    pub tun: u32,
    /// Periods of 20 days.
    pub uinal: u32,
    /// Days.
    pub kin: u32,
}

impl LongCount {
    /// Build a Long Count without validating its places.
    pub const fn new(baktun: i32, katun: u32, tun: u32, uinal: u32, kin: u32) -> Self {
        Self {
            baktun,
            katun,
            tun,
            uinal,
            kin,
        }
    }

    pub fn validate(&self) -> Result<(), CalendarError> {
        for (place, value, limit) in [
            ("katun", self.katun, 20),
            ("tun", self.tun, 20),
            ("uinal", self.uinal, 18),
            ("kin", self.kin, 20),
        ] {
            if value >= limit {
                return Err(CalendarError::InvalidLongCount {
                    place,
                    value,
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Days since 0.0.0.0.0.
    pub fn day_count(&self) -> f64 {
        f64::from(self.baktun) * DAYS_PER_BAKTUN
            + f64::from(self.katun) * DAYS_PER_KATUN
            + f64::from(self.tun) * DAYS_PER_TUN
            + f64::from(self.uinal) * DAYS_PER_UINAL
            + f64::from(self.kin)
    }
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun, self.katun, self.tun, self.uinal, self.kin
        )
    }
}

impl FromStr for LongCount {
    type Err = CalendarError;

    /// Parse `b.k.t.u.k`; the result is not validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| CalendarError::Parse {
            input: s.to_string(),
            reason,
        };
        let parts: Vec<&str> = s.trim().split('.').collect();
        let [b, k, t, u, kin] = parts.as_slice() else {
            return Err(err("expected five dot-separated places"));
        };
        let place = |p: &str| {
            p.parse::<u32>()
                .map_err(|_| err("place is not a non-negative integer"))
        };
        Ok(Self {
            baktun: b.parse().map_err(|_| err("baktun is not an integer"))?,
            katun: place(*k)?,
            tun: place(*t)?,
            uinal: place(*u)?,
            kin: place(*kin)?,
        })
    }
}

/// Julian Day at the start of a Long Count date.
pub fn mayan_to_jd(date: &LongCount) -> f64 {
    MAYAN_COUNT_EPOCH + date.day_count()
}

/// Long Count of the civil day containing `jd`.
pub fn jd_to_mayan(jd: f64) -> LongCount {
    let days = civil_day_start(jd) - MAYAN_COUNT_EPOCH;
    let baktun = (days / DAYS_PER_BAKTUN).floor();
    let rest = floor_mod(days, DAYS_PER_BAKTUN);
    let katun = (rest / DAYS_PER_KATUN).floor();
    let rest = floor_mod(rest, DAYS_PER_KATUN);
    let tun = (rest / DAYS_PER_TUN).floor();
    let rest = floor_mod(rest, DAYS_PER_TUN);
    let uinal = (rest / DAYS_PER_UINAL).floor();
    let kin = floor_mod(rest, DAYS_PER_UINAL);
    LongCount {
        baktun: baktun as i32,
        katun: katun as u32,
        tun: tun as u32,
        uinal: uinal as u32,
        kin: kin as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_thirteenth_baktun() {
        let lc = LongCount::new(13, 0, 0, 0, 0);
        assert_eq!(mayan_to_jd(&lc), 2_456_282.5);
        assert_eq!(jd_to_mayan(2_456_282.5), lc);
    }

    #[test]
    fn known_days() {
        assert_eq!(jd_to_mayan(2_460_509.5), LongCount::new(13, 0, 11, 13, 7));
        assert_eq!(jd_to_mayan(2_451_544.5), LongCount::new(12, 19, 6, 15, 2));
        assert_eq!(jd_to_mayan(1_721_425.5), LongCount::new(7, 17, 18, 13, 3));
        assert_eq!(jd_to_mayan(MAYAN_COUNT_EPOCH), LongCount::new(0, 0, 0, 0, 0));
    }

    #[test]
    fn before_epoch_borrows_from_baktun() {
        let lc = jd_to_mayan(MAYAN_COUNT_EPOCH - 1.0);
        assert_eq!(lc, LongCount::new(-1, 19, 19, 17, 19));
        assert_eq!(mayan_to_jd(&lc), MAYAN_COUNT_EPOCH - 1.0);
        assert!(lc.validate().is_ok());
    }

    #[test]
    fn validation_bounds() {
        assert!(LongCount::new(13, 19, 19, 17, 19).validate().is_ok());
        assert_eq!(
            LongCount::new(13, 0, 20, 0, 0).validate(),
            Err(CalendarError::InvalidLongCount {
                place: "tun",
                value: 20,
                limit: 20
            })
        );
        assert!(LongCount::new(13, 20, 0, 0, 0).validate().is_err());
        assert!(LongCount::new(13, 0, 0, 18, 0).validate().is_err());
        assert!(LongCount::new(13, 0, 0, 0, 20).validate().is_err());
    }

    #[test]
    fn display_and_parse() {
        let lc = LongCount::new(13, 0, 11, 13, 7);
        assert_eq!(lc.to_string(), "13.0.11.13.7");
        assert_eq!("13.0.11.13.7".parse(), Ok(lc));
        assert_eq!("-1.19.19.17.19".parse::<LongCount>().map(|l| l.baktun), Ok(-1));
        assert!("13.0.11.13".parse::<LongCount>().is_err());
        assert!("13.0.x.13.7".parse::<LongCount>().is_err());
    }

    #[test]
    fn consecutive_days_roll_over() {
        let start = mayan_to_jd(&LongCount::new(12, 19, 19, 17, 15));
        for i in 0..20 {
            let jd = start + f64::from(i);
            assert_eq!(mayan_to_jd(&jd_to_mayan(jd)), jd);
        }
        assert_eq!(jd_to_mayan(start + 5.0), LongCount::new(13, 0, 0, 0, 0));
    }
}
