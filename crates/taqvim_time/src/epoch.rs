//! Calendar epochs expressed as Julian Days.
//!
//! The `.5` on every value places the epoch at the midnight that begins the
//! civil day; the JD count itself starts at noon.

/// Day 0 of the proleptic Gregorian count: 0000-12-31, the eve of 0001-01-01.
pub const J0000: f64 = 1_721_424.5;

/// Unix epoch, Gregorian 1970-01-01.
pub const J1970: f64 = 2_440_587.5;

/// Epoch of the Modified Julian Date (MJD 0 = Gregorian 1858-11-17).
pub const JMJD: f64 = 2_400_000.5;

/// Gregorian 0001-01-01.
pub const GREGORIAN_EPOCH: f64 = 1_721_425.5;

/// Julian 0001-01-01 (two days before Gregorian 0001-01-01).
pub const JULIAN_EPOCH: f64 = 1_721_423.5;

/// Hebrew reckoning base: the day before the molad of Tishri AM 1.
///
/// 1 Tishri AM 1 itself falls two days later, on JD 347997.5.
pub const HEBREW_EPOCH: f64 = 347_995.5;

/// Tabular Islamic day 0, the eve of 1 Muharram AH 1.
pub const ISLAMIC_EPOCH: f64 = 1_948_439.5;

/// Persian (Solar Hijri) 0001-01-01.
pub const PERSIAN_EPOCH: f64 = 1_948_320.5;

/// Mayan Long Count 0.0.0.0.0 (GMT correlation).
pub const MAYAN_COUNT_EPOCH: f64 = 584_282.5;

/// Offset from a Saka (Indian Civil) year to the Gregorian year in which it
/// begins.
pub const INDIAN_CIVIL_YEAR_OFFSET: i32 = 78;
