//! Error types for Julian Day handling.

/// Errors from Julian Day validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The Julian Day lies outside the supported range.
    #[error("Julian Day {jd} is outside the supported range [{min}, {max}]")]
    OutOfRange {
        /// The rejected Julian Day.
        jd: f64,
        /// Lowest supported Julian Day.
        min: f64,
        /// Highest supported Julian Day.
        max: f64,
    },

    /// The Julian Day is NaN or infinite.
    #[error("Julian Day is not a finite number")]
    NotFinite,
}
