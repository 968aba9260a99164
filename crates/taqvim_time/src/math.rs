//! Floored modulo.

/// Floored modulo: `a - b * floor(a / b)`.
///
/// For positive `b` the result is always in `[0, b)`, whatever the sign of
/// `a`. Rust's `%` truncates toward zero and would return a negative
/// remainder for pre-epoch day counts.
pub fn floor_mod(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}
