//! Rounding utilities shared by every percentage and score computation.
//!
//! A single rounding mode (half-up, i.e. ties away from zero) is used
//! everywhere so the metrics engine and the checklist aggregator cannot
//! drift apart. All values rounded here are non-negative.

/// Round half-up to the nearest integer.
pub fn round_half_up(value: f64) -> f64 {
    value.round()
}

/// Round half-up to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Whole-number percentage of `count` over `total`.
///
/// An empty population is treated as a denominator of 1, yielding 0% rather
/// than NaN.
pub fn percentage(count: usize, total: usize) -> u32 {
    let denominator = total.max(1) as f64;
    round_half_up(100.0 * count as f64 / denominator) as u32
}
