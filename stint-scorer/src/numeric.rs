//! Numeric guards shared by every factor calculator.
//!
//! All fallbacks for non-finite statistics go through [`finite_or`] so the
//! substitution policy lives in one place and every substitution is logged
//! the same way.

/// Return `value` when it is finite, otherwise `fallback`.
///
/// `field` names the statistic for the debug log emitted on substitution.
/// Non-finite values are an expected consequence of sparse data, so they
/// are never reported above `debug`.
///
/// # Examples
/// ```
/// use stint_scorer::finite_or;
///
/// assert_eq!(finite_or(3.5, 4.0, "incidents"), 3.5);
/// assert_eq!(finite_or(f64::NAN, 4.0, "incidents"), 4.0);
/// assert_eq!(finite_or(f64::INFINITY, 4.0, "incidents"), 4.0);
/// ```
#[must_use]
pub fn finite_or(value: f64, fallback: f64, field: &'static str) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::debug!("{field} is not finite ({value}); using fallback {fallback}");
        fallback
    }
}

/// Round a `0..=100` score to the nearest integer.
///
/// Values outside the range are clamped; NaN maps to `0`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped to 0..=100 before the cast"
)]
#[must_use]
pub fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Map `value` from `[low, high]` onto `100..=0`, lower being better.
#[expect(
    clippy::float_arithmetic,
    reason = "inverted linear normalisation over a closed range"
)]
pub(crate) fn inverted_percentage(value: f64, low: f64, high: f64) -> f64 {
    let bounded = value.clamp(low, high);
    (1.0 - (bounded - low) / (high - low)) * 100.0
}
