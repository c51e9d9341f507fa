//! Expected position gain.

use stint_core::LicenseLevel;

use super::ScoringContext;
use crate::numeric::{finite_or, to_score};

const MAX_DELTA: f64 = 10.0;
const MAX_RATING_ADJUSTMENT: f64 = 5.0;
const IRATING_PER_POSITION: f64 = 200.0;
const ESTABLISHED_CONFIDENCE_CAP: f64 = 0.8;
const LICENSE_ONLY_CONFIDENCE: f64 = 0.3;
const NON_FINITE_CONFIDENCE: f64 = 0.2;
const NEUTRAL_SCORE: f64 = 50.0;

/// Expected positions gained and how far to trust the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceEstimate {
    /// Expected start position minus finish position.
    pub expected_delta: f64,
    /// Trust in the estimate, `0.0..=1.0`.
    pub confidence: f64,
}

/// Estimate positions gained, choosing the best available evidence.
///
/// In order of preference: the personal record for the pairing, the user's
/// overall average adjusted for the rating gap to the field, and finally a
/// guess from the licence level alone. Non-finite estimates collapse to
/// zero with minimal confidence.
#[expect(
    clippy::float_arithmetic,
    reason = "rating-gap adjustment and confidence ratios"
)]
#[must_use]
pub fn estimate_position_delta(context: &ScoringContext<'_>) -> PerformanceEstimate {
    let raw = if let Some(record) = context.personal_sample() {
        PerformanceEstimate {
            expected_delta: record.avg_position_delta,
            confidence: 1.0,
        }
    } else if let Some(license) = context.established_license() {
        let stats = &context.history.overall_stats;
        let rating_gap = license.irating - context.opportunity.global_stats.avg_strength_of_field;
        let adjustment =
            (rating_gap / IRATING_PER_POSITION).clamp(-MAX_RATING_ADJUSTMENT, MAX_RATING_ADJUSTMENT);
        PerformanceEstimate {
            expected_delta: stats.avg_position_delta + adjustment,
            confidence: (f64::from(stats.total_races) / 10.0).min(ESTABLISHED_CONFIDENCE_CAP),
        }
    } else {
        PerformanceEstimate {
            expected_delta: license_level_bonus(context.opportunity.license_level),
            confidence: LICENSE_ONLY_CONFIDENCE,
        }
    };

    if raw.expected_delta.is_finite() {
        raw
    } else {
        PerformanceEstimate {
            expected_delta: finite_or(raw.expected_delta, 0.0, "performance.expected_delta"),
            confidence: NON_FINITE_CONFIDENCE,
        }
    }
}

/// Positions a driver at `level` is expected to gain with no other data.
///
/// Ranges from `-2` for rookies to `+3` for pro licences.
#[must_use]
pub fn license_level_bonus(level: LicenseLevel) -> f64 {
    f64::from(level.ordinal()) - 3.0
}

/// Performance factor: expected delta mapped onto `0..=100`, pulled toward
/// the neutral midpoint by the estimate's uncertainty.
#[expect(
    clippy::float_arithmetic,
    reason = "linear normalisation and confidence blending"
)]
#[must_use]
pub fn performance_score(context: &ScoringContext<'_>) -> u8 {
    let estimate = estimate_position_delta(context);
    let delta = estimate.expected_delta.clamp(-MAX_DELTA, MAX_DELTA);
    let base = (delta + MAX_DELTA) / (2.0 * MAX_DELTA) * 100.0;
    let blended = base * estimate.confidence + NEUTRAL_SCORE * (1.0 - estimate.confidence);
    to_score(blended)
}
