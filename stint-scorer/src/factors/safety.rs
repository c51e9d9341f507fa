//! Expected incidents, inverted into a safety score.

use super::ScoringContext;
use crate::numeric::{finite_or, inverted_percentage, to_score};
use crate::race_length_multiplier;

/// Incidents per race assumed when no usable figure exists.
pub const DEFAULT_EXPECTED_INCIDENTS: f64 = 4.0;

/// Incident counts at or above this score zero. Wide enough to absorb the
/// doubled exposure of long races.
const MAX_INCIDENTS: f64 = 20.0;
const USER_RATE_WEIGHT: f64 = 0.6;
const GLOBAL_RATE_WEIGHT: f64 = 0.4;
const SAFETY_RATING_FLOOR: f64 = 2.0;
const SAFETY_RATING_SPAN: f64 = 3.0;
const SAFETY_RATING_DISCOUNT: f64 = 0.3;

/// Expected incidents for the user in this race.
///
/// A personal record with enough races is used as-is, since it already
/// reflects the pairing's usual race length. Otherwise the population rate,
/// blended with the user's own rate and discounted for a good safety rating
/// when the user is established, is scaled by race length.
#[expect(
    clippy::float_arithmetic,
    reason = "incident blending and safety-rating discount"
)]
#[must_use]
pub fn expected_incidents(context: &ScoringContext<'_>) -> f64 {
    if let Some(record) = context.personal_sample() {
        return record.avg_incidents;
    }

    let multiplier = race_length_multiplier(context.opportunity.race_length_minutes);
    let global_rate = context.opportunity.global_stats.avg_incidents_per_race;
    let base = context.established_license().map_or(global_rate, |license| {
        let user_rate = context.history.overall_stats.avg_incidents_per_race;
        let blended = user_rate * USER_RATE_WEIGHT + global_rate * GLOBAL_RATE_WEIGHT;
        // `f64::max` would swallow a NaN rating; it must reach the final guard.
        let headroom = license.safety_rating - SAFETY_RATING_FLOOR;
        let rating_factor = if headroom < 0.0 {
            0.0
        } else {
            headroom / SAFETY_RATING_SPAN
        };
        blended * (1.0 - rating_factor * SAFETY_RATING_DISCOUNT)
    });
    base * multiplier
}

/// Safety factor: fewer expected incidents score higher.
#[must_use]
pub fn safety_score(context: &ScoringContext<'_>) -> u8 {
    let incidents = finite_or(
        expected_incidents(context),
        DEFAULT_EXPECTED_INCIDENTS,
        "safety.expected_incidents",
    );
    to_score(inverted_percentage(incidents, 0.0, MAX_INCIDENTS))
}
