//! Finishing position spread, inverted into a consistency score.

use super::ScoringContext;
use crate::numeric::{finite_or, inverted_percentage, to_score};

const DEFAULT_STD_DEV: f64 = 5.0;
const MIN_STD_DEV: f64 = 1.0;
const MAX_STD_DEV: f64 = 15.0;

/// Consistency factor: a tighter spread of finishing positions scores
/// higher. Uses the personal spread when the pairing has enough races,
/// otherwise the population average.
#[must_use]
pub fn consistency_score(context: &ScoringContext<'_>) -> u8 {
    let spread = context.personal_sample().map_or(
        context.opportunity.global_stats.avg_finish_position_std_dev,
        |record| record.finish_position_std_dev,
    );
    let std_dev = finite_or(spread, DEFAULT_STD_DEV, "consistency.finish_position_std_dev");
    to_score(inverted_percentage(std_dev, MIN_STD_DEV, MAX_STD_DEV))
}
