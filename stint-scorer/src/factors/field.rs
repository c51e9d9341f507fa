//! Factors derived from the population statistics of the field.

use stint_core::RacingOpportunity;

use crate::numeric::{finite_or, inverted_percentage, to_score};

const MIN_SOF_VARIABILITY: f64 = 50.0;
const MAX_SOF_VARIABILITY: f64 = 500.0;
const MAX_ATTRITION_RATE: f64 = 50.0;

// Unobserved population figures fall back to the midpoint of their range.
const DEFAULT_SOF_VARIABILITY: f64 = 275.0;
const DEFAULT_ATTRITION_RATE: f64 = 25.0;

/// Predictability factor: a steadier strength of field between sessions
/// scores higher.
#[must_use]
pub fn predictability_score(opportunity: &RacingOpportunity) -> u8 {
    let variability = finite_or(
        opportunity.global_stats.strength_of_field_variability,
        DEFAULT_SOF_VARIABILITY,
        "predictability.strength_of_field_variability",
    );
    to_score(inverted_percentage(
        variability,
        MIN_SOF_VARIABILITY,
        MAX_SOF_VARIABILITY,
    ))
}

/// Attrition factor (inverted risk): fewer retirements score higher.
#[must_use]
pub fn attrition_risk_score(opportunity: &RacingOpportunity) -> u8 {
    let rate = finite_or(
        opportunity.global_stats.attrition_rate,
        DEFAULT_ATTRITION_RATE,
        "attrition.rate",
    );
    to_score(inverted_percentage(rate, 0.0, MAX_ATTRITION_RATE))
}
