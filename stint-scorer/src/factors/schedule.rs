//! Factors derived from the race format and the session schedule.

use stint_core::RacingOpportunity;

/// Fatigue factor (inverted risk): shorter races score higher.
///
/// An unknown length falls through to the longest step.
#[must_use]
pub fn fatigue_risk_score(opportunity: &RacingOpportunity) -> u8 {
    let minutes = opportunity.race_length_minutes;
    if !minutes.is_finite() {
        30
    } else if minutes <= 20.0 {
        90
    } else if minutes <= 40.0 {
        70
    } else if minutes <= 60.0 {
        50
    } else {
        30
    }
}

/// Time volatility factor (inverted risk): more sessions per week make the
/// race easier to fit in.
#[must_use]
pub fn time_volatility_score(opportunity: &RacingOpportunity) -> u8 {
    match opportunity.time_slots.len() {
        12.. => 90,
        6..=11 => 70,
        3..=5 => 50,
        _ => 30,
    }
}
