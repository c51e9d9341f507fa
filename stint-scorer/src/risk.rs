//! Ordinal risk bands derived from factor scores.
//!
//! The bands are independent of the overall score and of each other.

use stint_core::{RiskLevel, ScoringFactors};

/// Risk to the user's iRating.
///
/// Low when a position gain is likely on familiar ground, medium when the
/// expected result is at least middling, high otherwise.
#[must_use]
pub const fn irating_risk(factors: &ScoringFactors) -> RiskLevel {
    if factors.performance >= 60 && factors.familiarity >= 40 {
        RiskLevel::Low
    } else if factors.performance >= 40 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Risk to the user's safety rating.
#[must_use]
pub const fn safety_rating_risk(factors: &ScoringFactors) -> RiskLevel {
    if factors.safety >= 70 && factors.consistency >= 60 {
        RiskLevel::Low
    } else if factors.safety >= 50 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn factors(performance: u8, familiarity: u8, safety: u8, consistency: u8) -> ScoringFactors {
        ScoringFactors {
            performance,
            familiarity,
            safety,
            consistency,
            ..ScoringFactors::uniform(50)
        }
    }

    #[rstest]
    #[case(60, 40, RiskLevel::Low)]
    #[case(95, 39, RiskLevel::Medium)]
    #[case(59, 100, RiskLevel::Medium)]
    #[case(40, 0, RiskLevel::Medium)]
    #[case(39, 100, RiskLevel::High)]
    fn irating_bands(#[case] performance: u8, #[case] familiarity: u8, #[case] expected: RiskLevel) {
        assert_eq!(irating_risk(&factors(performance, familiarity, 50, 50)), expected);
    }

    #[rstest]
    #[case(70, 60, RiskLevel::Low)]
    #[case(91, 84, RiskLevel::Low)]
    #[case(90, 59, RiskLevel::Medium)]
    #[case(50, 100, RiskLevel::Medium)]
    #[case(49, 100, RiskLevel::High)]
    fn safety_bands(#[case] safety: u8, #[case] consistency: u8, #[case] expected: RiskLevel) {
        assert_eq!(safety_rating_risk(&factors(50, 50, safety, consistency)), expected);
    }
}
