//! Blend factor scores into the overall score.

use stint_core::ScoringFactors;

use crate::ModeWeights;
use crate::numeric::to_score;

/// Weighted sum of the factors, rounded.
///
/// Weights sum to 1.0 and factors lie in `0..=100`, so the result needs no
/// normalisation.
#[expect(clippy::float_arithmetic, reason = "weighted sum of factor scores")]
#[must_use]
pub fn overall_score(factors: &ScoringFactors, weights: &ModeWeights) -> u8 {
    let total: f64 = factors
        .iter()
        .map(|(factor, score)| f64::from(score) * weights.get(factor))
        .sum();
    to_score(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights_for;
    use rstest::rstest;
    use stint_core::OptimizationMode;

    #[rstest]
    #[case(OptimizationMode::Balanced)]
    #[case(OptimizationMode::IratingPush)]
    #[case(OptimizationMode::SafetyRecovery)]
    fn uniform_factors_pass_through(#[case] mode: OptimizationMode) {
        let weights = weights_for(mode);
        assert_eq!(overall_score(&ScoringFactors::uniform(0), &weights), 0);
        assert_eq!(overall_score(&ScoringFactors::uniform(64), &weights), 64);
        assert_eq!(overall_score(&ScoringFactors::uniform(100), &weights), 100);
    }

    #[test]
    fn mode_changes_the_blend() {
        let factors = ScoringFactors {
            performance: 90,
            safety: 30,
            ..ScoringFactors::uniform(50)
        };
        let push = overall_score(&factors, &weights_for(OptimizationMode::IratingPush));
        let recovery = overall_score(&factors, &weights_for(OptimizationMode::SafetyRecovery));
        // push: 50 + 0.25 * 40 - 0.10 * 20 = 58; recovery: 50 + 0.05 * 40 - 0.30 * 20 = 46
        assert_eq!(push, 58);
        assert_eq!(recovery, 46);
    }
}
