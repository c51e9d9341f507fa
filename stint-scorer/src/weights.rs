//! Per-mode factor weights.
//!
//! The table is indexed by [`OptimizationMode::index`]; a compile-time check
//! below guarantees every row lines up with its mode, holds non-negative
//! weights and sums to 1.0.

use stint_core::{Factor, OptimizationMode};

/// Largest permitted drift of a row total from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Relative importance of each factor under one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeWeights {
    /// Mode the row belongs to.
    pub mode: OptimizationMode,
    /// Weight of the performance factor.
    pub performance: f64,
    /// Weight of the safety factor.
    pub safety: f64,
    /// Weight of the consistency factor.
    pub consistency: f64,
    /// Weight of the predictability factor.
    pub predictability: f64,
    /// Weight of the familiarity factor.
    pub familiarity: f64,
    /// Weight of the fatigue factor.
    pub fatigue_risk: f64,
    /// Weight of the attrition factor.
    pub attrition_risk: f64,
    /// Weight of the time volatility factor.
    pub time_volatility: f64,
}

impl ModeWeights {
    /// Return the weight applied to `factor`.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Performance => self.performance,
            Factor::Safety => self.safety,
            Factor::Consistency => self.consistency,
            Factor::Predictability => self.predictability,
            Factor::Familiarity => self.familiarity,
            Factor::FatigueRisk => self.fatigue_risk,
            Factor::AttritionRisk => self.attrition_risk,
            Factor::TimeVolatility => self.time_volatility,
        }
    }

    /// Sum of the row.
    #[expect(clippy::float_arithmetic, reason = "row totals are plain sums")]
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.performance
            + self.safety
            + self.consistency
            + self.predictability
            + self.familiarity
            + self.fatigue_risk
            + self.attrition_risk
            + self.time_volatility
    }

    const fn is_non_negative(&self) -> bool {
        self.performance >= 0.0
            && self.safety >= 0.0
            && self.consistency >= 0.0
            && self.predictability >= 0.0
            && self.familiarity >= 0.0
            && self.fatigue_risk >= 0.0
            && self.attrition_risk >= 0.0
            && self.time_volatility >= 0.0
    }
}

const WEIGHT_TABLE: [ModeWeights; 3] = [
    ModeWeights {
        mode: OptimizationMode::Balanced,
        performance: 0.15,
        safety: 0.15,
        consistency: 0.15,
        predictability: 0.10,
        familiarity: 0.15,
        fatigue_risk: 0.10,
        attrition_risk: 0.10,
        time_volatility: 0.10,
    },
    ModeWeights {
        mode: OptimizationMode::IratingPush,
        performance: 0.25,
        safety: 0.10,
        consistency: 0.10,
        predictability: 0.15,
        familiarity: 0.20,
        fatigue_risk: 0.05,
        attrition_risk: 0.10,
        time_volatility: 0.05,
    },
    ModeWeights {
        mode: OptimizationMode::SafetyRecovery,
        performance: 0.05,
        safety: 0.30,
        consistency: 0.20,
        predictability: 0.10,
        familiarity: 0.15,
        fatigue_risk: 0.10,
        attrition_risk: 0.05,
        time_volatility: 0.05,
    },
];

#[expect(
    clippy::indexing_slicing,
    clippy::float_arithmetic,
    reason = "compile-time validation of the constant table"
)]
const _: () = {
    assert!(WEIGHT_TABLE.len() == OptimizationMode::ALL.len());
    let mut row = 0;
    while row < WEIGHT_TABLE.len() {
        let weights = &WEIGHT_TABLE[row];
        assert!(weights.mode.index() == row, "weight rows must follow mode order");
        assert!(weights.is_non_negative(), "weights must be non-negative");
        let drift = weights.total() - 1.0;
        assert!(
            drift < WEIGHT_TOLERANCE && drift > -WEIGHT_TOLERANCE,
            "mode weights must sum to 1.0"
        );
        row += 1;
    }
};

/// Return the weight row for `mode`.
///
/// # Examples
/// ```
/// use stint_core::{Factor, OptimizationMode};
/// use stint_scorer::weights_for;
///
/// let weights = weights_for(OptimizationMode::SafetyRecovery);
/// assert_eq!(weights.get(Factor::Safety), 0.30);
/// ```
#[expect(
    clippy::indexing_slicing,
    reason = "mode indices are dense and the table length is checked at compile time"
)]
#[must_use]
pub const fn weights_for(mode: OptimizationMode) -> ModeWeights {
    WEIGHT_TABLE[mode.index()]
}
