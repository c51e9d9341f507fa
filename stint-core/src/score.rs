//! Output records produced by scoring an opportunity.
//!
//! Every factor is "higher is better", including the two named after risks:
//! they hold inverted risk scores rather than raw risk magnitudes.

use serde::{Deserialize, Serialize};

/// One of the eight independently computed sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    /// Expected positions gained.
    Performance,
    /// Expected incident rate, inverted.
    Safety,
    /// Finishing position spread, inverted.
    Consistency,
    /// Strength-of-field spread, inverted.
    Predictability,
    /// Personal experience with the combination.
    Familiarity,
    /// Race length burden, inverted.
    FatigueRisk,
    /// Field attrition, inverted.
    AttritionRisk,
    /// Scarcity of session times, inverted.
    TimeVolatility,
}

impl Factor {
    /// Every factor, in weight-table order.
    pub const ALL: [Self; 8] = [
        Self::Performance,
        Self::Safety,
        Self::Consistency,
        Self::Predictability,
        Self::Familiarity,
        Self::FatigueRisk,
        Self::AttritionRisk,
        Self::TimeVolatility,
    ];
}

/// The eight factor scores, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringFactors {
    /// Expected positions gained.
    pub performance: u8,
    /// Expected incident rate, inverted.
    pub safety: u8,
    /// Finishing position spread, inverted.
    pub consistency: u8,
    /// Strength-of-field spread, inverted.
    pub predictability: u8,
    /// Personal experience with the combination.
    pub familiarity: u8,
    /// Race length burden, inverted.
    pub fatigue_risk: u8,
    /// Field attrition, inverted.
    pub attrition_risk: u8,
    /// Scarcity of session times, inverted.
    pub time_volatility: u8,
}

impl ScoringFactors {
    /// Factors that all hold `value`.
    #[must_use]
    pub const fn uniform(value: u8) -> Self {
        Self {
            performance: value,
            safety: value,
            consistency: value,
            predictability: value,
            familiarity: value,
            fatigue_risk: value,
            attrition_risk: value,
            time_volatility: value,
        }
    }

    /// Return the score for one factor.
    ///
    /// # Examples
    /// ```
    /// use stint_core::{Factor, ScoringFactors};
    ///
    /// let factors = ScoringFactors { safety: 91, ..ScoringFactors::uniform(50) };
    /// assert_eq!(factors.get(Factor::Safety), 91);
    /// assert_eq!(factors.get(Factor::Familiarity), 50);
    /// ```
    #[must_use]
    pub const fn get(&self, factor: Factor) -> u8 {
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

    /// Iterate over `(factor, score)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, u8)> + '_ {
        Factor::ALL.into_iter().map(|factor| (factor, self.get(factor)))
    }
}

/// Ordinal risk band; `Low` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Little downside expected.
    Low,
    /// Some downside expected.
    Medium,
    /// Significant downside expected.
    High,
}

/// How much personal data backs a factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Backed by a solid personal sample.
    High,
    /// Backed by a thin personal sample.
    Estimated,
    /// Not backed by personal data.
    NoData,
}

/// Quality of the population statistics behind an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalStatsConfidence {
    /// Large population sample.
    High,
    /// Modest population sample.
    Moderate,
    /// Built-in defaults.
    Default,
}

/// Per-field confidence labels attached to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataConfidence {
    /// Confidence behind the performance factor.
    pub performance: ConfidenceLevel,
    /// Confidence behind the safety factor.
    pub safety: ConfidenceLevel,
    /// Confidence behind the consistency factor.
    pub consistency: ConfidenceLevel,
    /// Confidence behind the familiarity factor.
    pub familiarity: ConfidenceLevel,
    /// Quality of the global statistics.
    pub global_stats: GlobalStatsConfidence,
}

impl DataConfidence {
    /// Labels that all hold `level`, with high-quality global statistics.
    #[must_use]
    pub const fn uniform(level: ConfidenceLevel) -> Self {
        Self {
            performance: level,
            safety: level,
            consistency: level,
            familiarity: level,
            global_stats: GlobalStatsConfidence::High,
        }
    }
}

/// The full assessment of one opportunity for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    /// Weighted blend of the factors, `0..=100`.
    pub overall: u8,
    /// Individual factor scores.
    pub factors: ScoringFactors,
    /// Risk to the user's iRating.
    #[serde(rename = "iRatingRisk")]
    pub irating_risk: RiskLevel,
    /// Risk to the user's safety rating.
    pub safety_rating_risk: RiskLevel,
    /// Short explanations, most important first.
    pub reasoning: Vec<String>,
    /// Confidence labels per field.
    pub data_confidence: DataConfidence,
    /// Refresh and display priority, `0..=100`.
    pub priority_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_levels_order_best_first() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn score_serialises_with_wire_names() {
        let score = Score {
            overall: 72,
            factors: ScoringFactors::uniform(72),
            irating_risk: RiskLevel::Low,
            safety_rating_risk: RiskLevel::High,
            reasoning: vec!["Low incident rate expected".to_owned()],
            data_confidence: DataConfidence::uniform(ConfidenceLevel::NoData),
            priority_score: 15,
        };
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["iRatingRisk"], "low");
        assert_eq!(json["safetyRatingRisk"], "high");
        assert_eq!(json["priorityScore"], 15);
        assert_eq!(json["factors"]["fatigueRisk"], 72);
        assert_eq!(json["dataConfidence"]["performance"], "no_data");
        assert_eq!(json["dataConfidence"]["globalStats"], "high");
    }
}
