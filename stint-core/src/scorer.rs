//! Score racing opportunities for a user.
//!
//! The `OpportunityScorer` trait turns one opportunity, one user history
//! and one optimisation mode into a [`Score`](crate::Score).

use crate::{OptimizationMode, RacingOpportunity, Score, UserHistory};

/// Evaluate how well a racing opportunity suits a user.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so callers can fan
/// scoring out across worker threads. The method is infallible: sparse or
/// malformed statistics must degrade to lower-confidence estimates rather
/// than errors.
///
/// Implementations must:
/// - Keep every factor, the overall score and the priority within `0..=100`.
/// - Avoid ranking or filtering; ordering belongs to the caller.
///
/// # Examples
///
/// ```rust
/// use stint_core::{
///     ConfidenceLevel, DataConfidence, OpportunityScorer,
///     OptimizationMode, RacingOpportunity, RiskLevel, Score, ScoringFactors, UserHistory,
/// };
///
/// struct NeutralScorer;
///
/// impl OpportunityScorer for NeutralScorer {
///     fn score(&self, _: &RacingOpportunity, _: &UserHistory, _: OptimizationMode) -> Score {
///         Score {
///             overall: 50,
///             factors: ScoringFactors::uniform(50),
///             irating_risk: RiskLevel::Medium,
///             safety_rating_risk: RiskLevel::Medium,
///             reasoning: Vec::new(),
///             data_confidence: DataConfidence::uniform(ConfidenceLevel::NoData),
///             priority_score: 0,
///         }
///     }
/// }
/// # let _ = NeutralScorer;
/// ```
pub trait OpportunityScorer: Send + Sync {
    /// Score `opportunity` for the user described by `history` under `mode`.
    fn score(
        &self,
        opportunity: &RacingOpportunity,
        history: &UserHistory,
        mode: OptimizationMode,
    ) -> Score;
}
