//! Orchestrates the factor calculators into a [`Score`].

use stint_core::{
    Clock, OpportunityScorer, OptimizationMode, RacingOpportunity, Score, ScoringError,
    SystemClock, UserHistory,
};

use crate::{
    ScoringContext, assess_confidence, compute_factors, irating_risk, overall_score,
    priority_score, reasoning, safety_rating_risk, weights_for,
};

/// Multi-factor opportunity scorer.
///
/// The engine holds nothing but its clock, so one instance can score any
/// number of opportunities concurrently.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use stint_core::{
///     Category, FixedClock, GlobalStats, LicenseLevel, OpportunityScorer, OptimizationMode,
///     RacingOpportunity, UserHistory,
/// };
/// use stint_scorer::ScoringEngine;
///
/// let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap());
/// let engine = ScoringEngine::with_clock(clock);
/// let opportunity = RacingOpportunity {
///     series_id: 139,
///     series_name: "Global Mazda MX-5 Cup".into(),
///     track_id: 47,
///     track_name: "Laguna Seca".into(),
///     license_level: LicenseLevel::Rookie,
///     category: Category::SportsCar,
///     season_year: 2026,
///     season_quarter: 4,
///     race_week: 5,
///     race_length_minutes: 20.0,
///     has_open_setup: false,
///     time_slots: Vec::new(),
///     global_stats: GlobalStats::unknown(),
/// };
/// let score = engine.score(&opportunity, &UserHistory::new("driver"), OptimizationMode::Balanced);
/// assert_eq!(score.factors.performance, 47);
/// assert_eq!(score.factors.familiarity, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine<C = SystemClock> {
    clock: C,
}

impl ScoringEngine<SystemClock> {
    /// Build an engine that reads the wall clock.
    #[must_use]
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ScoringEngine<C> {
    /// Build an engine that reads time from `clock`.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Borrow the engine's clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Score with a mode given by its wire name.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidMode`] when `mode` is not one of
    /// `balanced`, `irating_push` or `safety_recovery`.
    pub fn score_named(
        &self,
        opportunity: &RacingOpportunity,
        history: &UserHistory,
        mode: &str,
    ) -> Result<Score, ScoringError> {
        let parsed: OptimizationMode = mode.parse()?;
        Ok(self.score(opportunity, history, parsed))
    }
}

impl<C: Clock> OpportunityScorer for ScoringEngine<C> {
    fn score(
        &self,
        opportunity: &RacingOpportunity,
        history: &UserHistory,
        mode: OptimizationMode,
    ) -> Score {
        let context = ScoringContext::new(opportunity, history, self.clock.now());
        let factors = compute_factors(&context);
        let overall = overall_score(&factors, &weights_for(mode));
        let score = Score {
            overall,
            factors,
            irating_risk: irating_risk(&factors),
            safety_rating_risk: safety_rating_risk(&factors),
            reasoning: reasoning(&factors),
            data_confidence: assess_confidence(context.pairing),
            priority_score: priority_score(context.pairing),
        };
        log::trace!(
            "scored series {} track {} in {mode} mode: overall {overall}",
            opportunity.series_id,
            opportunity.track_id,
        );
        score
    }
}
