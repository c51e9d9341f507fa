//! The eight factor calculators.
//!
//! Each calculator maps one opportunity and the user's history to a
//! `0..=100` score where higher is always better. Calculators share a
//! [`ScoringContext`] so the series and track lookup happens once per
//! opportunity.

use chrono::{DateTime, Utc};
use stint_core::{
    Category, HistoryMatch, LicenseClass, RacingOpportunity, ScoringFactors, UserHistory,
};

mod consistency;
mod familiarity;
mod field;
mod performance;
mod safety;
mod schedule;

pub use consistency::consistency_score;
pub use familiarity::{familiarity_score, recency_multiplier};
pub use field::{attrition_risk_score, predictability_score};
pub use performance::{
    PerformanceEstimate, estimate_position_delta, license_level_bonus, performance_score,
};
pub use safety::{expected_incidents, safety_score};
pub use schedule::{fatigue_risk_score, time_volatility_score};

/// Personal records need this many races before they replace estimates.
pub const PERSONAL_SAMPLE_MIN_RACES: u32 = 3;

/// Users need this many races overall before their averages are trusted.
pub const ESTABLISHED_MIN_TOTAL_RACES: u32 = 5;

/// Inputs shared by every factor calculator for one opportunity.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// The opportunity being scored.
    pub opportunity: &'a RacingOpportunity,
    /// The user's full history.
    pub history: &'a UserHistory,
    /// The user's record for the opportunity's series and track.
    pub pairing: HistoryMatch<'a>,
    /// Instant used for recency calculations.
    pub now: DateTime<Utc>,
}

impl<'a> ScoringContext<'a> {
    /// Resolve the pairing lookup for `opportunity` once.
    #[must_use]
    pub fn new(
        opportunity: &'a RacingOpportunity,
        history: &'a UserHistory,
        now: DateTime<Utc>,
    ) -> Self {
        let (series_id, track_id) = opportunity.series_track();
        Self {
            opportunity,
            history,
            pairing: history.find_series_track(series_id, track_id),
            now,
        }
    }

    /// Personal record with enough races to use directly.
    #[must_use]
    pub const fn personal_sample(&self) -> Option<&'a stint_core::SeriesTrackHistory> {
        self.pairing.with_min_races(PERSONAL_SAMPLE_MIN_RACES)
    }

    /// Licence for the opportunity's category, when the user is established.
    #[must_use]
    pub fn established_license(&self) -> Option<&'a LicenseClass> {
        established_license(self.history, self.opportunity.category)
    }
}

fn established_license(history: &UserHistory, category: Category) -> Option<&LicenseClass> {
    if history.overall_stats.total_races < ESTABLISHED_MIN_TOTAL_RACES {
        return None;
    }
    history.license_for(category)
}

/// Compute all eight factors for the context.
#[must_use]
pub fn compute_factors(context: &ScoringContext<'_>) -> ScoringFactors {
    ScoringFactors {
        performance: performance_score(context),
        safety: safety_score(context),
        consistency: consistency_score(context),
        predictability: predictability_score(context.opportunity),
        familiarity: familiarity_score(context),
        fatigue_risk: fatigue_risk_score(context.opportunity),
        attrition_risk: attrition_risk_score(context.opportunity),
        time_volatility: time_volatility_score(context.opportunity),
    }
}
