//! Multi-factor scoring for racing opportunities.
//!
//! The crate turns one [`RacingOpportunity`](stint_core::RacingOpportunity),
//! the user's [`UserHistory`](stint_core::UserHistory) and an
//! [`OptimizationMode`](stint_core::OptimizationMode) into a
//! [`Score`](stint_core::Score). Data flows one way:
//!
//! 1. the series and track record is looked up once into a
//!    [`ScoringContext`];
//! 2. eight independent calculators produce `0..=100` factor scores;
//! 3. the factors are blended with the mode's [`ModeWeights`], classified
//!    into risk bands, explained, and paired with confidence labels and a
//!    priority hint.
//!
//! Sparse or malformed statistics never fail scoring. Each calculator
//! substitutes a documented fallback through [`finite_or`] and lowers its
//! confidence instead. The only fallible entry point is
//! [`ScoringEngine::score_named`], which rejects unknown mode names.
//!
//! Wall-clock time is read only for the familiarity recency bonus, through
//! the engine's [`Clock`](stint_core::Clock).

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod confidence;
mod engine;
mod factors;
mod numeric;
mod priority;
mod race_length;
mod reasoning;
mod risk;
mod weights;

pub use aggregate::overall_score;
pub use confidence::{
    ESTIMATED_CONFIDENCE_MIN_RACES, HIGH_CONFIDENCE_MIN_RACES, assess_confidence,
    history_confidence,
};
pub use engine::ScoringEngine;
pub use factors::{
    ESTABLISHED_MIN_TOTAL_RACES, PERSONAL_SAMPLE_MIN_RACES, PerformanceEstimate, ScoringContext,
    attrition_risk_score, compute_factors, consistency_score, estimate_position_delta,
    expected_incidents, familiarity_score, fatigue_risk_score, license_level_bonus,
    performance_score, predictability_score, recency_multiplier, safety_score,
    time_volatility_score,
};
pub use numeric::{finite_or, to_score};
pub use priority::priority_score;
pub use race_length::{BASELINE_RACE_MINUTES, race_length_multiplier};
pub use reasoning::{Reason, reasoning, reasons};
pub use risk::{irating_risk, safety_rating_risk};
pub use weights::{ModeWeights, WEIGHT_TOLERANCE, weights_for};
