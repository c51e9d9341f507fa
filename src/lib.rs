//! Facade crate for the stint race recommendation engine.
//!
//! This crate re-exports the core domain types and, behind the default
//! `scorer` feature, the multi-factor scoring engine.

#![forbid(unsafe_code)]

pub use stint_core::{
    Category, Clock, ConfidenceLevel, DataConfidence, FixedClock, GlobalStats,
    GlobalStatsConfidence, LicenseClass, LicenseLevel, OpportunityScorer, OptimizationMode,
    RacingOpportunity, RiskLevel, Score, ScoringError, ScoringFactors, SeriesTrackHistory,
    SystemClock, TimeSlot, UserHistory, UserOverallStats,
};

#[cfg(feature = "scorer")]
pub use stint_scorer::{ModeWeights, ScoringEngine, weights_for};

#[cfg(feature = "test-support")]
pub use stint_core::test_support;
