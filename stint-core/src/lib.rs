//! Core domain types for the stint race recommendation engine.
//!
//! The records here are the boundary between the scoring engine and the
//! collaborators around it: schedule pipelines build [`RacingOpportunity`]
//! values, analytics layers build [`UserHistory`] bundles, and presentation
//! layers consume the resulting [`Score`]. Everything is plain data,
//! immutable once built and serialisable with camelCase JSON field names.
//!
//! The [`OpportunityScorer`] trait is the seam scoring implementations plug
//! into, and [`Clock`] is the injected time source for the one
//! time-dependent factor.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod clock;
mod error;
pub mod history;
mod lenient;
pub mod license;
pub mod mode;
pub mod opportunity;
pub mod score;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::Category;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ScoringError;
pub use history::{HistoryMatch, SeriesTrackHistory, UserHistory, UserOverallStats};
pub use license::{LicenseClass, LicenseLevel};
pub use mode::OptimizationMode;
pub use opportunity::{GlobalStats, RacingOpportunity, TimeSlot};
pub use score::{
    ConfidenceLevel, DataConfidence, Factor, GlobalStatsConfidence, RiskLevel, Score,
    ScoringFactors,
};
pub use scorer::OpportunityScorer;
