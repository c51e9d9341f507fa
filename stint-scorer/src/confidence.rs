//! Confidence labels derived from the personal sample size.

use stint_core::{ConfidenceLevel, DataConfidence, GlobalStatsConfidence, HistoryMatch};

/// Races at the pairing needed for a `high` label.
pub const HIGH_CONFIDENCE_MIN_RACES: u32 = 5;

/// Races at the pairing needed for an `estimated` label.
pub const ESTIMATED_CONFIDENCE_MIN_RACES: u32 = 2;

/// Label for the history-backed factors given `race_count` races at the pairing.
#[must_use]
pub const fn history_confidence(race_count: u32) -> ConfidenceLevel {
    if race_count >= HIGH_CONFIDENCE_MIN_RACES {
        ConfidenceLevel::High
    } else if race_count >= ESTIMATED_CONFIDENCE_MIN_RACES {
        ConfidenceLevel::Estimated
    } else {
        ConfidenceLevel::NoData
    }
}

/// Build the confidence labels for one pairing lookup.
///
/// Familiarity only asks whether a record exists, so a single race already
/// counts as `high` there. Population statistics carry no sample size and are
/// always reported as `high`.
#[must_use]
pub const fn assess_confidence(pairing: HistoryMatch<'_>) -> DataConfidence {
    let history = history_confidence(pairing.race_count());
    DataConfidence {
        performance: history,
        safety: history,
        consistency: history,
        familiarity: if pairing.is_found() {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::NoData
        },
        global_stats: GlobalStatsConfidence::High,
    }
}
