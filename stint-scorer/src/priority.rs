//! Refresh priority for a recommendation.

use stint_core::HistoryMatch;

const POINTS_PER_RACE: u32 = 5;

/// Priority grows with races at the pairing and saturates at 100.
///
/// This is a display and refresh hint for callers; it plays no part in the
/// overall score.
#[must_use]
pub fn priority_score(pairing: HistoryMatch<'_>) -> u8 {
    match pairing {
        HistoryMatch::Found(record) => {
            let points = record.race_count.saturating_mul(POINTS_PER_RACE).min(100);
            u8::try_from(points).unwrap_or(100)
        }
        HistoryMatch::NotFound => 0,
    }
}
