//! Personal experience with the series and track.

use chrono::{DateTime, TimeDelta, Utc};

use super::ScoringContext;
use crate::numeric::to_score;

const RACES_FOR_FULL_FAMILIARITY: u32 = 10;
const RELATED_POINTS_PER_RACE: f64 = 5.0;
const RELATED_CAP: f64 = 50.0;
const RECENCY_FLOOR_SHARE: f64 = 0.7;
const RECENCY_SHARE: f64 = 0.3;
const STALE_RECENCY: f64 = 0.3;

/// Weight of the last visit, from `1.0` within a week down to `0.3`.
///
/// A record without a date counts as stale. Dates in the future count as
/// fresh.
#[must_use]
pub fn recency_multiplier(last_race: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(last) = last_race else {
        return STALE_RECENCY;
    };
    let elapsed = now.signed_duration_since(last);
    if elapsed <= TimeDelta::days(7) {
        1.0
    } else if elapsed <= TimeDelta::days(30) {
        0.8
    } else if elapsed <= TimeDelta::days(90) {
        0.5
    } else {
        STALE_RECENCY
    }
}

/// Familiarity factor.
///
/// With a personal record, ten races earn full marks, discounted by up to
/// 30% when the last visit is old. Without one, experience at the same
/// series on other tracks, or the same track in other series, earns up to
/// half marks. A combination with neither scores zero.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "recency weighting and averaging bounded race counts"
)]
#[must_use]
pub fn familiarity_score(context: &ScoringContext<'_>) -> u8 {
    if let Some(record) = context.pairing.with_min_races(1) {
        let base = f64::from(
            record
                .race_count
                .min(RACES_FOR_FULL_FAMILIARITY)
                .saturating_mul(10),
        );
        let recency = recency_multiplier(record.last_race_date, context.now);
        return to_score(base * (RECENCY_FLOOR_SHARE + RECENCY_SHARE * recency));
    }

    let (series_id, track_id) = context.opportunity.series_track();
    let (records, races) = context
        .history
        .related_histories(series_id, track_id)
        .fold((0_usize, 0_u64), |(records, races), related| {
            (
                records.saturating_add(1),
                races.saturating_add(u64::from(related.race_count)),
            )
        });
    if records == 0 {
        return 0;
    }
    let average = races as f64 / records as f64;
    to_score((average * RELATED_POINTS_PER_RACE).min(RELATED_CAP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use stint_core::test_support::{HistoryBuilder, OpportunityBuilder, series_track_record};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    #[rstest]
    #[case(Some(0), 1.0)]
    #[case(Some(7), 1.0)]
    #[case(Some(8), 0.8)]
    #[case(Some(30), 0.8)]
    #[case(Some(31), 0.5)]
    #[case(Some(90), 0.5)]
    #[case(Some(91), 0.3)]
    #[case(Some(-3), 1.0)]
    #[case(None, 0.3)]
    fn recency_tiers(now: DateTime<Utc>, #[case] days_ago: Option<i64>, #[case] expected: f64) {
        let last_race = days_ago.map(|days| now - TimeDelta::days(days));
        assert!((recency_multiplier(last_race, now) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case(1, 2, 10)]
    #[case(5, 2, 50)]
    #[case(10, 2, 100)]
    #[case(25, 2, 100)]
    #[case(10, 20, 94)]
    #[case(10, 60, 85)]
    #[case(10, 200, 79)]
    #[case(4, 45, 34)]
    fn personal_record_scores_by_volume_and_recency(
        now: DateTime<Utc>,
        #[case] race_count: u32,
        #[case] days_ago: i64,
        #[case] expected: u8,
    ) {
        let opportunity = OpportunityBuilder::new().build();
        let history = HistoryBuilder::new()
            .default_pairing(race_count, Some(now - TimeDelta::days(days_ago)))
            .build();
        let context = ScoringContext::new(&opportunity, &history, now);

        assert_eq!(familiarity_score(&context), expected);
    }

    #[rstest]
    fn related_records_earn_partial_credit(now: DateTime<Utc>) {
        let opportunity = OpportunityBuilder::new().series_track(1, 10).build();
        let history = HistoryBuilder::new()
            .record(series_track_record(1, 20, 4))
            .record(series_track_record(2, 10, 2))
            .record(series_track_record(3, 30, 40))
            .build();
        let context = ScoringContext::new(&opportunity, &history, now);

        // average of 4 and 2 races => 3 * 5
        assert_eq!(familiarity_score(&context), 15);
    }

    #[rstest]
    fn related_credit_is_capped(now: DateTime<Utc>) {
        let opportunity = OpportunityBuilder::new().series_track(1, 10).build();
        let history = HistoryBuilder::new()
            .record(series_track_record(1, 20, 30))
            .build();
        let context = ScoringContext::new(&opportunity, &history, now);

        assert_eq!(familiarity_score(&context), 50);
    }

    #[rstest]
    fn zero_race_pairing_falls_back_to_related(now: DateTime<Utc>) {
        let opportunity = OpportunityBuilder::new().series_track(1, 10).build();
        let history = HistoryBuilder::new()
            .record(series_track_record(1, 10, 0))
            .record(series_track_record(1, 20, 6))
            .build();
        let context = ScoringContext::new(&opportunity, &history, now);

        assert_eq!(familiarity_score(&context), 30);
    }

    #[rstest]
    fn unrelated_history_scores_zero(now: DateTime<Utc>) {
        let opportunity = OpportunityBuilder::new().series_track(1, 10).build();
        let history = HistoryBuilder::new()
            .record(series_track_record(2, 20, 12))
            .build();
        let context = ScoringContext::new(&opportunity, &history, now);

        assert_eq!(familiarity_score(&context), 0);
    }
}
