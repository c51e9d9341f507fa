//! Criterion benchmarks for the scoring engine.
//!
//! Measures per-opportunity scoring cost for a cold-start user and for a
//! user with a large personal history, across a week's worth of
//! opportunities.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package stint-scorer
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use stint_core::test_support::{HistoryBuilder, OpportunityBuilder, series_track_record};
use stint_core::{
    Category, FixedClock, LicenseLevel, OpportunityScorer, OptimizationMode, RacingOpportunity,
    UserHistory,
};
use stint_scorer::ScoringEngine;

/// Opportunity counts to benchmark.
const BATCH_SIZES: &[u32] = &[10, 100, 1_000];

#[expect(
    clippy::integer_division_remainder_used,
    reason = "benchmark inputs cycle through fixed id ranges"
)]
fn build_opportunities(count: u32) -> Vec<RacingOpportunity> {
    (0..count)
        .map(|index| {
            OpportunityBuilder::new()
                .series_track(100 + index % 40, 1 + index % 25)
                .race_length(15 + (index % 8) * 15)
                .build()
        })
        .collect()
}

#[expect(
    clippy::integer_division_remainder_used,
    reason = "benchmark inputs cycle through fixed id ranges"
)]
fn build_veteran(now: chrono::DateTime<Utc>) -> UserHistory {
    let mut builder = HistoryBuilder::new()
        .overall(800, 2.4, 1.5)
        .license(Category::SportsCar, LicenseLevel::B, 3.4, 2_600.0);
    for series in 100..140 {
        for track in 1..26 {
            let mut record = series_track_record(series, track, (series + track) % 15);
            record.last_race_date = Some(now - TimeDelta::days(i64::from(track * 7)));
            builder = builder.record(record);
        }
    }
    builder.build()
}

fn bench_scoring(c: &mut Criterion) {
    let Some(now) = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).single() else {
        return;
    };
    let engine = ScoringEngine::with_clock(FixedClock::new(now));
    let histories = [
        ("cold_start", HistoryBuilder::new().build()),
        ("veteran", build_veteran(now)),
    ];

    let mut group = c.benchmark_group("score_batch");
    for &size in BATCH_SIZES {
        let opportunities = build_opportunities(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        for (label, history) in &histories {
            group.bench_with_input(BenchmarkId::new(*label, size), &opportunities, |b, batch| {
                b.iter(|| {
                    for opportunity in batch {
                        black_box(engine.score(
                            black_box(opportunity),
                            history,
                            OptimizationMode::Balanced,
                        ));
                    }
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
