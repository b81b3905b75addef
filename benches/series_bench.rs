//! Criterion benchmarks for the gap-fill walk

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gapless::{compare, PeriodType, RawAggregate, SeriesBuilder};
use std::hint::black_box;

fn window_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
}

/// Sparse input: one aggregate every `stride` minutes across the window.
fn sparse_minutes(minutes: i64, stride: i64) -> Vec<RawAggregate<i64>> {
    (0..minutes)
        .step_by(stride as usize)
        .map(|m| RawAggregate::global(window_start() + Duration::minutes(m), m))
        .collect()
}

fn bench_single_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    for minutes in [60i64, 1440, 10_080] {
        let start = window_start();
        let end = start + Duration::minutes(minutes);
        let aggregates = sparse_minutes(minutes, 7);
        let builder = SeriesBuilder::new(PeriodType::Minute, Utc);

        group.throughput(Throughput::Elements(minutes as u64));
        group.bench_with_input(
            BenchmarkId::new("single_minute", format!("{minutes} buckets")),
            &aggregates,
            |b, aggregates| {
                b.iter(|| builder.single(black_box(start), black_box(end), black_box(aggregates)));
            },
        );
    }

    group.finish();
}

fn bench_per_entity_series(c: &mut Criterion) {
    let start = window_start();
    let end = start + Duration::minutes(60);

    // 20 entities, each with an aggregate every 5th minute
    let aggregates: Vec<RawAggregate<i64>> = (0..20)
        .flat_map(|entity| {
            (0i64..60).step_by(5).map(move |m| {
                RawAggregate::keyed(
                    format!("broadcast-{entity}"),
                    window_start() + Duration::minutes(m),
                    m,
                )
            })
        })
        .collect();

    let builder = SeriesBuilder::new(PeriodType::Minute, Utc);

    let mut group = c.benchmark_group("series");
    group.throughput(Throughput::Elements(20 * 60));
    group.bench_function("per_entity_minute_20x60", |b| {
        b.iter(|| builder.per_entity(black_box(start), black_box(end), black_box(&aggregates)));
    });
    group.finish();
}

fn bench_calendar_series(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let aggregates = vec![
        RawAggregate::global(Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap(), 10i64),
        RawAggregate::global(Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap(), 20i64),
    ];
    let builder = SeriesBuilder::new(PeriodType::Week, Utc);

    let mut group = c.benchmark_group("series");
    group.bench_function("single_week_one_year", |b| {
        b.iter(|| builder.single(black_box(start), black_box(end), black_box(&aggregates)));
    });
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");
    group.bench_function("compare", |b| {
        b.iter(|| compare(black_box(9_000_000), black_box(8_000_000)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_series,
    bench_per_entity_series,
    bench_calendar_series,
    bench_compare
);
criterion_main!(benches);
