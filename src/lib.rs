//! Temporal bucketing and gap-fill engine.
//!
//! Converts sparse, pre-aggregated counters — viewer counts per broadcast,
//! sales per period — into dense, regularly-spaced time series for charts
//! and dashboards, and computes period-over-period comparison deltas.
//!
//! The engine is pure and synchronous: no I/O, no shared state, every call a
//! function over its inputs. Raw-event roll-up happens upstream; this crate
//! only densifies what it is handed, over a closed `[start, end)` window.
//!
//! Anomalies are data, not errors: an unrecognized granularity tag or an
//! inverted window produces an empty series, and a zero-baseline comparison
//! saturates to a sentinel percentage. Callers that need to distinguish
//! "no data" from "bad input" should validate the granularity tag up front
//! via `str::parse::<PeriodType>()`.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use gapless::{PeriodType, RawAggregate, SeriesBuilder};
//!
//! let start = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2021, 1, 1, 0, 2, 0).unwrap();
//! let aggregates = vec![RawAggregate::global(start, 1i64)];
//!
//! let builder = SeriesBuilder::new(PeriodType::Minute, Utc);
//! let series = builder.single(start, end, &aggregates);
//!
//! assert_eq!(series.len(), 2);
//! assert_eq!(series[0].value, 1);
//! assert!(series[1].is_synthetic); // gap minute, zero-filled
//! ```

pub mod services;
pub mod types;

pub use services::{compare, AggregateIndex, BucketClock, SeriesBuilder};
pub use types::{
    ComparisonResult, GaplessError, PeriodType, PointLabel, RawAggregate, Result, SeriesPoint,
    SeriesSummary,
};
