//! Series value types
//!
//! Inputs and outputs of the bucketing engine. All of these are plain
//! immutable values constructed fresh per call; nothing here holds state
//! between invocations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sparse, pre-aggregated counter for one bucket.
///
/// Produced upstream by an aggregation job or store query. `bucket_start` is
/// trusted to already be aligned to the granularity's bucket boundary — the
/// engine matches on exact equality and never re-truncates input timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawAggregate<V> {
    /// Absent for a global (single-series) aggregate.
    pub entity_key: Option<String>,
    pub bucket_start: DateTime<Utc>,
    pub value: V,
}

impl<V> RawAggregate<V> {
    /// Aggregate for a global series (no entity key).
    pub fn global(bucket_start: DateTime<Utc>, value: V) -> Self {
        Self {
            entity_key: None,
            bucket_start,
            value,
        }
    }

    /// Aggregate attributed to one entity.
    pub fn keyed(entity_key: impl Into<String>, bucket_start: DateTime<Utc>, value: V) -> Self {
        Self {
            entity_key: Some(entity_key.into()),
            bucket_start,
            value,
        }
    }
}

/// Presentation label for one bucket.
///
/// Sub-day buckets expose their raw epoch-second boundaries; calendar buckets
/// expose the bucket's start date as `YYYY-MM-DD` in the configured zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointLabel {
    Epoch { start: i64, end: i64 },
    Date(String),
}

impl PointLabel {
    /// The empty label emitted for the invalid-granularity sentinel.
    pub fn empty() -> Self {
        Self::Date(String::new())
    }
}

/// One bucket of a dense, gap-filled series.
///
/// Within one entity's series, points are strictly increasing by
/// `bucket_start`, contiguous, and cover `[start, end)` of the requested
/// window. `bucket_end` is always the start of the next bucket.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint<V> {
    /// Present only in per-entity mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_key: Option<String>,
    pub bucket_start: DateTime<Utc>,
    pub bucket_end: DateTime<Utc>,
    pub label: PointLabel,
    pub value: V,
    /// True when the bucket had no matching input aggregate and the value
    /// was zero-filled.
    pub is_synthetic: bool,
}

/// Period-over-period comparison.
///
/// `comparison_percent` is a percentage delta except on a zero baseline,
/// where it saturates to a sentinel: 0 when both periods are zero, 100 when
/// the prior period is zero and the current is not. See
/// [`compare`](crate::services::comparison::compare).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    pub value: i64,
    pub comparison_percent: f64,
}

/// Headline numbers for one built series.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesSummary {
    pub total: i64,
    /// Integer average over every bucket in the window, synthetic included.
    pub bucket_avg: i64,
    pub peak_bucket: Option<(DateTime<Utc>, i64)>,
    /// Buckets backed by a real input aggregate.
    pub active_buckets: u32,
    pub bucket_count: u32,
}

impl SeriesSummary {
    pub fn from_points<V: Copy + Into<i64>>(points: &[SeriesPoint<V>]) -> Self {
        if points.is_empty() {
            return Self {
                total: 0,
                bucket_avg: 0,
                peak_bucket: None,
                active_buckets: 0,
                bucket_count: 0,
            };
        }

        let bucket_count = points.len() as u32;

        let mut total: i64 = 0;
        let mut active_buckets: u32 = 0;
        let mut peak_bucket: Option<(DateTime<Utc>, i64)> = None;

        for point in points {
            let value: i64 = point.value.into();
            total = total.saturating_add(value);
            if !point.is_synthetic {
                active_buckets += 1;
            }

            match &peak_bucket {
                None => peak_bucket = Some((point.bucket_start, value)),
                Some((_, max_value)) if value > *max_value => {
                    peak_bucket = Some((point.bucket_start, value));
                }
                _ => {}
            }
        }

        Self {
            total,
            bucket_avg: total / bucket_count as i64,
            peak_bucket,
            active_buckets,
            bucket_count,
        }
    }
}
