//! Gap-fill series construction
//!
//! Walks the bucket sequence of a `[start, end)` window and emits one point
//! per bucket: the matching input aggregate where one exists, a synthetic
//! zero-value point otherwise. The result is dense, ordered, and contiguous
//! — ready for a chart without further shaping.
//!
//! # Degradation contract
//!
//! An invalid granularity tag does NOT fail: the builder returns an empty
//! series. This mirrors the boundary behavior callers rely on when passing
//! through unvalidated user input, but it also means a typo'd tag reads as
//! "no data". A warning is logged on this path, and callers that prefer loud
//! failure can validate via `PeriodType::from_str` first. An inverted window
//! (`end` before `start`) likewise yields an empty series, not an error.

use crate::services::{AggregateIndex, BucketClock};
use crate::types::{PeriodType, RawAggregate, SeriesPoint};
use chrono::{DateTime, TimeZone, Utc};

/// Builds dense gap-filled series for one granularity in one zone.
#[derive(Debug, Clone)]
pub struct SeriesBuilder<Tz: TimeZone> {
    clock: BucketClock<Tz>,
}

impl<Tz: TimeZone> SeriesBuilder<Tz> {
    pub fn new(period: PeriodType, zone: Tz) -> Self {
        Self {
            clock: BucketClock::new(period, zone),
        }
    }

    pub fn clock(&self) -> &BucketClock<Tz> {
        &self.clock
    }

    /// Build one global series covering `[start, end)`.
    ///
    /// Entity keys on the input aggregates are ignored. The window start is
    /// truncated to its bucket boundary first, so the first emitted bucket
    /// may begin at or before the nominal `start` — window edges are rounded
    /// out, never in.
    pub fn single<V: Clone + Default>(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        aggregates: &[RawAggregate<V>],
    ) -> Vec<SeriesPoint<V>> {
        if self.degraded() {
            return Vec::new();
        }

        let index = AggregateIndex::single(aggregates);
        let mut points = Vec::with_capacity(self.estimate_buckets(start, end));
        self.walk(None, start, end, &index, &mut points);
        points
    }

    /// Build one series per entity present in the input, covering
    /// `[start, end)` each.
    ///
    /// Entities with no aggregate in the input are absent from the output
    /// entirely — gap-filling fills time gaps, it does not invent entities.
    /// Series are ordered by entity key, then bucket start.
    pub fn per_entity<V: Clone + Default>(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        aggregates: &[RawAggregate<V>],
    ) -> Vec<SeriesPoint<V>> {
        if self.degraded() {
            return Vec::new();
        }

        let index = AggregateIndex::per_entity(aggregates);
        let mut points =
            Vec::with_capacity(index.entity_count() * self.estimate_buckets(start, end));
        for entity in index.entities() {
            self.walk(Some(entity), start, end, &index, &mut points);
        }
        points
    }

    fn walk<V: Clone + Default>(
        &self,
        entity: Option<&str>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        index: &AggregateIndex<'_, V>,
        out: &mut Vec<SeriesPoint<V>>,
    ) {
        let mut cursor = self.clock.truncate(start);
        while cursor < end {
            let next = self.clock.advance(cursor);
            if next <= cursor {
                // A non-advancing clock would never terminate.
                break;
            }

            let matched = match entity {
                Some(key) => index.get(key, cursor),
                None => index.get_global(cursor),
            };
            let (value, is_synthetic) = match matched {
                Some(agg) => (agg.value.clone(), false),
                None => (V::default(), true),
            };

            out.push(SeriesPoint {
                entity_key: entity.map(str::to_string),
                bucket_start: cursor,
                bucket_end: next,
                label: self.clock.label(cursor),
                value,
                is_synthetic,
            });

            cursor = next;
        }
    }

    fn degraded(&self) -> bool {
        if self.clock.period().is_valid() {
            return false;
        }
        tracing::warn!(
            period = %self.clock.period(),
            "invalid granularity degrades to an empty series"
        );
        true
    }

    /// Output capacity estimate. Calendar buckets have no fixed width, so
    /// those series start at zero capacity and grow.
    fn estimate_buckets(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> usize {
        let step = self.clock.period().duration();
        if step.is_zero() || end <= start {
            return 0;
        }
        ((end - start).num_seconds() / step.num_seconds() + 1) as usize
    }
}
