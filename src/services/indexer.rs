//! Sparse aggregate lookup
//!
//! Indexes the caller's pre-aggregated records for exact bucket-start
//! matching during the gap-fill walk. Built once per call and discarded.

use crate::types::RawAggregate;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

/// Lookup from `(entity, bucket_start)` to the matching input aggregate.
///
/// Duplicate `(entity, bucket_start)` pairs in the input are not an error:
/// the last record wins. Lookup is by exact timestamp equality — input
/// bucket starts are trusted to be pre-aligned to the granularity.
pub struct AggregateIndex<'a, V> {
    global: HashMap<DateTime<Utc>, &'a RawAggregate<V>>,
    by_entity: BTreeMap<&'a str, HashMap<DateTime<Utc>, &'a RawAggregate<V>>>,
}

impl<'a, V> AggregateIndex<'a, V> {
    /// Index for a single global series. Entity keys on the input records
    /// are ignored.
    pub fn single(aggregates: &'a [RawAggregate<V>]) -> Self {
        let mut global = HashMap::with_capacity(aggregates.len());
        for agg in aggregates {
            global.insert(agg.bucket_start, agg);
        }
        Self {
            global,
            by_entity: BTreeMap::new(),
        }
    }

    /// Index partitioned by entity key.
    ///
    /// Records lacking an entity key cannot be attributed to a series and
    /// are skipped.
    pub fn per_entity(aggregates: &'a [RawAggregate<V>]) -> Self {
        let mut by_entity: BTreeMap<&str, HashMap<DateTime<Utc>, &RawAggregate<V>>> =
            BTreeMap::new();
        for agg in aggregates {
            let Some(key) = agg.entity_key.as_deref() else {
                tracing::debug!(bucket_start = %agg.bucket_start, "aggregate without entity key skipped");
                continue;
            };
            by_entity.entry(key).or_default().insert(agg.bucket_start, agg);
        }
        Self {
            global: HashMap::new(),
            by_entity,
        }
    }

    pub fn get_global(&self, bucket_start: DateTime<Utc>) -> Option<&'a RawAggregate<V>> {
        self.global.get(&bucket_start).copied()
    }

    pub fn get(&self, entity: &str, bucket_start: DateTime<Utc>) -> Option<&'a RawAggregate<V>> {
        self.by_entity.get(entity)?.get(&bucket_start).copied()
    }

    /// Distinct entity keys present in the input, in lexicographic order.
    pub fn entities(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.by_entity.keys().copied()
    }

    pub fn entity_count(&self) -> usize {
        self.by_entity.len()
    }
}
