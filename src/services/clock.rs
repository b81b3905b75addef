//! Bucket boundary arithmetic
//!
//! A `BucketClock` truncates timestamps to bucket starts, advances a bucket
//! start to the next one, and renders presentation labels, for one
//! granularity in one explicitly configured time zone.
//!
//! The zone is load-bearing: bucket boundaries shown to end users must align
//! with their local calendar day, week, and month, so all calendar truncation
//! happens in the configured zone, never in a naive UTC frame. Timestamps
//! stay `DateTime<Utc>` at the API surface; the zone is applied internally.

use crate::types::{PeriodType, PointLabel};
use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, Months, NaiveDate, NaiveTime, TimeZone,
    Timelike, Utc,
};

/// Boundary arithmetic for one granularity in one zone.
#[derive(Debug, Clone)]
pub struct BucketClock<Tz: TimeZone> {
    period: PeriodType,
    zone: Tz,
}

impl<Tz: TimeZone> BucketClock<Tz> {
    pub fn new(period: PeriodType, zone: Tz) -> Self {
        Self { period, zone }
    }

    pub fn period(&self) -> PeriodType {
        self.period
    }

    /// Floor a timestamp to the start of its bucket.
    ///
    /// Sub-day granularities zero out the sub-unit parts of the local clock
    /// reading; calendar granularities rewind to local midnight of the day,
    /// the Sunday-start week, or the first of the month. For the `Invalid`
    /// sentinel this is the identity.
    pub fn truncate(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        match self.period {
            PeriodType::Second => floor_epoch(ts, 1),
            // Zone offsets are whole minutes, so minute boundaries are
            // zone-independent and an epoch floor suffices.
            PeriodType::Minute => floor_epoch(ts, 60),
            PeriodType::Hour => {
                // Zones at fractional-hour offsets have hour boundaries off
                // the UTC hour grid; zero the local minute and second.
                let local = ts.with_timezone(&self.zone);
                let time = local.time();
                let trimmed = Duration::minutes(time.minute() as i64)
                    + Duration::seconds(time.second() as i64)
                    + Duration::nanoseconds(time.nanosecond() as i64);
                (local - trimmed).with_timezone(&Utc)
            }
            PeriodType::Day => self.local_midnight(self.local_date(ts)),
            PeriodType::Week => {
                let date = self.local_date(ts);
                let back = date.weekday().num_days_from_sunday() as u64;
                let sunday = date.checked_sub_days(Days::new(back)).unwrap_or(date);
                self.local_midnight(sunday)
            }
            PeriodType::Month => {
                let date = self.local_date(ts);
                let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);
                self.local_midnight(first)
            }
            PeriodType::Invalid => ts,
        }
    }

    /// The start of the bucket after `bucket_start`.
    ///
    /// Sub-day granularities add the fixed duration; calendar granularities
    /// add one calendar unit in the configured zone, which crosses month and
    /// year boundaries and variable month lengths correctly. The `Invalid`
    /// sentinel does not move — callers walking buckets must check
    /// [`PeriodType::is_valid`] first.
    pub fn advance(&self, bucket_start: DateTime<Utc>) -> DateTime<Utc> {
        match self.period {
            PeriodType::Second | PeriodType::Minute | PeriodType::Hour => {
                bucket_start + self.period.duration()
            }
            PeriodType::Day => self.advance_days(bucket_start, 1),
            PeriodType::Week => self.advance_days(bucket_start, 7),
            PeriodType::Month => {
                let date = self.local_date(bucket_start);
                match date.checked_add_months(Months::new(1)) {
                    Some(next) => self.local_midnight(next),
                    None => bucket_start,
                }
            }
            PeriodType::Invalid => bucket_start,
        }
    }

    /// Presentation label for the bucket starting at `bucket_start`.
    ///
    /// Sub-day buckets report their raw epoch-second boundaries; calendar
    /// buckets report the start date as `YYYY-MM-DD` in the configured zone.
    pub fn label(&self, bucket_start: DateTime<Utc>) -> PointLabel {
        match self.period {
            PeriodType::Second | PeriodType::Minute | PeriodType::Hour => PointLabel::Epoch {
                start: bucket_start.timestamp(),
                end: self.advance(bucket_start).timestamp(),
            },
            PeriodType::Day | PeriodType::Week | PeriodType::Month => PointLabel::Date(
                self.local_date(bucket_start)
                    .format("%Y-%m-%d")
                    .to_string(),
            ),
            PeriodType::Invalid => PointLabel::empty(),
        }
    }

    fn local_date(&self, ts: DateTime<Utc>) -> NaiveDate {
        ts.with_timezone(&self.zone).date_naive()
    }

    fn advance_days(&self, bucket_start: DateTime<Utc>, days: u64) -> DateTime<Utc> {
        let date = self.local_date(bucket_start);
        match date.checked_add_days(Days::new(days)) {
            Some(next) => self.local_midnight(next),
            None => bucket_start,
        }
    }

    /// Resolve local midnight of `date` to an instant.
    ///
    /// DST can skip or duplicate local midnight; the earliest valid instant
    /// of the local day is used either way, so buckets stay strictly
    /// increasing.
    fn local_midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        let naive = date.and_time(NaiveTime::MIN);
        match self.zone.from_local_datetime(&naive) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
            LocalResult::None => self
                .zone
                .from_local_datetime(&(naive + Duration::hours(1)))
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
        }
    }
}

fn floor_epoch(ts: DateTime<Utc>, step_secs: i64) -> DateTime<Utc> {
    let secs = ts.timestamp();
    let floored = secs - secs.rem_euclid(step_secs);
    DateTime::from_timestamp(floored, 0).unwrap_or(ts)
}
