//! Bucket granularities
//!
//! A `PeriodType` selects the bucket width and calendar-alignment rules for a
//! series. Sub-day granularities (`Second`, `Minute`, `Hour`) step by a fixed
//! duration; calendar granularities (`Day`, `Week`, `Month`) step by
//! variable-length calendar units in a configured time zone.
//!
//! Unrecognized tags do not fail: they become the [`PeriodType::Invalid`]
//! sentinel, which the series builder detects and turns into an empty series.
//! Callers that want loud failure instead can use the strict [`FromStr`] impl.

use crate::types::{GaplessError, Result};
use chrono::Duration;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bucket granularity tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    /// Sentinel for unrecognized or empty tags. Inert: zero duration,
    /// identity truncation, non-advancing step. The series builder maps it
    /// to an empty series rather than an error.
    Invalid,
}

/// Deserialization is lenient like [`PeriodType::parse`]: an unknown tag
/// becomes the `Invalid` sentinel, never a deserialization error.
impl<'de> Deserialize<'de> for PeriodType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::parse(&tag))
    }
}

impl PeriodType {
    /// Parse a caller-supplied tag leniently.
    ///
    /// Tags are exact lowercase strings ("second" … "month"). Anything else,
    /// including the empty string, degrades to [`PeriodType::Invalid`] —
    /// a typo'd granularity yields an empty series downstream, not an error.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "second" => Self::Second,
            "minute" => Self::Minute,
            "hour" => Self::Hour,
            "day" => Self::Day,
            "week" => Self::Week,
            "month" => Self::Month,
            _ => Self::Invalid,
        }
    }

    /// The fixed step for sub-day granularities.
    ///
    /// Calendar granularities have no fixed width (months vary, DST shifts
    /// days); for those, and for `Invalid`, this returns zero.
    pub fn duration(&self) -> Duration {
        match self {
            Self::Second => Duration::seconds(1),
            Self::Minute => Duration::minutes(1),
            Self::Hour => Duration::hours(1),
            Self::Day | Self::Week | Self::Month | Self::Invalid => Duration::zero(),
        }
    }

    /// True for every granularity except the `Invalid` sentinel.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// True for granularities stepped by calendar rules rather than a fixed
    /// duration.
    pub fn is_calendar(&self) -> bool {
        matches!(self, Self::Day | Self::Week | Self::Month)
    }

    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Invalid => "invalid",
        }
    }

    /// All valid granularities in ascending bucket width.
    pub fn all() -> &'static [PeriodType] {
        &[
            Self::Second,
            Self::Minute,
            Self::Hour,
            Self::Day,
            Self::Week,
            Self::Month,
        ]
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing surface for callers that validate granularity up front.
impl FromStr for PeriodType {
    type Err = GaplessError;

    fn from_str(tag: &str) -> Result<Self> {
        match Self::parse(tag) {
            Self::Invalid => Err(GaplessError::UnknownGranularity(tag.to_string())),
            period => Ok(period),
        }
    }
}
