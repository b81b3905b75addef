//! Period-over-period comparison
//!
//! The trend-delta calculation shown next to dashboard totals (today vs.
//! yesterday, this week vs. last week). Not part of the series walk —
//! callers invoke it per value pair.

use crate::types::ComparisonResult;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Percent delta between a current value and its prior-period value.
///
/// The division runs in decimal arithmetic so currency-scale integers don't
/// pick up binary-float representation error, and the result is rounded to
/// two decimal places before exposure.
///
/// Zero-baseline policy: when both values are zero the delta is 0; when only
/// the prior is zero the delta saturates to 100. That 100 is a sentinel, not
/// a genuine percentage — any increase from a zero baseline reports as
/// "+100%", however small.
pub fn compare(current: i64, prior: i64) -> ComparisonResult {
    let percent = if prior == 0 {
        if current == 0 {
            Decimal::ZERO
        } else {
            Decimal::ONE_HUNDRED
        }
    } else {
        (Decimal::from(current) - Decimal::from(prior)) * Decimal::ONE_HUNDRED
            / Decimal::from(prior)
    };

    ComparisonResult {
        value: current,
        comparison_percent: percent.round_dp(2).to_f64().unwrap_or(0.0),
    }
}
