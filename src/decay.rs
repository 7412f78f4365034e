//! Exponential time decay of contribution weights.

use chrono::{DateTime, TimeZone, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days from `when` to `now`, compared as UTC instants.
/// Negative when `when` lies after `now`.
pub fn elapsed_days<A: TimeZone, B: TimeZone>(when: &DateTime<A>, now: &DateTime<B>) -> f64 {
    let delta = now.with_timezone(&Utc) - when.with_timezone(&Utc);
    delta.num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// `weight * 0.5^(elapsed_days / half_life_days)`.
///
/// A non-positive half-life disables decay and returns `weight` as is.
/// Future-dated contributions are not clamped and come out above `weight`.
pub fn decay<A: TimeZone, B: TimeZone>(
    weight: f64,
    when: &DateTime<A>,
    now: &DateTime<B>,
    half_life_days: f64,
) -> f64 {
    if half_life_days.is_nan() || half_life_days <= 0.0 {
        return weight;
    }
    weight * 0.5_f64.powf(elapsed_days(when, now) / half_life_days)
}

#[cfg(test)]
#[path = "decay_test.rs"]
mod tests;
