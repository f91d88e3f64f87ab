//! Epoch-millisecond time helpers
//!
//! All prompt timestamps are UTC epoch milliseconds. Day arithmetic uses
//! Euclidean division so that negative deltas (clock moved backwards) floor
//! toward negative infinity instead of truncating toward zero.

use chrono::Utc;

/// Milliseconds per day
pub const MS_PER_DAY: i64 = 86_400_000;

/// UTC calendar day number for a timestamp.
pub fn day_index(ms: i64) -> i64 {
    ms.div_euclid(MS_PER_DAY)
}

/// Whether two timestamps fall on the same UTC calendar day.
pub fn same_day(a: i64, b: i64) -> bool {
    day_index(a) == day_index(b)
}

/// Whole days elapsed from `first` to `now`. Negative when `now` precedes
/// `first`.
pub fn days_elapsed(first: i64, now: i64) -> i64 {
    (now - first).div_euclid(MS_PER_DAY)
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
