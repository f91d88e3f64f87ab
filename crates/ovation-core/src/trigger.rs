//! Pure trigger math
//!
//! No I/O here: both triggers are total functions over the effective
//! threshold and the recorded counters, so they can be tested exhaustively.

use ovation_api::days_elapsed;

/// Day trigger: a whole positive multiple of `min_days` has elapsed since
/// the first recorded launch. Disabled thresholds and negative elapsed time
/// never fire.
pub(crate) fn day_trigger(min_days: Option<u32>, first_ms: i64, now_ms: i64) -> bool {
    let Some(min_days) = min_days else {
        return false;
    };
    if min_days == 0 {
        return false;
    }

    let elapsed = days_elapsed(first_ms, now_ms);
    elapsed > 0 && elapsed % i64::from(min_days) == 0
}

/// Launch trigger: the number of launches before the current one is a
/// positive multiple of `min_launches`.
pub(crate) fn launch_trigger(min_launches: Option<u32>, num_launches: i64) -> bool {
    let Some(min_launches) = min_launches else {
        return false;
    };
    if min_launches == 0 {
        return false;
    }

    let prior = num_launches - 1;
    prior > 0 && prior % i64::from(min_launches) == 0
}
