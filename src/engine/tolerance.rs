//! Dynamic vertical tolerance ("y buffer") around the cursor.
//!
//! The asymmetric shrink/grow behavior is load-bearing: the window shrinks as
//! more series compete for the same screen space, keeping the match list
//! readable for hundreds of series while staying generous for sparse charts.

/// Adjusts how many series show in the tooltip (higher == more series shown).
pub const INCREASE_NEARBY_SERIES_MULTIPLIER: f64 = 5.5;
/// Used for adjustment after the series-count divisor.
pub const DYNAMIC_NEARBY_SERIES_MULTIPLIER: f64 = 30.0;
/// Above this series count the trigger window starts shrinking.
pub const SHOW_FEWER_SERIES_LIMIT: usize = 5;
/// Never search a window narrower than roughly a third of a tick.
pub const Y_BUFFER_MIN_RATIO: f64 = 0.3;
/// "Show all" widens the window to roughly the whole visible band.
pub const SHOW_ALL_MULTIPLIER: f64 = 10.0;

/// Vertical value-space range around the cursor within which a point counts
/// as nearby, derived per pass from the y-axis tick interval.
#[must_use]
pub fn y_buffer(interval: f64, total_series: usize, show_all_series: bool) -> f64 {
    if show_all_series {
        return interval * SHOW_ALL_MULTIPLIER;
    }

    let buffer_min = interval * Y_BUFFER_MIN_RATIO;

    if total_series > SHOW_FEWER_SERIES_LIMIT {
        let adjusted = interval * DYNAMIC_NEARBY_SERIES_MULTIPLIER / total_series as f64;
        return buffer_min.max(adjusted);
    }

    buffer_min.max(interval * INCREASE_NEARBY_SERIES_MULTIPLIER)
}
