//! On-screen geometry estimation for bar-type series.
//!
//! Bar hit-testing cannot rely on logical point coordinates alone: a bar
//! covers a pixel band, not a point. Geometry here is advisory; every
//! conversion failure degrades to a fallback width or `None` instead of
//! erroring, since a missed bar match only costs one tooltip entry.

use crate::engine::grid_mapper::GridMapper;

/// Width used when no neighbor spacing is available (single-bar dataset or
/// failed conversion).
pub const FALLBACK_BAR_WIDTH_PX: f64 = 10.0;

/// Estimates the pixel bandwidth of the bar at `bucket`.
///
/// The bandwidth spans from the midpoint to the left neighbor to the midpoint
/// to the right neighbor; edge bars mirror the bound they do have.
#[must_use]
pub fn estimate_bar_width(mapper: &dyn GridMapper, bucket: usize, bucket_count: usize) -> f64 {
    let Some(center) = mapper.bucket_center_x(bucket) else {
        return FALLBACK_BAR_WIDTH_PX;
    };

    let left_half = bucket
        .checked_sub(1)
        .and_then(|prev| mapper.bucket_center_x(prev))
        .map(|prev| (center - prev) / 2.0);
    let right_half = (bucket + 1 < bucket_count)
        .then(|| mapper.bucket_center_x(bucket + 1))
        .flatten()
        .map(|next| (next - center) / 2.0);

    let width = match (left_half, right_half) {
        (Some(left), Some(right)) => left + right,
        // Mirror the missing bound for edge bars.
        (Some(left), None) => left * 2.0,
        (None, Some(right)) => right * 2.0,
        (None, None) => return FALLBACK_BAR_WIDTH_PX,
    };

    if width.is_finite() && width > 0.0 {
        width
    } else {
        FALLBACK_BAR_WIDTH_PX
    }
}

/// Pixel x bounds of the `position`-th segment of a grouped bar.
///
/// The bandwidth is divided evenly among the group; segment `i` occupies
/// `[center - bandwidth/2 + i*segment, +segment]`.
#[must_use]
pub fn bar_segment_x_bounds(
    center_x: f64,
    bandwidth: f64,
    group_size: usize,
    position: usize,
) -> Option<(f64, f64)> {
    if group_size == 0 || position >= group_size {
        return None;
    }
    if !center_x.is_finite() || !bandwidth.is_finite() || bandwidth <= 0.0 {
        return None;
    }

    let segment = bandwidth / group_size as f64;
    let left = center_x - bandwidth / 2.0 + position as f64 * segment;
    Some((left, left + segment))
}

/// Pixel y bounds (top, bottom) of a stacked bar segment from its visual
/// bottom/top values.
///
/// Returns `None` when either conversion fails.
#[must_use]
pub fn bar_segment_y_bounds(
    mapper: &dyn GridMapper,
    bucket: usize,
    bottom_visual: f64,
    top_visual: f64,
) -> Option<(f64, f64)> {
    let top_px = mapper.grid_to_pixel(bucket, top_visual)?.y;
    let bottom_px = mapper.grid_to_pixel(bucket, bottom_visual)?.y;
    Some((top_px.min(bottom_px), top_px.max(bottom_px)))
}
