//! The canonical nearby-series matcher.
//!
//! One pass scans every series at the cursor's time bucket, admits points
//! within the vertical tolerance window, and classifies each as emphasized
//! ("closest to cursor") or not via a percentage-of-value test. Stacked
//! series are matched against their cumulative visual position; bar series
//! fall back to rendered-geometry hit testing when the logical test misses.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{ChartDataset, GridPoint, PixelPoint, SeriesKind, SeriesMapping};
use crate::engine::bar_geometry::{bar_segment_x_bounds, bar_segment_y_bounds, estimate_bar_width};
use crate::engine::grid_mapper::GridMapper;
use crate::engine::stacking::StackTotals;
use crate::engine::tolerance::SHOW_FEWER_SERIES_LIMIT;

/// Emphasis band floor when many series compete for the cursor.
pub const MIN_PERCENT_RANGE_MANY_SERIES: f64 = 2.0;
/// Emphasis band floor for sparse charts.
pub const MIN_PERCENT_RANGE_FEW_SERIES: f64 = 5.0;
/// Default cap on matches per pass, protecting against pathological series
/// counts.
pub const OPTIMIZED_MODE_SERIES_LIMIT: usize = 500;

/// Unit-aware value formatting supplied by the host's display-options layer.
pub trait ValueFormatter {
    fn format(&self, value: f64) -> String;
}

impl<F> ValueFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

/// One matched data point, created fresh per matching pass.
///
/// `datum_idx` is `None` when the match came from bar-segment geometry rather
/// than an exact data-point test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedPoint {
    pub series_idx: usize,
    pub datum_idx: Option<usize>,
    pub series_name: String,
    pub timestamp_ms: f64,
    pub value: f64,
    pub formatted_value: String,
    pub marker_color: String,
    pub closest_to_cursor: bool,
}

/// Advisory emphasize/de-emphasize series-index sets.
///
/// The host chart surface applies these to visually highlight series closest
/// to the cursor and mute the rest; they are a cooperative hint, not owned
/// state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesHighlights {
    pub emphasized: SmallVec<[usize; 8]>,
    pub muted: SmallVec<[usize; 8]>,
}

/// Output of one matching pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchReport {
    pub points: Vec<MatchedPoint>,
    pub highlights: SeriesHighlights,
}

impl MatchReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Orders points by descending value for the presenter.
    ///
    /// The sort is stable (ties keep series order), so a virtualized list can
    /// window-render the result without recomputation.
    pub fn sort_for_display(&mut self) {
        self.points
            .sort_by_key(|point| Reverse(OrderedFloat(point.value)));
    }
}

/// Checks whether `value_to_check` falls within `percentage` percent of
/// `base_value`.
#[must_use]
pub fn within_percentage_range(value_to_check: f64, base_value: f64, percentage: f64) -> bool {
    let range = percentage / 100.0 * base_value;
    let lower_bound = base_value - range;
    let upper_bound = base_value + range;
    value_to_check >= lower_bound && value_to_check <= upper_bound
}

/// Emphasis band in percent for the current series count: tightens as more
/// series are present, never below the floor.
#[must_use]
pub fn percent_range_to_check(total_series: usize) -> f64 {
    let min_percent = if total_series > SHOW_FEWER_SERIES_LIMIT {
        MIN_PERCENT_RANGE_MANY_SERIES
    } else {
        MIN_PERCENT_RANGE_FEW_SERIES
    };
    if total_series == 0 {
        return min_percent;
    }
    min_percent.max(100.0 / total_series as f64)
}

/// Returns every point within `y_buffer` of the cursor at the cursor's time
/// bucket, in series order.
///
/// `cursor_px` is the plot-canvas pixel position, used only for bar-geometry
/// hit tests. Scanning stops once `limit` matches have been produced.
#[allow(clippy::too_many_arguments)]
pub fn check_for_nearby_series(
    dataset: &ChartDataset,
    mapping: Option<&SeriesMapping>,
    cursor: GridPoint,
    cursor_px: PixelPoint,
    y_buffer: f64,
    mapper: &dyn GridMapper,
    formatter: &dyn ValueFormatter,
    limit: usize,
) -> MatchReport {
    let mut report = MatchReport::default();

    let total_series = dataset.total_series();
    let Some(timestamp_ms) = dataset.timestamp_ms_at(cursor.bucket) else {
        return report;
    };

    let percent_range = percent_range_to_check(total_series);
    let mut stack_totals = StackTotals::new();

    for (series_idx, series) in dataset.series().iter().enumerate() {
        if report.points.len() >= limit {
            debug!(
                limit,
                total_series, "nearby series scan truncated at match cap"
            );
            break;
        }

        let entry = mapping.and_then(|mapping| mapping.entry(series_idx));
        if entry.is_some_and(|entry| !entry.visible) {
            continue;
        }

        let Some(raw_value) = dataset.value_at(series_idx, cursor.bucket) else {
            continue;
        };

        let stack_id = entry.and_then(|entry| entry.stack_id.as_deref());
        let visual_value = stack_totals.resolve_visual_value(stack_id, raw_value);

        let mut datum_idx = Some(cursor.bucket);
        let mut matched = (visual_value - cursor.value).abs() <= y_buffer;

        if !matched && entry.map(|entry| entry.kind) == Some(SeriesKind::Bar) {
            matched = bar_segment_contains_cursor(
                mapping,
                mapper,
                dataset,
                series_idx,
                cursor.bucket,
                visual_value,
                raw_value,
                cursor_px,
            );
            if matched {
                datum_idx = None;
            }
        }

        if !matched {
            continue;
        }

        let closest_to_cursor = within_percentage_range(cursor.value, visual_value, percent_range);
        if closest_to_cursor {
            report.highlights.emphasized.push(series_idx);
        } else {
            report.highlights.muted.push(series_idx);
        }

        report.points.push(MatchedPoint {
            series_idx,
            datum_idx,
            series_name: series.name.clone(),
            timestamp_ms,
            value: raw_value,
            formatted_value: formatter.format(raw_value),
            marker_color: series.color.clone(),
            closest_to_cursor,
        });
    }

    report
}

/// Hit test against the rendered bar segment of `series_idx` at `bucket`.
#[allow(clippy::too_many_arguments)]
fn bar_segment_contains_cursor(
    mapping: Option<&SeriesMapping>,
    mapper: &dyn GridMapper,
    dataset: &ChartDataset,
    series_idx: usize,
    bucket: usize,
    visual_value: f64,
    raw_value: f64,
    cursor_px: PixelPoint,
) -> bool {
    let Some(mapping) = mapping else {
        return false;
    };
    let Some(position) = mapping.bar_group_position(series_idx) else {
        return false;
    };
    let group_size = mapping.bar_group_size();

    let Some(center_x) = mapper.bucket_center_x(bucket) else {
        return false;
    };
    let bandwidth = estimate_bar_width(mapper, bucket, dataset.x_axis().len());
    let Some((left, right)) = bar_segment_x_bounds(center_x, bandwidth, group_size, position)
    else {
        return false;
    };
    if cursor_px.x < left || cursor_px.x > right {
        return false;
    }

    let bottom_visual = visual_value - raw_value;
    let Some((top_px, bottom_px)) =
        bar_segment_y_bounds(mapper, bucket, bottom_visual, visual_value)
    else {
        return false;
    };
    cursor_px.y >= top_px && cursor_px.y <= bottom_px
}
