use tooltip_rs::core::{
    ChartDataset, CursorCoordinates, CursorPosition, PinnedCursor, PixelPoint, PlotRect,
    SurfaceId, TimeSeries, Viewport,
};
use tooltip_rs::engine::placement::{CURSOR_PADDING_X, CURSOR_PADDING_Y};
use tooltip_rs::engine::{LinearGridMapper, TooltipEngine, TooltipEngineConfig, TooltipSize};

const SURFACE: SurfaceId = SurfaceId(7);

fn engine() -> TooltipEngine<LinearGridMapper> {
    let mapper = LinearGridMapper::new(PlotRect::new(0.0, 0.0, 1000.0, 500.0), 5, 0.0, 10.0)
        .expect("valid mapper")
        .with_axis_interval(1.0)
        .expect("valid interval");
    TooltipEngine::new(mapper, TooltipEngineConfig::new(SURFACE))
}

fn dataset() -> ChartDataset {
    ChartDataset::new(
        vec![0.0, 15.0, 30.0, 45.0, 60.0],
        vec![
            TimeSeries::from_values("A", "#111", &[1.0, 1.0, 1.0, 1.0, 1.0]),
            TimeSeries::from_values("B", "#222", &[5.0, 5.0, 5.0, 5.0, 5.0]),
        ],
    )
    .expect("valid dataset")
}

fn cursor_at(x: f64, y: f64, target: Option<SurfaceId>) -> CursorPosition {
    CursorPosition::new(
        CursorCoordinates::new(
            PixelPoint::new(x, y),
            PixelPoint::new(x, y),
            PixelPoint::new(x, y),
        ),
        target,
    )
}

fn format_plain(value: f64) -> String {
    format!("{value:.1}")
}

#[test]
fn hover_near_series_produces_sorted_report() {
    let engine = engine();
    // Plot y for value 4.9 is (10 - 4.9) / 10 * 500 = 255.
    let cursor = cursor_at(500.0, 255.0, Some(SURFACE));

    let report = engine.nearby_series(&dataset(), None, Some(&cursor), None, &format_plain);
    assert_eq!(report.points.len(), 2);
    // Sorted by descending value for the presenter.
    assert_eq!(report.points[0].series_name, "B");
    assert_eq!(report.points[1].series_name, "A");
    assert!(report.points[0].closest_to_cursor);
    assert!(!report.points[1].closest_to_cursor);
}

#[test]
fn cursor_from_other_surface_is_ignored() {
    let engine = engine();
    let cursor = cursor_at(500.0, 255.0, Some(SurfaceId(99)));
    let report = engine.nearby_series(&dataset(), None, Some(&cursor), None, &format_plain);
    assert!(report.is_empty());
}

#[test]
fn cursor_without_target_is_ignored() {
    let engine = engine();
    let cursor = cursor_at(500.0, 255.0, None);
    let report = engine.nearby_series(&dataset(), None, Some(&cursor), None, &format_plain);
    assert!(report.is_empty());
}

#[test]
fn pinned_position_bypasses_surface_gate() {
    let engine = engine();
    // Live cursor wandered into the tooltip (different target), but the pin
    // keeps the original position active.
    let live = cursor_at(10.0, 10.0, Some(SurfaceId(99)));
    let pinned = PinnedCursor::capture(cursor_at(500.0, 255.0, Some(SURFACE)));

    let report = engine.nearby_series(&dataset(), None, Some(&live), Some(&pinned), &format_plain);
    assert_eq!(report.points.len(), 2);
}

#[test]
fn cursor_outside_plot_yields_empty_report() {
    let engine = engine();
    let cursor = cursor_at(500.0, 900.0, Some(SURFACE));
    let report = engine.nearby_series(&dataset(), None, Some(&cursor), None, &format_plain);
    assert!(report.is_empty());
}

#[test]
fn show_all_includes_far_series() {
    let mut engine = engine();
    // Cursor at value 9.9: with interval 1 the normal window (5.5) misses A
    // at 1.0 but show-all (10) includes it.
    let cursor = cursor_at(500.0, 5.0, Some(SURFACE));

    let report = engine.nearby_series(&dataset(), None, Some(&cursor), None, &format_plain);
    assert_eq!(report.points.len(), 1);

    engine.set_show_all_series(true);
    let report = engine.nearby_series(&dataset(), None, Some(&cursor), None, &format_plain);
    assert_eq!(report.points.len(), 2);
}

#[test]
fn pass_produces_transform_only_when_matched() {
    let engine = engine();
    let size = TooltipSize::new(200.0, 120.0);
    let window = Viewport::new(1920, 1080);

    let hit = cursor_at(500.0, 255.0, Some(SURFACE));
    let pass = engine.pass(&dataset(), None, Some(&hit), None, &format_plain, size, window, None);
    assert!(!pass.report.is_empty());
    let transform = pass.transform.expect("transform for matched pass");
    assert_eq!(transform.x, 500.0 + CURSOR_PADDING_X);
    assert_eq!(transform.y, 255.0 + CURSOR_PADDING_Y);

    let miss = cursor_at(500.0, 900.0, Some(SURFACE));
    let pass = engine.pass(&dataset(), None, Some(&miss), None, &format_plain, size, window, None);
    assert!(pass.report.is_empty());
    assert!(pass.transform.is_none());
}

#[test]
fn degenerate_window_yields_no_placement() {
    let engine = engine();
    let cursor = cursor_at(500.0, 255.0, Some(SURFACE));
    let placement = engine.placement(
        Some(&cursor),
        None,
        TooltipSize::new(200.0, 120.0),
        Viewport::new(0, 800),
        None,
    );
    assert!(placement.is_none());
}

#[test]
fn pass_with_no_cursor_and_no_pin_is_empty() {
    let engine = engine();
    let pass = engine.pass(
        &dataset(),
        None,
        None,
        None,
        &format_plain,
        TooltipSize::new(200.0, 120.0),
        Viewport::new(1920, 1080),
        None,
    );
    assert!(pass.report.is_empty());
    assert!(pass.transform.is_none());
}

#[test]
fn passes_with_identical_inputs_are_identical() {
    let engine = engine();
    let cursor = cursor_at(500.0, 255.0, Some(SURFACE));
    let dataset = dataset();

    let first = engine.nearby_series(&dataset, None, Some(&cursor), None, &format_plain);
    let second = engine.nearby_series(&dataset, None, Some(&cursor), None, &format_plain);
    assert_eq!(first, second);
}
