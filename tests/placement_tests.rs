use tooltip_rs::core::{CursorCoordinates, CursorPosition, PinnedCursor, PixelPoint, Viewport};
use tooltip_rs::engine::placement::{
    CURSOR_PADDING_X, CURSOR_PADDING_Y, ContainerBounds, MIN_EDGE_PADDING, TooltipSize,
    assemble_transform,
};

fn coords(x: f64, y: f64) -> CursorCoordinates {
    CursorCoordinates::new(
        PixelPoint::new(x, y),
        PixelPoint::new(x, y),
        PixelPoint::new(x, y),
    )
}

#[test]
fn default_placement_offsets_right_and_down() {
    let transform = assemble_transform(
        coords(100.0, 100.0),
        None,
        TooltipSize::new(200.0, 150.0),
        Viewport::new(1000, 800),
        None,
    );
    assert_eq!(transform.x, 100.0 + CURSOR_PADDING_X);
    assert_eq!(transform.y, 100.0 + CURSOR_PADDING_Y);
}

#[test]
fn bottom_overflow_resolves_against_window_edge() {
    let transform = assemble_transform(
        coords(100.0, 780.0),
        None,
        TooltipSize::new(200.0, 150.0),
        Viewport::new(1000, 800),
        None,
    );
    assert_eq!(transform.y, 800.0 - 150.0);
}

#[test]
fn right_overflow_flips_to_cursor_left() {
    let transform = assemble_transform(
        coords(950.0, 100.0),
        None,
        TooltipSize::new(200.0, 150.0),
        Viewport::new(1000, 800),
        None,
    );
    assert_eq!(transform.x, 950.0 - 200.0 - CURSOR_PADDING_X);
}

#[test]
fn bottom_right_corner_stays_fully_inside_viewport() {
    let size = TooltipSize::new(400.0, 300.0);
    let transform = assemble_transform(
        coords(990.0, 790.0),
        None,
        size,
        Viewport::new(1000, 800),
        None,
    );
    assert!(transform.x >= 0.0);
    assert!(transform.y >= 0.0);
    assert!(transform.x + size.width <= 1000.0);
    assert!(transform.y + size.height <= 800.0);
}

#[test]
fn container_makes_coordinates_relative() {
    let container = ContainerBounds::new(300.0, 200.0, 600.0, 400.0);
    let transform = assemble_transform(
        coords(400.0, 250.0),
        None,
        TooltipSize::new(100.0, 80.0),
        Viewport::new(1920, 1080),
        Some(container),
    );
    assert_eq!(transform.x, 100.0 + CURSOR_PADDING_X);
    assert_eq!(transform.y, 50.0 + CURSOR_PADDING_Y);
    assert_eq!(transform.container, Some(container));
}

#[test]
fn container_right_edge_flips_horizontal_overflow() {
    // Cursor page x 480 is container-relative 380; 380 + 32 + 100 overflows
    // the container's 400px width even though the window has room, so the
    // tooltip flips to the cursor's left in container space.
    let container = ContainerBounds::new(100.0, 0.0, 400.0, 600.0);
    let transform = assemble_transform(
        coords(480.0, 50.0),
        None,
        TooltipSize::new(100.0, 80.0),
        Viewport::new(1920, 1080),
        Some(container),
    );
    assert_eq!(transform.x, 380.0 - 100.0 - CURSOR_PADDING_X);
}

#[test]
fn container_bottom_edge_clamps_vertical_overflow() {
    let container = ContainerBounds::new(0.0, 0.0, 600.0, 300.0);
    let transform = assemble_transform(
        coords(100.0, 280.0),
        None,
        TooltipSize::new(100.0, 120.0),
        Viewport::new(1920, 1080),
        Some(container),
    );
    assert_eq!(transform.y, 300.0 - 120.0);
}

#[test]
fn clamps_never_place_above_or_left_of_minimum_padding() {
    // Oversized tooltip forces both clamps.
    let transform = assemble_transform(
        coords(10.0, 10.0),
        None,
        TooltipSize::new(900.0, 900.0),
        Viewport::new(800, 600),
        None,
    );
    assert_eq!(transform.x, MIN_EDGE_PADDING);
    assert_eq!(transform.y, MIN_EDGE_PADDING);
}

#[test]
fn pinned_position_overrides_live_cursor() {
    let pinned = PinnedCursor::capture(CursorPosition::new(coords(500.0, 400.0), None));
    let transform = assemble_transform(
        coords(10.0, 10.0),
        Some(&pinned),
        TooltipSize::new(100.0, 80.0),
        Viewport::new(1000, 800),
        None,
    );
    assert_eq!(transform.x, 500.0 + CURSOR_PADDING_X);
    assert_eq!(transform.y, 400.0 + CURSOR_PADDING_Y);
}

#[test]
fn css_translate_string_is_stable() {
    let transform = assemble_transform(
        coords(100.0, 100.0),
        None,
        TooltipSize::new(200.0, 150.0),
        Viewport::new(1000, 800),
        None,
    );
    assert_eq!(transform.to_css_translate(), "translate3d(132px, 116px, 0)");
}
