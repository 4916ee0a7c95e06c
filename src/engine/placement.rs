//! Viewport-constrained tooltip placement.
//!
//! Pure placement math, recomputed on every pointer move: the transform is
//! never cached across passes because tooltip content size can change.

use serde::{Deserialize, Serialize};

use crate::core::{CursorCoordinates, PinnedCursor, Viewport};

/// Horizontal gap between the cursor and the tooltip's near edge.
pub const CURSOR_PADDING_X: f64 = 32.0;
/// Vertical gap between the cursor and the tooltip's top edge.
pub const CURSOR_PADDING_Y: f64 = 16.0;
/// The tooltip never renders closer than this to the top/left edges.
pub const MIN_EDGE_PADDING: f64 = 8.0;

/// Measured size of the rendered tooltip content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

impl TooltipSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Page-space bounds of an optional containment element.
///
/// When present, the transform is made relative to the container and vertical
/// overflow resolves against its bottom edge instead of the window's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// 2D pixel translation plus the inputs it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementTransform {
    pub x: f64,
    pub y: f64,
    pub size: TooltipSize,
    pub container: Option<ContainerBounds>,
}

impl PlacementTransform {
    /// CSS-style translate string for web hosts.
    #[must_use]
    pub fn to_css_translate(&self) -> String {
        format!("translate3d({}px, {}px, 0)", self.x, self.y)
    }
}

/// Computes the tooltip translation for the current cursor (or pin) position.
///
/// Defaults to the cursor's page position plus fixed paddings; flips to the
/// cursor's left when the tooltip would overflow the right edge, resolves
/// vertical overflow against the bottom edge, and clamps to a minimum
/// padding from the top/left. A container supplies both overflow edges and
/// makes the transform container-relative; without one the window does.
#[must_use]
pub fn assemble_transform(
    coords: CursorCoordinates,
    pinned: Option<&PinnedCursor>,
    size: TooltipSize,
    window: Viewport,
    container: Option<ContainerBounds>,
) -> PlacementTransform {
    let page = pinned.map_or(coords, |pinned| pinned.coords).page;

    // Cursor position in the frame the tooltip is positioned in.
    let (cursor_x, cursor_y, right_edge, bottom_edge) = match container {
        Some(bounds) => (
            page.x - bounds.left,
            page.y - bounds.top,
            bounds.width,
            bounds.height,
        ),
        None => (
            page.x,
            page.y,
            f64::from(window.width),
            f64::from(window.height),
        ),
    };

    let mut x = cursor_x + CURSOR_PADDING_X;
    let mut y = cursor_y + CURSOR_PADDING_Y;

    if y + size.height > bottom_edge {
        y = (bottom_edge - size.height).max(MIN_EDGE_PADDING);
    }

    // Right-edge overflow flips the tooltip to the cursor's left side.
    if x + size.width > right_edge {
        x = cursor_x - size.width - CURSOR_PADDING_X;
    }

    x = x.max(MIN_EDGE_PADDING);
    y = y.max(MIN_EDGE_PADDING);

    PlacementTransform {
        x,
        y,
        size,
        container,
    }
}
