use serde::{Deserialize, Serialize};

use crate::core::types::PixelPoint;

/// Opaque identifier the host assigns to each chart surface.
///
/// Cursor events carry the id of the surface they originated on so the
/// engine can ignore events from adjacent charts (shared crosshair setups)
/// unless the tooltip is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u64);

/// Cursor pixel position in the three coordinate spaces the host tracks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorCoordinates {
    /// Relative to the whole document/page.
    pub page: PixelPoint,
    /// Relative to the visible window.
    pub client: PixelPoint,
    /// Relative to the chart's plot canvas.
    pub plot_canvas: PixelPoint,
}

impl CursorCoordinates {
    #[must_use]
    pub fn new(page: PixelPoint, client: PixelPoint, plot_canvas: PixelPoint) -> Self {
        Self {
            page,
            client,
            plot_canvas,
        }
    }
}

/// A live cursor sample, recreated on every pointer-move event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub coords: CursorCoordinates,
    /// Surface the originating UI event targeted, when known.
    pub target: Option<SurfaceId>,
}

impl CursorPosition {
    #[must_use]
    pub fn new(coords: CursorCoordinates, target: Option<SurfaceId>) -> Self {
        Self { coords, target }
    }
}

/// A cursor position frozen at the moment of a pin action.
///
/// Owned by the UI boundary; while present it overrides live cursor tracking
/// for both matching and placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinnedCursor {
    pub coords: CursorCoordinates,
}

impl PinnedCursor {
    #[must_use]
    pub fn capture(position: CursorPosition) -> Self {
        Self {
            coords: position.coords,
        }
    }
}
