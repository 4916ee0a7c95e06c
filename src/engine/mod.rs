pub mod bar_geometry;
pub mod grid_mapper;
pub mod json_contract;
pub mod matcher;
pub mod placement;
pub mod stacking;
pub mod tolerance;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    ChartDataset, CursorCoordinates, CursorPosition, PinnedCursor, SeriesMapping, SurfaceId,
    Viewport,
};

pub use grid_mapper::{GridMapper, LinearGridMapper};
pub use matcher::{
    MatchReport, MatchedPoint, OPTIMIZED_MODE_SERIES_LIMIT, SeriesHighlights, ValueFormatter,
};
pub use placement::{ContainerBounds, PlacementTransform, TooltipSize, assemble_transform};
pub use stacking::StackTotals;
pub use tolerance::y_buffer;

/// Per-engine tuning; pass state is never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipEngineConfig {
    /// Surface this engine serves; cursor events targeting other surfaces
    /// are ignored unless the tooltip is pinned.
    pub surface: SurfaceId,
    /// Cap on matches per pass.
    pub match_limit: usize,
    /// Widens the tolerance window to effectively include every series.
    pub show_all_series: bool,
}

impl TooltipEngineConfig {
    #[must_use]
    pub fn new(surface: SurfaceId) -> Self {
        Self {
            surface,
            match_limit: OPTIMIZED_MODE_SERIES_LIMIT,
            show_all_series: false,
        }
    }

    #[must_use]
    pub fn with_match_limit(mut self, match_limit: usize) -> Self {
        self.match_limit = match_limit;
        self
    }

    #[must_use]
    pub fn with_show_all_series(mut self, show_all_series: bool) -> Self {
        self.show_all_series = show_all_series;
        self
    }
}

/// Result of one hover pass: the match list plus the placement transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPass {
    pub report: MatchReport,
    pub transform: Option<PlacementTransform>,
}

/// The hover tooltip engine.
///
/// Owns only the grid mapper and tuning; every pass is recomputed from the
/// borrowed dataset, cursor, and pin state, so rapid pointer movement can
/// simply supersede stale results.
pub struct TooltipEngine<M: GridMapper> {
    mapper: M,
    config: TooltipEngineConfig,
}

impl<M: GridMapper> TooltipEngine<M> {
    #[must_use]
    pub fn new(mapper: M, config: TooltipEngineConfig) -> Self {
        Self { mapper, config }
    }

    #[must_use]
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    #[must_use]
    pub fn config(&self) -> TooltipEngineConfig {
        self.config
    }

    pub fn set_show_all_series(&mut self, show_all_series: bool) {
        self.config.show_all_series = show_all_series;
    }

    /// Replaces the mapper after a relayout of the host chart surface.
    pub fn set_mapper(&mut self, mapper: M) {
        self.mapper = mapper;
    }

    /// Runs the matching pipeline for the current cursor (or pin) position.
    ///
    /// Returns an empty report when the cursor targets another surface, lies
    /// outside the plot area, or the transform is unavailable.
    pub fn nearby_series(
        &self,
        dataset: &ChartDataset,
        mapping: Option<&SeriesMapping>,
        cursor: Option<&CursorPosition>,
        pinned: Option<&PinnedCursor>,
        formatter: &dyn ValueFormatter,
    ) -> MatchReport {
        let Some(coords) = self.resolve_coords(cursor, pinned) else {
            return MatchReport::default();
        };
        let Some(grid) = self.mapper.pixel_to_grid(coords.plot_canvas) else {
            return MatchReport::default();
        };

        let buffer = y_buffer(
            self.mapper.axis_interval(),
            dataset.total_series(),
            self.config.show_all_series,
        );
        let mut report = matcher::check_for_nearby_series(
            dataset,
            mapping,
            grid,
            coords.plot_canvas,
            buffer,
            &self.mapper,
            formatter,
            self.config.match_limit,
        );
        report.sort_for_display();
        trace!(
            bucket = grid.bucket,
            matches = report.points.len(),
            emphasized = report.highlights.emphasized.len(),
            "nearby series pass"
        );
        report
    }

    /// Computes the placement transform for a tooltip of `size`.
    ///
    /// Returns `None` when there is no usable position or the window has a
    /// zero dimension (mid-resize frame).
    pub fn placement(
        &self,
        cursor: Option<&CursorPosition>,
        pinned: Option<&PinnedCursor>,
        size: TooltipSize,
        window: Viewport,
        container: Option<ContainerBounds>,
    ) -> Option<PlacementTransform> {
        if !window.is_valid() {
            return None;
        }
        let coords = match (pinned, cursor) {
            (Some(pinned), _) => pinned.coords,
            (None, Some(cursor)) => cursor.coords,
            (None, None) => return None,
        };
        Some(assemble_transform(coords, pinned, size, window, container))
    }

    /// One full hover pass: matching plus placement.
    ///
    /// No transform is produced when nothing matched; the host hides the
    /// tooltip for that frame.
    #[allow(clippy::too_many_arguments)]
    pub fn pass(
        &self,
        dataset: &ChartDataset,
        mapping: Option<&SeriesMapping>,
        cursor: Option<&CursorPosition>,
        pinned: Option<&PinnedCursor>,
        formatter: &dyn ValueFormatter,
        size: TooltipSize,
        window: Viewport,
        container: Option<ContainerBounds>,
    ) -> TooltipPass {
        let report = self.nearby_series(dataset, mapping, cursor, pinned, formatter);
        let transform = if report.is_empty() {
            None
        } else {
            self.placement(cursor, pinned, size, window, container)
        };
        TooltipPass { report, transform }
    }

    /// Pinned positions override and bypass the surface gate; live cursor
    /// events must target this engine's surface.
    fn resolve_coords(
        &self,
        cursor: Option<&CursorPosition>,
        pinned: Option<&PinnedCursor>,
    ) -> Option<CursorCoordinates> {
        if let Some(pinned) = pinned {
            return Some(pinned.coords);
        }
        let cursor = cursor?;
        match cursor.target {
            Some(target) if target == self.config.surface => Some(cursor.coords),
            _ => None,
        }
    }
}
