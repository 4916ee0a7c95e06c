pub mod cursor;
pub mod dataset;
pub mod mapping;
pub mod types;

pub use cursor::{CursorCoordinates, CursorPosition, PinnedCursor, SurfaceId};
pub use dataset::{ChartDataset, TimeSeries, normalize_timestamp_ms, timestamps_from_datetimes};
pub use mapping::{SeriesKind, SeriesMapping, SeriesMappingEntry};
pub use types::{GridPoint, PixelPoint, PlotRect, Viewport};
