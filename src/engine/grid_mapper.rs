use crate::core::{GridPoint, PixelPoint, PlotRect};
use crate::error::{TooltipError, TooltipResult};

/// Default y-axis split count used to derive a tick interval when the host
/// does not supply one (matches common charting-library defaults).
const DEFAULT_AXIS_SPLIT_COUNT: f64 = 5.0;

/// Pixel <-> logical conversion capability supplied by the host chart surface.
///
/// The engine depends only on this narrow interface instead of reaching into
/// a charting library's internal axis model. All per-pass conversions degrade
/// to `None` (chart not laid out, pixel outside the plot) rather than erroring.
pub trait GridMapper {
    /// Converts a plot-canvas pixel into (time-bucket index, value).
    ///
    /// Returns `None` when the pixel lies outside the plotting area or the
    /// transform is unavailable.
    fn pixel_to_grid(&self, pixel: PixelPoint) -> Option<GridPoint>;

    /// Inverse mapping used by bar geometry and overflow checks.
    ///
    /// Values outside the visible domain still map (the result may lie
    /// outside the plot); only non-finite inputs return `None`.
    fn grid_to_pixel(&self, bucket: usize, value: f64) -> Option<PixelPoint>;

    /// Pixel x of a bucket's center, independent of any value.
    ///
    /// Bar bandwidth estimation only needs horizontal positions.
    fn bucket_center_x(&self, bucket: usize) -> Option<f64>;

    /// Whether a plot-canvas pixel falls inside the plotting area.
    fn contains_pixel(&self, pixel: PixelPoint) -> bool;

    /// Current y-axis tick interval in value-space units.
    fn axis_interval(&self) -> f64;
}

/// Linear mapper over an evenly-bucketed x axis and a linear value axis with
/// inverted pixel Y (pixel y grows downward, values grow upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGridMapper {
    plot: PlotRect,
    buckets: usize,
    value_min: f64,
    value_max: f64,
    axis_interval: f64,
}

impl LinearGridMapper {
    pub fn new(
        plot: PlotRect,
        buckets: usize,
        value_min: f64,
        value_max: f64,
    ) -> TooltipResult<Self> {
        if !plot.is_valid() {
            return Err(TooltipError::InvalidData(
                "grid mapper plot rect must be finite with positive size".to_owned(),
            ));
        }
        if buckets == 0 {
            return Err(TooltipError::InvalidData(
                "grid mapper needs at least one time bucket".to_owned(),
            ));
        }
        if !value_min.is_finite() || !value_max.is_finite() || value_min >= value_max {
            return Err(TooltipError::InvalidData(
                "grid mapper value domain must be finite and non-empty".to_owned(),
            ));
        }

        Ok(Self {
            plot,
            buckets,
            value_min,
            value_max,
            axis_interval: (value_max - value_min) / DEFAULT_AXIS_SPLIT_COUNT,
        })
    }

    /// Overrides the derived tick interval with the host chart's actual one.
    pub fn with_axis_interval(mut self, interval: f64) -> TooltipResult<Self> {
        if !interval.is_finite() || interval <= 0.0 {
            return Err(TooltipError::InvalidData(
                "axis interval must be finite and > 0".to_owned(),
            ));
        }
        self.axis_interval = interval;
        Ok(self)
    }

    #[must_use]
    pub fn plot(&self) -> PlotRect {
        self.plot
    }

    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        (self.value_min, self.value_max)
    }

    fn bucket_to_x(&self, bucket: usize) -> f64 {
        if self.buckets == 1 {
            return self.plot.left + self.plot.width / 2.0;
        }
        let ratio = bucket as f64 / (self.buckets - 1) as f64;
        self.plot.left + ratio * self.plot.width
    }
}

impl GridMapper for LinearGridMapper {
    fn pixel_to_grid(&self, pixel: PixelPoint) -> Option<GridPoint> {
        if !self.plot.contains(pixel) {
            return None;
        }

        let bucket = if self.buckets == 1 {
            0
        } else {
            let ratio = (pixel.x - self.plot.left) / self.plot.width;
            let slot = (ratio * (self.buckets - 1) as f64).round();
            (slot as usize).min(self.buckets - 1)
        };

        let span = self.value_max - self.value_min;
        let value = self.value_max - (pixel.y - self.plot.top) / self.plot.height * span;
        if !value.is_finite() {
            return None;
        }

        Some(GridPoint::new(bucket, value))
    }

    fn grid_to_pixel(&self, bucket: usize, value: f64) -> Option<PixelPoint> {
        if bucket >= self.buckets || !value.is_finite() {
            return None;
        }

        let span = self.value_max - self.value_min;
        let x = self.bucket_to_x(bucket);
        let y = self.plot.top + (self.value_max - value) / span * self.plot.height;
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        Some(PixelPoint::new(x, y))
    }

    fn bucket_center_x(&self, bucket: usize) -> Option<f64> {
        if bucket >= self.buckets {
            return None;
        }
        Some(self.bucket_to_x(bucket))
    }

    fn contains_pixel(&self, pixel: PixelPoint) -> bool {
        self.plot.contains(pixel)
    }

    fn axis_interval(&self) -> f64 {
        self.axis_interval
    }
}
