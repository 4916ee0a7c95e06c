use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{TooltipError, TooltipResult};

/// Raw timestamps at or below this magnitude are treated as seconds and
/// converted to milliseconds. Preserved for compatibility with mixed-epoch
/// query backends.
const MS_EPOCH_THRESHOLD: f64 = 99_999_999_999.0;

/// One plotted series: display name, color token, and values aligned to the
/// dataset's shared x axis. `None` is the no-data sentinel.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<Option<f64>>,
}

impl TimeSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }

    /// Convenience constructor for fully-populated series.
    #[must_use]
    pub fn from_values(name: impl Into<String>, color: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, color, values.iter().copied().map(Some).collect())
    }
}

/// Ordered series sharing one x axis of time-bucket timestamps.
///
/// Invariant: every series has exactly `x_axis.len()` values; the i-th value
/// of a series corresponds to the i-th x-axis label.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartDataset {
    x_axis: Vec<f64>,
    series: Vec<TimeSeries>,
}

impl ChartDataset {
    pub fn new(x_axis: Vec<f64>, series: Vec<TimeSeries>) -> TooltipResult<Self> {
        if x_axis.is_empty() {
            return Err(TooltipError::InvalidData(
                "dataset x axis must not be empty".to_owned(),
            ));
        }
        if x_axis.iter().any(|ts| !ts.is_finite()) {
            return Err(TooltipError::InvalidData(
                "dataset x axis timestamps must be finite".to_owned(),
            ));
        }

        let axis_len = x_axis.len();
        let original_count = series.len();
        let series: Vec<TimeSeries> = series
            .into_iter()
            .filter(|entry| entry.values.len() == axis_len)
            .collect();
        if series.len() != original_count {
            warn!(
                original_count,
                canonical_count = series.len(),
                axis_len,
                "dropped series with mismatched value length"
            );
        }

        Ok(Self { x_axis, series })
    }

    #[must_use]
    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    #[must_use]
    pub fn series(&self) -> &[TimeSeries] {
        &self.series
    }

    #[must_use]
    pub fn total_series(&self) -> usize {
        self.series.len()
    }

    /// Returns the value of `series_idx` at `bucket`, flattening the no-data
    /// sentinel and out-of-range lookups to `None`.
    #[must_use]
    pub fn value_at(&self, series_idx: usize, bucket: usize) -> Option<f64> {
        self.series
            .get(series_idx)
            .and_then(|entry| entry.values.get(bucket).copied())
            .flatten()
    }

    /// Returns the timestamp of `bucket` normalized to milliseconds.
    #[must_use]
    pub fn timestamp_ms_at(&self, bucket: usize) -> Option<f64> {
        self.x_axis.get(bucket).copied().map(normalize_timestamp_ms)
    }
}

/// Normalizes a raw x-axis timestamp to milliseconds.
///
/// Values above the threshold are assumed to already be milliseconds; smaller
/// values are treated as seconds.
#[must_use]
pub fn normalize_timestamp_ms(raw: f64) -> f64 {
    if raw > MS_EPOCH_THRESHOLD {
        raw
    } else {
        raw * 1000.0
    }
}

/// Builds x-axis timestamps (in ms) from chrono datetimes.
#[must_use]
pub fn timestamps_from_datetimes(datetimes: &[DateTime<Utc>]) -> Vec<f64> {
    datetimes
        .iter()
        .map(|dt| dt.timestamp_millis() as f64)
        .collect()
}
