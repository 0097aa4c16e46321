use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{Measurement, Point};
use crate::error::{ChartError, ChartResult};

/// Series keyed by name, in insertion order.
pub type SeriesMap = IndexMap<String, Vec<f64>>;

/// Restricts a dataset to the keys of an allow-list.
///
/// The result preserves the *dataset's* key order, not the allow-list's.
/// Callers wanting a specific draw order must order the dataset itself.
#[must_use]
pub fn filter_series(data: &SeriesMap, keys: Option<&[String]>) -> SeriesMap {
    match keys {
        Some(keys) if !keys.is_empty() => data
            .iter()
            .filter(|(key, _)| keys.contains(key))
            .map(|(key, samples)| (key.clone(), samples.clone()))
            .collect(),
        _ => data.clone(),
    }
}

/// Maximum sample value over all series. 0 for an empty map or all-empty
/// series, so a degenerate chart maps everything to the baseline.
#[must_use]
pub fn max_value(data: &SeriesMap) -> f64 {
    data.values()
        .flat_map(|samples| samples.iter().copied())
        .fold(0.0, f64::max)
}

/// Category-axis length: the maximum series length over all series.
#[must_use]
pub fn groups_count(data: &SeriesMap) -> usize {
    data.values().map(Vec::len).max().unwrap_or(0)
}

/// Validates that every sample in the map is finite.
pub fn validate_samples(data: &SeriesMap) -> ChartResult<()> {
    for (key, samples) in data {
        if samples.iter().any(|sample| !sample.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{key}` contains a non-finite sample"
            )));
        }
    }
    Ok(())
}

/// Drawable rectangle of a line chart: the measured container minus a fixed
/// padding margin on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(measurement: Measurement, padding: f64) -> Self {
        Self {
            width: measurement.width,
            height: measurement.height,
            padding,
        }
    }

    #[must_use]
    pub fn graph_width(self) -> f64 {
        self.width - self.padding * 2.0
    }

    #[must_use]
    pub fn graph_height(self) -> f64 {
        self.height - self.padding * 2.0
    }

    /// Bottom-left corner of the drawable rectangle, where both axes meet.
    #[must_use]
    pub fn origin(self) -> Point {
        Point::new(self.padding, self.height - self.padding)
    }

    /// X center of category cell `index` when the drawable width is divided
    /// into `groups` equal cells.
    #[must_use]
    pub fn category_x(self, index: usize, groups: usize) -> f64 {
        if groups == 0 {
            return self.padding;
        }
        let cell = self.graph_width() / groups as f64;
        cell * (index as f64 + 1.0) - cell / 2.0 + self.padding
    }

    /// Y pixel for `value` on a linear scale from the baseline (0) to the top
    /// padding (`max`). A zero or non-finite scale maps to the baseline.
    #[must_use]
    pub fn value_y(self, value: f64, max: f64) -> f64 {
        let height = self.graph_height();
        let scaled = if max > 0.0 && value.is_finite() {
            height * (value / max)
        } else {
            0.0
        };
        height + self.padding - scaled
    }

    /// Vertical distance between adjacent gridline steps.
    #[must_use]
    pub fn step_px(self, steps: usize) -> f64 {
        if steps == 0 {
            return 0.0;
        }
        self.graph_height() / steps as f64
    }
}

/// Tick label value for gridline step `index`, counted from the top.
#[must_use]
pub fn step_value(max: f64, steps: usize, index: usize) -> f64 {
    if steps == 0 {
        return 0.0;
    }
    max / steps as f64 * (steps - index) as f64
}

/// Projects one series into polyline points, sample `i` centered in category
/// cell `i`.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry. Shorter series produce shorter polylines; they are
/// never padded out to `groups` points.
#[must_use]
pub fn project_polyline(samples: &[f64], max: f64, groups: usize, area: PlotArea) -> Vec<Point> {
    samples
        .iter()
        .enumerate()
        .map(|(index, value)| Point::new(area.category_x(index, groups), area.value_y(*value, max)))
        .collect()
}
