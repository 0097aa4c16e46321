use serde::{Deserialize, Serialize};

use crate::api::style::ChartStyle;
use crate::core::color::ColorScheme;
use crate::core::line::SeriesMap;
use crate::core::pie::{PieDataset, SegmentOrdering};
use crate::error::{ChartError, ChartResult};

/// Pie/donut chart configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartConfig {
    pub data: PieDataset,
    /// Metric selector for composite datasets; ignored for flat ones.
    #[serde(default)]
    pub source: Option<String>,
    /// Explicit total overriding the sum of values, for charts showing a
    /// share of a larger whole.
    #[serde(default)]
    pub total: Option<f64>,
    /// Rotation offset in degrees applied to every arc endpoint.
    #[serde(default)]
    pub rotate: f64,
    /// Radius of the donut hole; 0 draws a full pie.
    #[serde(default)]
    pub inner_radius: f64,
    /// Defaults to the light palette when absent.
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub ordering: SegmentOrdering,
    #[serde(default)]
    pub style: ChartStyle,
}

impl PieChartConfig {
    #[must_use]
    pub fn new(data: PieDataset) -> Self {
        Self {
            data,
            source: None,
            total: None,
            rotate: 0.0,
            inner_radius: 0.0,
            color_scheme: None,
            ordering: SegmentOrdering::default(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_total(mut self, total: f64) -> Self {
        self.total = Some(total);
        self
    }

    #[must_use]
    pub fn with_rotate(mut self, rotate: f64) -> Self {
        self.rotate = rotate;
        self
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    #[must_use]
    pub fn with_ordering(mut self, ordering: SegmentOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string(self)
            .map_err(|err| ChartError::InvalidData(format!("config serialization failed: {err}")))
    }

    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        serde_json::from_str(raw)
            .map_err(|err| ChartError::InvalidData(format!("config deserialization failed: {err}")))
    }
}

/// Multi-series line chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    /// Series keyed by name; insertion order is the draw order.
    pub data: SeriesMap,
    /// Allow-list restricting which series are drawn. Filtering preserves
    /// the dataset's key order, not the allow-list's.
    #[serde(default)]
    pub keys: Option<Vec<String>>,
    /// Category labels by position; missing positions render blank.
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Defaults to the light palette when absent.
    #[serde(default)]
    pub color_scheme: Option<ColorScheme>,
    #[serde(default)]
    pub style: ChartStyle,
}

impl LineChartConfig {
    #[must_use]
    pub fn new(data: SeriesMap) -> Self {
        Self {
            data,
            keys: None,
            labels: None,
            color_scheme: None,
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        self.keys = Some(keys);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string(self)
            .map_err(|err| ChartError::InvalidData(format!("config serialization failed: {err}")))
    }

    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        serde_json::from_str(raw)
            .map_err(|err| ChartError::InvalidData(format!("config deserialization failed: {err}")))
    }
}
