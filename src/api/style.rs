use serde::{Deserialize, Serialize};

/// Visual constants shared by both chart types.
///
/// Serializable so host applications can persist chart setup alongside the
/// rest of their configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Margin reserved on all sides of the drawable area, in pixels.
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    /// Number of horizontal gridline steps on the value axis.
    #[serde(default = "default_steps_count")]
    pub steps_count: usize,
    /// Length of axis tick dashes, in pixels.
    #[serde(default = "default_tick_length")]
    pub tick_length: f64,
    #[serde(default = "default_axis_stroke_width")]
    pub axis_stroke_width: f64,
    #[serde(default = "default_series_stroke_width")]
    pub series_stroke_width: f64,
    /// Fill of the pie background disc and stroke of axis furniture.
    #[serde(default = "default_furniture_color")]
    pub furniture_color: String,
    #[serde(default = "default_label_color")]
    pub label_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding: default_padding(),
            font_size: default_font_size(),
            steps_count: default_steps_count(),
            tick_length: default_tick_length(),
            axis_stroke_width: default_axis_stroke_width(),
            series_stroke_width: default_series_stroke_width(),
            furniture_color: default_furniture_color(),
            label_color: default_label_color(),
        }
    }
}

fn default_padding() -> f64 {
    40.0
}

fn default_font_size() -> f64 {
    12.0
}

fn default_steps_count() -> usize {
    4
}

fn default_tick_length() -> f64 {
    10.0
}

fn default_axis_stroke_width() -> f64 {
    2.0
}

fn default_series_stroke_width() -> f64 {
    5.0
}

fn default_furniture_color() -> String {
    "#e6e6e6".to_owned()
}

fn default_label_color() -> String {
    "#d6d6d6".to_owned()
}
