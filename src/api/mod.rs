mod config;
mod line_chart;
mod pie_chart;
mod style;

pub use config::{LineChartConfig, PieChartConfig};
pub use line_chart::LineChart;
pub use pie_chart::PieChart;
pub use style::ChartStyle;

/// Shortest decimal form of a coordinate for SVG attributes.
pub(crate) fn fmt_num(value: f64) -> String {
    format!("{value}")
}
