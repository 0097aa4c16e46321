//! svgchart: SVG pie/donut and multi-series line charts.
//!
//! Geometry is computed headlessly and deterministically; drawing goes
//! through an injected [`Surface`](scene::Surface), so charts can be built
//! and asserted on without a display environment.

pub mod api;
pub mod core;
pub mod error;
pub mod scene;
pub mod telemetry;

pub use api::{ChartStyle, LineChart, LineChartConfig, PieChart, PieChartConfig};
pub use error::{ChartError, ChartResult};
